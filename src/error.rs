//! Error type shared by the stores, queries and mutations.

use thiserror::Error;

use crate::models::EntityKind;

/// Everything the library can fail with. `NotFound` and `Validation` are
/// caused by caller input; the other kinds point at the data or the backend
/// and retrying the same call will not help.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("invalid review: {0}")]
    Validation(String),

    #[error("no {0} to choose from")]
    EmptyDomain(&'static str),

    #[error("internal consistency error: {0}")]
    Internal(String),

    #[error("storage backend failed")]
    Storage(#[from] rusqlite::Error),
}

impl ReviewError {
    pub(crate) fn not_found(kind: EntityKind, id: i64) -> Self {
        ReviewError::NotFound { kind, id }
    }

    /// A review row points at an entity that no longer resolves.
    pub(crate) fn dangling(kind: EntityKind, id: i64) -> Self {
        ReviewError::Internal(format!("stored reference to {kind} {id} does not resolve"))
    }

    /// `true` for errors the caller caused and can fix by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ReviewError::NotFound { .. } | ReviewError::Validation(_)
        )
    }
}

pub type Result<T, E = ReviewError> = std::result::Result<T, E>;
