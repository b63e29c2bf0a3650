//! Restaurants, customers and the reviews that link them.
//!
//! Reviews are the only stored link between a customer and a restaurant; the
//! "who reviewed what" views in [`association`] are projected from them on
//! every read. A [`Database`] owns one [`db::Store`] and runs every query and
//! mutation inside the right side of its lock.
pub mod association;
pub mod config;
pub mod database;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod mutation;
pub mod query;
pub mod report;
pub mod seed;
pub mod ui;

pub use database::Database;
pub use db::{MemoryStore, SqliteStore, Store};
pub use error::{Result, ReviewError};
pub use models::{
    Customer, CustomerId, EntityKind, Restaurant, RestaurantId, Review, ReviewId,
    MAX_FEEDBACK_LEN, PRICE_SIGNS,
};

/// The interactive browser entry point and its state container.
pub use ui::{run_app, App};
