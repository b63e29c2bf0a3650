//! Runtime settings, read from `REVIEWS_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};

const BACKEND_VAR: &str = "REVIEWS_BACKEND";
const SEED_VAR: &str = "REVIEWS_SEED";
const LOG_VAR: &str = "REVIEWS_LOG";
const LOG_FILE_VAR: &str = "REVIEWS_LOG_FILE";

/// Log filter used when `REVIEWS_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Which [`crate::db::Store`] the binary runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Memory,
    Sqlite,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Backend::Memory),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(anyhow!(
                "unknown {BACKEND_VAR} '{other}', expected 'memory' or 'sqlite'"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: Backend,
    /// Load the sample restaurants, customers and reviews on startup.
    pub seed: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            seed: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(backend) = lookup(BACKEND_VAR) {
            config.backend = backend.parse()?;
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = parse_flag(SEED_VAR, &seed)?;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|value| !value.trim().is_empty()) {
            config.log_filter = filter;
        }
        config.log_file = lookup(LOG_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{key} must be true or false, got '{other}'")),
    }
}
