//! `tracing` subscriber setup for the binary.

use std::fs::{self, File};
use std::io;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Where log lines go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    /// Drop everything. Used while the terminal UI owns the screen.
    Discard,
}

/// Install the global subscriber. A configured log file always wins over the
/// fallback.
pub fn init(config: &Config, fallback: Fallback) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (&config.log_file, fallback) {
        (Some(path), _) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("failed to create log directory")?;
            }
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, Fallback::Stderr) => builder.with_writer(io::stderr).try_init(),
        (None, Fallback::Discard) => builder.with_writer(io::sink).try_init(),
    };

    installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
