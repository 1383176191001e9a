//! Log setup
//!
//! The TUI owns the terminal, so logs go to `~/.choreboard/choreboard.log`.
//! Filtering follows `CHOREBOARD_LOG` (EnvFilter syntax), default `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::storage;

pub const LOG_ENV: &str = "CHOREBOARD_LOG";

pub fn log_path() -> PathBuf {
    storage::choreboard_dir().join("choreboard.log")
}

/// Install the global subscriber. Returns the log file path.
pub fn init() -> Result<PathBuf> {
    storage::ensure_dir()?;
    let path = log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // a second init (tests, re-entry) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}
