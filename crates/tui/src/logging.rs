//! Optional file logging for the TUI.
//!
//! The terminal is busy drawing the screens, so logs go to the file named by
//! `PMT_LOG_FILE`. Nothing is installed when the variable is unset or empty.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{TuiError, TuiResult};

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "PMT_LOG_FILE";

/// Log file path from the environment, if set.
pub fn log_file_path() -> Option<PathBuf> {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Install a subscriber appending to the log file.
///
/// Returns whether a subscriber was installed. Uses `RUST_LOG` for
/// filtering, defaulting to `info`.
///
/// # Errors
///
/// Returns `TuiError::Terminal` if the file cannot be opened and
/// `TuiError::Logging` if a subscriber is already installed.
pub fn init_logging() -> TuiResult<bool> {
    let Some(path) = log_file_path() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| TuiError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging to file");
    Ok(true)
}
