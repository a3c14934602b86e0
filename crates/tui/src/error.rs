//! Error types for the TUI module.

use std::io;
use thiserror::Error;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Error type for TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Failed to initialize or restore the terminal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Theme loading or other core failure.
    #[error(transparent)]
    Core(#[from] projectmgt_core::CoreError),

    /// Failed to install the log subscriber.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}
