use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Error types for projectmgt
#[derive(Error, Debug)]
pub enum CoreError {
    /// A color string that is not `#RRGGBB` or `#AARRGGBB`
    #[error("Invalid color '{value}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor { value: String },

    /// Error reading a theme file
    #[error("Failed to read theme file at {path}: {source}")]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a theme file
    #[error("Failed to parse theme file at {path}: {source}")]
    ThemeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A time-code reappears after a different one, so its tasks are not contiguous
    #[error(
        "Time code '{time_code}' at position {index} is separated from its group starting at position {first_index}"
    )]
    ScatteredTimeCode {
        time_code: String,
        first_index: usize,
        index: usize,
    },

    /// A date field that does not match the expected format
    #[error("Invalid date '{value}': expected {format}")]
    InvalidDate { value: String, format: &'static str },

    /// A timeline whose end date is before its start date
    #[error("Timeline ends on {end} before it starts on {start}")]
    InvertedTimeline { start: String, end: String },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },

    /// Error serializing output
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CoreError {
    /// Get the full error message including the chain of sources.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }
        message
    }
}
