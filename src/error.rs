//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV decoding errors, passed through from the reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The table's first record is not the expected header
    #[error("Invalid header format: expected {expected:?}, found {found:?}")]
    InvalidHeader {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A data row that cannot become a transition
    #[error("Invalid row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// A `__`-prefixed trigger whose remainder is not a number of seconds
    #[error("Invalid timer value: {0:?} (a '__' prefix must be followed by a number of seconds)")]
    InvalidTimerValue(String),

    /// JSON encoding/decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graphviz rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a malformed row error
    pub fn malformed_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            row,
            reason: reason.into(),
        }
    }

    /// Create a render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = crate::custom_error!("test {}", "error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::malformed_row(3, "Undefined destination state.");
        assert_eq!(err.to_string(), "Invalid row 3: Undefined destination state.");
    }

    #[test]
    fn test_timer_error_names_offending_text() {
        let err = Error::InvalidTimerValue("x".to_string());
        assert!(err.to_string().contains("\"x\""));
    }

    #[test]
    fn test_toml_error_is_config_error() {
        let err: Error = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    fn ensure_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, "expected a positive number, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(ensure_positive(2).unwrap(), 2);
        let err = ensure_positive(-1).unwrap_err();
        assert_eq!(err.to_string(), "expected a positive number, got -1");
    }
}
