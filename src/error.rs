//! Unified error types for eventlog.
//!
//! Recording never fails. Errors only come out of rendering (a payload's
//! `Display` impl failed), output I/O, level parsing, and config/DTO decoding.

use thiserror::Error;

/// All eventlog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Level number or name that maps to no severity
    #[error("invalid severity: {0}")]
    InvalidSeverity(String),

    /// An event could not be rendered as text
    #[error("render error: {0}")]
    Render(String),

    /// I/O error while writing rendered events
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or wire record could not be decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for eventlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an invalid-severity error.
    pub fn is_invalid_severity(&self) -> bool {
        matches!(self, Error::InvalidSeverity(_))
    }
}

// Convert from core errors
impl From<eventlog_core::Error> for Error {
    fn from(e: eventlog_core::Error) -> Self {
        use eventlog_core::Error as CoreError;
        match e {
            CoreError::InvalidSeverity(_) | CoreError::UnknownSeverity(_) => {
                Error::InvalidSeverity(e.to_string())
            }
            CoreError::Render { .. } => Error::Render(e.to_string()),
        }
    }
}

impl From<eventlog_wire::DecodeError> for Error {
    fn from(e: eventlog_wire::DecodeError) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
