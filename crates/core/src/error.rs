//! Error types for core event operations

use thiserror::Error;

/// Errors raised by core event types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Numeric level outside `1..=5`
    #[error("invalid severity level: {0} (expected 1..=5)")]
    InvalidSeverity(u8),

    /// Severity name that matches no variant
    #[error("unknown severity name: {0}")]
    UnknownSeverity(String),

    /// A payload fragment or emitter failed to render as text
    #[error("failed to render event #{sequence}")]
    Render {
        /// Sequence number of the event that failed
        sequence: u64,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
