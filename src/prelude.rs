//! Convenient imports for eventlog.
//!
//! ```
//! use eventlog::prelude::*;
//!
//! let log = EventLog::new();
//! log.record_info(&Emitter::new("main".to_string()), payload!["ready"]);
//! ```

// Main entry point
pub use crate::log::{EventLog, EventLogBuilder};
pub use crate::config::LogConfig;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{Emitter, Fragment, LogEvent, Severity, Source};

// Macros
pub use crate::payload;
