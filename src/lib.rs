//! # eventlog
//!
//! In-memory event log with severity tagging and predicate queries.
//!
//! Events are emitter/severity/payload tuples kept in insertion order. The
//! log can be switched off at build time, in which case recording becomes a
//! silent no-op and the first read emits a one-time warning.
//!
//! ## Quick Start
//!
//! ```
//! use eventlog::prelude::*;
//!
//! let log = EventLog::new();
//! let a = Emitter::new("ingest".to_string());
//! let b = Emitter::new("export".to_string());
//!
//! log.record(&a, Severity::Info, payload!["hello"]);
//! log.record(&b, Severity::Error, payload!["x", "y"]);
//!
//! let errors = log.at_least_severity(Severity::Important);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].render().unwrap(), "Error:\texport : \nxy");
//! ```
//!
//! ## Queries
//!
//! - [`EventLog::filter`] - arbitrary predicate
//! - [`EventLog::at_least_severity`] / [`EventLog::of_severity`] - thresholds
//! - [`EventLog::from_emitter`] - emitter identity
//! - [`EventLog::from_emitter_equal`] - emitter value equality
//! - [`EventLog::from_emitter_type`] - exact emitter type
//!
//! Every query returns a subsequence of the store in insertion order and
//! never mutates it.

#![warn(missing_docs)]

mod config;
mod error;
mod log;
mod macros;
mod types;

pub mod filter;
pub mod prelude;

// Re-export main entry points
pub use config::LogConfig;
pub use error::{Error, Result};
pub use log::{print_events, render, write_events, EventLog, EventLogBuilder, INACTIVE_WARNING};

// Re-export types
pub use types::*;
