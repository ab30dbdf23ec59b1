//! Public types for the eventlog API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Event types
pub use eventlog_core::{Emitter, EmitterId, Fragment, LogEvent, Severity, Source};

// Wire records
pub use eventlog_wire::{decode_query, encode_query, encode_query_pretty, CubeQuery};
