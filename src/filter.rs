//! Event predicates.
//!
//! The shorthand queries on [`EventLog`](crate::EventLog) are built from these;
//! they are public so callers can combine them in their own closures:
//!
//! ```
//! use eventlog::filter;
//! use eventlog::prelude::*;
//!
//! let log = EventLog::new();
//! let db = Emitter::new("db".to_string());
//! log.record_warning(&db, payload!["slow query"]);
//!
//! let at_least_warning = filter::at_least(Severity::Warning);
//! let from_db = filter::emitted_by(&db);
//! let hits = log.filter(|e| at_least_warning(e) && from_db(e));
//! assert_eq!(hits.len(), 1);
//! ```

use eventlog_core::{Emitter, LogEvent, Severity, Source};
use std::any::TypeId;

/// `severity >= level`
pub fn at_least(level: Severity) -> impl Fn(&LogEvent) -> bool {
    move |event| event.severity() >= level
}

/// `severity == level`
pub fn exactly(level: Severity) -> impl Fn(&LogEvent) -> bool {
    move |event| event.severity() == level
}

/// Emitter is a clone of `emitter` (identity).
pub fn emitted_by(emitter: &Emitter) -> impl Fn(&LogEvent) -> bool {
    let id = emitter.id();
    move |event| event.emitter().id() == id
}

/// Emitter value equals `value` (same type and `PartialEq`).
pub fn emitted_by_equal(value: &dyn Source) -> impl Fn(&LogEvent) -> bool + '_ {
    move |event| event.emitter().eq_value(value)
}

/// Emitter value is exactly of type `type_id`.
pub fn emitted_by_type(type_id: TypeId) -> impl Fn(&LogEvent) -> bool {
    move |event| event.emitter().value_type_id() == type_id
}
