//! Core types for the eventlog store
//!
//! This crate defines the value types every log operation works with:
//! - [`Severity`]: ordered importance of an event
//! - [`Emitter`]: opaque handle to whatever produced an event
//! - [`Fragment`]: one renderable piece of an event payload
//! - [`LogEvent`]: an immutable emitter/severity/payload record

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod emitter;
pub mod error;
pub mod event;
pub mod fragment;
pub mod severity;

pub use emitter::{Emitter, EmitterId, Source};
pub use error::{Error, Result};
pub use event::LogEvent;
pub use fragment::Fragment;
pub use severity::Severity;
