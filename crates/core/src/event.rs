//! Log event records
//!
//! A [`LogEvent`] is immutable once created. Its rendered form is
//!
//! ```text
//! <Severity>:\t<emitter> : \n<fragment 0><fragment 1>...<fragment n>
//! ```

use crate::emitter::Emitter;
use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// A single recorded emitter/severity/payload tuple.
///
/// Cloning is cheap: the emitter and payload are shared.
#[derive(Debug, Clone)]
pub struct LogEvent {
    sequence: u64,
    timestamp: i64,
    emitter: Emitter,
    severity: Severity,
    payload: Arc<[Fragment]>,
}

impl LogEvent {
    /// Create an event stamped with the current wall-clock time.
    pub fn new(sequence: u64, emitter: Emitter, severity: Severity, payload: Vec<Fragment>) -> Self {
        Self {
            sequence,
            timestamp: chrono::Utc::now().timestamp_millis(),
            emitter,
            severity,
            payload: payload.into(),
        }
    }

    /// Position in the owning log, starting at 0
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Milliseconds since the Unix epoch at creation
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Who produced the event
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Event severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Payload fragments in recording order
    pub fn payload(&self) -> &[Fragment] {
        &self.payload
    }

    /// Payload fragments concatenated with no separator.
    pub fn message(&self) -> Result<String> {
        let mut out = String::new();
        for fragment in self.payload.iter() {
            write!(out, "{}", fragment).map_err(|_| self.render_error())?;
        }
        Ok(out)
    }

    /// Render the event in its textual form.
    ///
    /// Fails only if the emitter or a fragment's `Display` impl fails.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", self).map_err(|_| self.render_error())?;
        Ok(out)
    }

    fn render_error(&self) -> Error {
        Error::Render {
            sequence: self.sequence,
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{} : \n", self.severity, self.emitter)?;
        for fragment in self.payload.iter() {
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}
