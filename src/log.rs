//! The event log store.
//!
//! [`EventLog`] is an explicitly constructed, shareable store. Wrap it in an
//! `Arc` to share one log across a run; there is no process-global instance.
//!
//! ## Activation
//!
//! The `active` switch is fixed at build time:
//!
//! - active: `record` appends.
//! - inactive: `record` silently drops the event, and the first retrieval
//!   writes `Warning: logger deactivated!` once to the diagnostic stream.
//!
//! ## Cost
//!
//! Every query clones the store under the lock, then scans the clone
//! linearly with the lock released. The store is unbounded and never evicts.

use crate::config::LogConfig;
use crate::error::Result;
use crate::filter;
use eventlog_core::{Emitter, Fragment, LogEvent, Severity, Source};
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, trace, warn};

/// Text written once when an inactive log is first read.
pub const INACTIVE_WARNING: &str = "Warning: logger deactivated!";

type DiagnosticSink = Box<dyn Write + Send>;

/// In-memory, insertion-ordered store of [`LogEvent`]s.
///
/// # Example
///
/// ```
/// use eventlog::prelude::*;
///
/// let log = EventLog::new();
/// let planner = Emitter::new("planner".to_string());
///
/// log.record_info(&planner, payload!["step ", 1, " done"]);
/// log.record(&planner, Severity::Error, payload!["step ", 2, " failed"]);
///
/// assert_eq!(log.all_events().len(), 2);
/// assert_eq!(log.at_least_severity(Severity::Important).len(), 1);
/// ```
pub struct EventLog {
    config: LogConfig,
    events: Mutex<Vec<LogEvent>>,
    warning_issued: AtomicBool,
    diagnostics: Mutex<DiagnosticSink>,
}

impl EventLog {
    /// Create an active log with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a log from a config, with diagnostics on stderr.
    pub fn with_config(config: LogConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Create a builder for log configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use eventlog::EventLog;
    ///
    /// let log = EventLog::builder()
    ///     .inactive()
    ///     .diagnostics(std::io::sink())
    ///     .build();
    /// assert!(!log.is_active());
    /// ```
    pub fn builder() -> EventLogBuilder {
        EventLogBuilder::new()
    }

    /// Settings this log was built with
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Whether `record` appends
    pub fn is_active(&self) -> bool {
        self.config.active
    }

    /// Number of stored events. Does not trigger the inactivity warning.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True when nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Append an event if the log is active; otherwise drop it silently.
    pub fn record<I>(&self, emitter: &Emitter, severity: Severity, payload: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        if !self.config.active {
            if self.config.echo_to_tracing {
                debug!(emitter = %emitter.id(), %severity, "event dropped: log inactive");
            }
            return;
        }

        let payload: Vec<Fragment> = payload.into_iter().collect();
        let mut events = self.events.lock();
        let sequence = events.len() as u64;
        trace!(sequence, emitter = %emitter.id(), %severity, "event recorded");
        events.push(LogEvent::new(sequence, emitter.clone(), severity, payload));
    }

    /// [`record`](Self::record) at [`Severity::Info`].
    pub fn record_info<I>(&self, emitter: &Emitter, payload: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        self.record(emitter, Severity::Info, payload)
    }

    /// [`record`](Self::record) at [`Severity::Warning`].
    pub fn record_warning<I>(&self, emitter: &Emitter, payload: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        self.record(emitter, Severity::Warning, payload)
    }

    // =========================================================================
    // Retrieval
    // =========================================================================

    /// Every stored event, in insertion order.
    pub fn all_events(&self) -> Vec<LogEvent> {
        self.warn_if_inactive();
        self.events.lock().clone()
    }

    /// Stored events matching `predicate`, in insertion order.
    ///
    /// The predicate runs on a snapshot taken under the lock, so it may call
    /// back into this log. Events recorded from inside the predicate are not
    /// part of the snapshot.
    pub fn filter<P>(&self, predicate: P) -> Vec<LogEvent>
    where
        P: Fn(&LogEvent) -> bool,
    {
        self.warn_if_inactive();
        let snapshot = self.events.lock().clone();
        snapshot
            .into_iter()
            .filter(|event| predicate(event))
            .collect()
    }

    /// Events with severity `>= level`.
    pub fn at_least_severity(&self, level: Severity) -> Vec<LogEvent> {
        self.filter(filter::at_least(level))
    }

    /// Events with severity exactly `level`.
    pub fn of_severity(&self, level: Severity) -> Vec<LogEvent> {
        self.filter(filter::exactly(level))
    }

    /// [`at_least_severity`](Self::at_least_severity) by numeric level (1..=5).
    pub fn at_least_level(&self, level: u8) -> Result<Vec<LogEvent>> {
        Ok(self.at_least_severity(Severity::from_level(level)?))
    }

    /// [`of_severity`](Self::of_severity) by numeric level (1..=5).
    pub fn of_level(&self, level: u8) -> Result<Vec<LogEvent>> {
        Ok(self.of_severity(Severity::from_level(level)?))
    }

    /// Events recorded through `emitter` or one of its clones.
    ///
    /// A distinct handle wrapping an equal value does not match; use
    /// [`from_emitter_equal`](Self::from_emitter_equal) for that.
    pub fn from_emitter(&self, emitter: &Emitter) -> Vec<LogEvent> {
        self.filter(filter::emitted_by(emitter))
    }

    /// Events whose emitter value equals `value`.
    pub fn from_emitter_equal(&self, value: &dyn Source) -> Vec<LogEvent> {
        self.filter(filter::emitted_by_equal(value))
    }

    /// Events whose emitter value is exactly of type `T`.
    pub fn from_emitter_type<T: Any>(&self) -> Vec<LogEvent> {
        self.from_emitter_type_id(TypeId::of::<T>())
    }

    /// Events whose emitter value has the given `TypeId`.
    pub fn from_emitter_type_id(&self, type_id: TypeId) -> Vec<LogEvent> {
        self.filter(filter::emitted_by_type(type_id))
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Write every stored event to stdout, one rendered event per line.
    pub fn print_all(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    /// Write every stored event to `writer`, one rendered event per line.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_events(writer, &self.all_events())
    }

    /// Write the inactivity warning on the first read of an inactive log.
    ///
    /// Write errors on the diagnostic stream are ignored.
    fn warn_if_inactive(&self) {
        if self.config.active || !self.config.warn_when_inactive {
            return;
        }
        if self.warning_issued.swap(true, Ordering::AcqRel) {
            return;
        }
        if self.config.echo_to_tracing {
            warn!("event log read while inactive; no events were recorded");
        }
        let mut sink = self.diagnostics.lock();
        let _ = writeln!(sink, "{}", INACTIVE_WARNING);
        let _ = sink.flush();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("config", &self.config)
            .field("len", &self.len())
            .field("warning_issued", &self.warning_issued.load(Ordering::Acquire))
            .finish()
    }
}

/// Render one event as text.
pub fn render(event: &LogEvent) -> Result<String> {
    Ok(event.render()?)
}

/// Write `events` to stdout, one rendered event per line.
pub fn print_events(events: &[LogEvent]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_events(&mut out, events)
}

/// Write `events` to `writer`, one rendered event per line.
///
/// Stops at the first event that fails to render.
pub fn write_events<W: Write>(writer: &mut W, events: &[LogEvent]) -> Result<()> {
    for event in events {
        let text = event.render()?;
        writeln!(writer, "{}", text)?;
    }
    writer.flush()?;
    Ok(())
}

/// Builder for [`EventLog`].
pub struct EventLogBuilder {
    config: LogConfig,
    diagnostics: Option<DiagnosticSink>,
}

impl EventLogBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            diagnostics: None,
        }
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set whether `record` appends.
    pub fn active(mut self, active: bool) -> Self {
        self.config.active = active;
        self
    }

    /// Shorthand for `active(false)`.
    pub fn inactive(self) -> Self {
        self.active(false)
    }

    /// Set whether the one-time inactivity warning is written.
    pub fn warn_when_inactive(mut self, warn: bool) -> Self {
        self.config.warn_when_inactive = warn;
        self
    }

    /// Set whether drops and warnings are mirrored to `tracing`.
    pub fn echo_to_tracing(mut self, echo: bool) -> Self {
        self.config.echo_to_tracing = echo;
        self
    }

    /// Send the inactivity warning to `writer` instead of stderr.
    pub fn diagnostics<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.diagnostics = Some(Box::new(writer));
        self
    }

    /// Build the log.
    pub fn build(self) -> EventLog {
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Box::new(io::stderr()));
        EventLog {
            config: self.config,
            events: Mutex::new(Vec::new()),
            warning_issued: AtomicBool::new(false),
            diagnostics: Mutex::new(diagnostics),
        }
    }
}

impl Default for EventLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
