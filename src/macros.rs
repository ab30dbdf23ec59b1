//! Variadic payload helpers.

/// Build a payload from any number of `Display` values.
///
/// ```
/// use eventlog::payload;
///
/// let parts = payload!["took ", 12, "ms"];
/// let text: String = parts.iter().map(|p| p.to_string()).collect();
/// assert_eq!(text, "took 12ms");
/// assert!(payload![].is_empty());
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        ::std::vec::Vec::<$crate::Fragment>::new()
    };
    ($($part:expr),+ $(,)?) => {
        ::std::vec![$($crate::Fragment::new($part)),+]
    };
}

/// Record an event with a variadic payload.
///
/// ```
/// use eventlog::prelude::*;
/// use eventlog::record;
///
/// let log = EventLog::new();
/// let cache = Emitter::new("cache".to_string());
/// record!(log, &cache, Severity::Critical, "evicted ", 3, " entries");
///
/// let events = log.of_severity(Severity::Critical);
/// assert_eq!(events[0].message().unwrap(), "evicted 3 entries");
/// ```
#[macro_export]
macro_rules! record {
    ($log:expr, $emitter:expr, $severity:expr $(, $part:expr)* $(,)?) => {
        $log.record($emitter, $severity, $crate::payload![$($part),*])
    };
}
