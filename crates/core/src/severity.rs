//! Event severity levels
//!
//! Severities are totally ordered by declaration, so threshold queries are
//! plain comparisons: `event.severity >= Severity::Important`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered classification of event importance.
///
/// The numeric level (1 to 5) matches declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// Routine information
    Info = 1,
    /// Something unexpected but tolerated
    Warning = 2,
    /// Worth a reader's attention
    Important = 3,
    /// Needs action
    Critical = 4,
    /// An operation failed
    Error = 5,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Warning,
        Severity::Important,
        Severity::Critical,
        Severity::Error,
    ];

    /// Numeric level, 1 (Info) through 5 (Error).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Look up a severity by numeric level.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventlog_core::Severity;
    ///
    /// assert_eq!(Severity::from_level(3).unwrap(), Severity::Important);
    /// assert!(Severity::from_level(0).is_err());
    /// ```
    pub fn from_level(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Warning),
            3 => Ok(Severity::Important),
            4 => Ok(Severity::Critical),
            5 => Ok(Severity::Error),
            other => Err(Error::InvalidSeverity(other)),
        }
    }

    /// Display name used when rendering events.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Important => "Important",
            Severity::Critical => "Critical",
            Severity::Error => "Error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Severity::from_level(level)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.level()
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
