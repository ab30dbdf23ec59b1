//! Log configuration.
//!
//! ```
//! use eventlog::LogConfig;
//!
//! let config = LogConfig::from_json(r#"{"active": false}"#).unwrap();
//! assert!(!config.active);
//! assert!(config.warn_when_inactive);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Settings fixed when an [`EventLog`](crate::EventLog) is built.
///
/// Missing keys fall back to [`LogConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Append recorded events; when false, `record` drops them
    pub active: bool,

    /// Print the one-time "logger deactivated" warning on the first read
    /// of an inactive log
    pub warn_when_inactive: bool,

    /// Mirror drops and the inactivity warning to `tracing`
    pub echo_to_tracing: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            active: true,
            warn_when_inactive: true,
            echo_to_tracing: true,
        }
    }
}

impl LogConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
