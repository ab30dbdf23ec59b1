//! Payload fragments
//!
//! A payload is an ordered list of fragments, each of which renders itself
//! through `Display`. Fragments are concatenated with no separator.

use std::fmt;
use std::sync::Arc;

/// One renderable payload element.
#[derive(Clone)]
pub struct Fragment(Arc<dyn fmt::Display + Send + Sync>);

impl Fragment {
    /// Wrap any displayable value.
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Fragment(Arc::new(value))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({})", self.0)
    }
}

impl From<&'static str> for Fragment {
    fn from(s: &'static str) -> Self {
        Fragment::new(s)
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::new(s)
    }
}
