//! Emitter handles
//!
//! An [`Emitter`] attributes an event to whatever produced it. Two comparison
//! strategies are available and deliberately kept apart:
//!
//! - **identity**: [`Emitter::is_same`] compares the handle's [`EmitterId`].
//!   Clones of a handle share the id; two handles built from equal values do
//!   not.
//! - **value**: [`Emitter::eq_value`] compares the wrapped values with
//!   `PartialEq`, and only when both are the exact same type.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_EMITTER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an emitter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmitterId(u64);

impl EmitterId {
    fn next() -> Self {
        EmitterId(NEXT_EMITTER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "emitter#{}", self.0)
    }
}

/// A value that can stand behind an [`Emitter`].
///
/// Implemented for every `'static` type that is `Display + PartialEq` and
/// thread-safe; there is no need to implement it by hand.
pub trait Source: Any + Send + Sync + fmt::Display {
    /// Upcast for downcasting and exact type checks
    fn as_any(&self) -> &dyn Any;

    /// Value equality against another source; false across types
    fn eq_source(&self, other: &dyn Source) -> bool;

    /// Name of the concrete type, for diagnostics
    fn type_name(&self) -> &'static str;
}

impl<T> Source for T
where
    T: Any + Send + Sync + fmt::Display + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_source(&self, other: &dyn Source) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Opaque, cheaply clonable handle to an event's originator.
#[derive(Clone)]
pub struct Emitter {
    id: EmitterId,
    source: Arc<dyn Source>,
}

impl Emitter {
    /// Wrap a value in a new handle with a fresh identity.
    ///
    /// The value must implement `Display + PartialEq + Send + Sync + 'static`
    /// (see [`Source`]). `PartialEq` is required even if the caller only ever
    /// queries by identity or type; wrap a type without it in a newtype that
    /// implements `PartialEq`.
    ///
    /// ```compile_fail
    /// use eventlog_core::Emitter;
    /// use std::fmt;
    ///
    /// struct Opaque;
    ///
    /// impl fmt::Display for Opaque {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("opaque")
    ///     }
    /// }
    ///
    /// // Opaque has no PartialEq, so it is not a Source.
    /// let _ = Emitter::new(Opaque);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use eventlog_core::Emitter;
    ///
    /// let a = Emitter::new("planner".to_string());
    /// let b = Emitter::new("planner".to_string());
    ///
    /// assert!(a.is_same(&a.clone()));
    /// assert!(!a.is_same(&b));
    /// assert!(a.eq_value(b.source()));
    /// ```
    pub fn new<T: Source>(value: T) -> Self {
        Self {
            id: EmitterId::next(),
            source: Arc::new(value),
        }
    }

    /// Identity of this handle
    pub fn id(&self) -> EmitterId {
        self.id
    }

    /// The wrapped value
    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    /// Identity comparison: true only for clones of the same handle.
    pub fn is_same(&self, other: &Emitter) -> bool {
        self.id == other.id
    }

    /// Value comparison against any source.
    pub fn eq_value(&self, other: &dyn Source) -> bool {
        self.source.eq_source(other)
    }

    /// Exact type check; no subtyping or deref is involved.
    pub fn is<T: Any>(&self) -> bool {
        self.source.as_any().is::<T>()
    }

    /// `TypeId` of the wrapped value
    pub fn value_type_id(&self) -> TypeId {
        self.source.as_any().type_id()
    }

    /// Borrow the wrapped value as `T` if it is exactly that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.source.as_any().downcast_ref::<T>()
    }

    /// Name of the wrapped value's type
    pub fn type_name(&self) -> &'static str {
        self.source.type_name()
    }
}

impl fmt::Display for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.source.as_ref(), f)
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("id", &self.id)
            .field("type", &self.type_name())
            .finish()
    }
}
