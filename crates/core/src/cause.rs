//! The failure carried by a `Failure` outcome.

use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// A shared, type-erased failure.
///
/// Cloning is cheap and keeps identity: two causes compare equal only when
/// they are clones of the same underlying error, the same way an exception
/// object is equal to itself and nothing else.
///
/// `Cause` deliberately does not implement [`std::error::Error`], which keeps
/// the blanket `From<E: Error>` conversion coherent. Use [`Cause::as_error`]
/// to reach the wrapped error.
#[derive(Clone)]
pub struct Cause {
    inner: SharedError,
}

impl Cause {
    /// Wrap an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Wrap an already boxed error.
    #[must_use]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }

    /// Build a cause from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(Error::Message(message.to_string()))
    }

    /// Borrow the wrapped error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Returns true if the wrapped error is of type `E`.
    #[must_use]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    /// Attempt to downcast the wrapped error to a concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Returns true if both causes are the same failure instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner).cast::<()>()
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.as_error()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

impl Hash for Cause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.addr(), state);
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

// Only the rendered message crosses a serialization boundary.
impl Serialize for Cause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cause {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|message| Self::new(Error::Message(message)))
    }
}
