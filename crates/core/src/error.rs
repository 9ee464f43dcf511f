//! Error types raised by the Outcome machinery itself.
//!
//! These are distinct from the application failures an [`Outcome`](crate::Outcome)
//! carries: asking a `Failure` for its value is a programming error reported as
//! [`Error::NoSuchElement`], while a failed predicate or a captured panic become
//! ordinary causes.

use thiserror::Error;

/// Core error type for Outcome operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was requested from a `Failure`, or a cause from a `Success`.
    #[error("no such element: {operation}")]
    NoSuchElement { operation: &'static str },

    /// `filter` rejected the contained value.
    #[error("predicate does not hold for {value}")]
    PredicateFailed { value: String },

    /// A computation unwound instead of returning.
    #[error("computation panicked: {message}")]
    Panicked { message: String },

    /// A failure built from a plain message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Create a no-such-element error for the named accessor.
    #[must_use]
    pub const fn no_such_element(operation: &'static str) -> Self {
        Self::NoSuchElement { operation }
    }

    /// Create a predicate error describing the rejected value.
    pub fn predicate_failed(value: &impl std::fmt::Debug) -> Self {
        Self::PredicateFailed {
            value: format!("{value:?}"),
        }
    }

    /// Create a panic error from an already extracted message.
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// Returns true for the accessor misuse variant.
    #[must_use]
    pub const fn is_no_such_element(&self) -> bool {
        matches!(self, Self::NoSuchElement { .. })
    }
}
