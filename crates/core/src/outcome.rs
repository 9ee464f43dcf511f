//! The Success/Failure sum type and its combinators.
//!
//! An [`Outcome`] is produced eagerly: the computation handed to
//! [`Outcome::of`] runs on the calling thread before `of` returns. After that
//! the value never changes; every combinator consumes it and yields a new one.
//!
//! Combinators that run caller logic capture both a returned error and a
//! panic. Combinators that act on the other variant pass it through untouched,
//! moving the same [`Cause`] into the result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capture::{guard, guard_try};
use crate::cause::Cause;
use crate::error::Error;
use crate::fatal;
use crate::iter::{IntoIter, Iter};
use crate::result::Result;

/// Either a computed value or the failure that prevented it.
///
/// `Failure` cannot be built with the variant constructor outside this
/// crate; use [`Outcome::failure`], which refuses fatal causes. Match it as
/// `Outcome::Failure(cause, ..)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    #[non_exhaustive]
    Failure(Cause),
}

impl<T> Outcome<T> {
    /// Run `computation` now and capture how it ended.
    ///
    /// A panic becomes a `Failure` unless its cause is fatal.
    ///
    /// # Panics
    ///
    /// Re-raises fatal failures, see [`Outcome::failure`].
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::from_attempt(guard(computation))
    }

    /// Run a fallible `computation` now and capture how it ended.
    ///
    /// Both a returned `Err` and a panic become a `Failure`.
    ///
    /// # Panics
    ///
    /// Re-raises fatal failures, see [`Outcome::failure`].
    pub fn try_of<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Into<Cause>,
    {
        Self::from_attempt(guard_try(computation))
    }

    /// Lift a known value.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Lift a known failure.
    ///
    /// # Panics
    ///
    /// If `cause` is fatal (see [`crate::fatal::classify`]) no `Failure` is
    /// produced. Instead the thread unwinds with a
    /// [`FatalError`](crate::FatalError) wrapping the cause, which no
    /// combinator of this crate will capture.
    pub fn failure(cause: impl Into<Cause>) -> Self {
        let cause = cause.into();
        if let Some(kind) = fatal::classify(cause.as_error()) {
            fatal::escalate(kind, cause);
        }
        Self::Failure(cause)
    }

    fn from_attempt(attempt: std::result::Result<T, Cause>) -> Self {
        match attempt {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::failure(cause),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transform the value; a panic in `mapper` becomes the new failure.
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::from_attempt(guard(|| mapper(value))),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Transform the value with a fallible `mapper`.
    pub fn try_map<U, E, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => Outcome::from_attempt(guard_try(|| mapper(value))),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Chain a computation that itself produces an Outcome.
    pub fn flat_map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => guard(|| mapper(value)).unwrap_or_else(Outcome::failure),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// A rejected value becomes a failure carrying
    /// [`Error::PredicateFailed`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
        T: fmt::Debug,
    {
        self.try_filter(|value| Ok::<_, Cause>(predicate(value)))
    }

    /// Like [`Outcome::filter`] with a fallible predicate.
    pub fn try_filter<E, P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> std::result::Result<bool, E>,
        E: Into<Cause>,
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => match guard_try(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::failure(Error::predicate_failed(&value)),
                Err(cause) => Self::failure(cause),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Replace the cause of a failure.
    ///
    /// If `mapper` panics, the captured panic becomes the cause instead.
    pub fn map_failure<E, F>(self, mapper: F) -> Self
    where
        F: FnOnce(Cause) -> E,
        E: Into<Cause>,
    {
        match self {
            Self::Failure(cause) => match guard(|| -> Cause { mapper(cause).into() }) {
                Ok(replacement) | Err(replacement) => Self::failure(replacement),
            },
            success @ Self::Success(_) => success,
        }
    }

    /// `flat_map` for a success, `on_failure` for a failure.
    pub fn transform<U, S, F>(self, on_success: S, on_failure: F) -> Outcome<U>
    where
        S: FnOnce(T) -> Outcome<U>,
        F: FnOnce(Cause) -> Outcome<U>,
    {
        match self {
            success @ Self::Success(_) => success.flat_map(on_success),
            Self::Failure(cause) => guard(|| on_failure(cause)).unwrap_or_else(Outcome::failure),
        }
    }

    /// Collapse both variants into a plain value.
    ///
    /// Neither function is guarded: a panic in either propagates.
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(Cause) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Perform a side effect on the value without consuming it.
    pub fn if_success<F: FnOnce(&T)>(self, action: F) -> Self {
        if let Self::Success(ref value) = self {
            action(value);
        }
        self
    }

    /// Perform a side effect on the cause without consuming it.
    pub fn if_failure<F: FnOnce(&Cause)>(self, action: F) -> Self {
        if let Self::Failure(ref cause) = self {
            action(cause);
        }
        self
    }

    /// Borrow the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] for a failure. No default is ever
    /// substituted.
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(Error::no_such_element("get() on Failure")),
        }
    }

    /// Borrow the cause.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] for a success.
    pub fn cause(&self) -> Result<&Cause> {
        match self {
            Self::Failure(cause) => Ok(cause),
            Self::Success(_) => Err(Error::no_such_element("cause() on Success")),
        }
    }

    /// The value, or `other` for a failure.
    pub fn or_else(self, other: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// The value, or the result of `supplier` for a failure.
    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// The value, or the original cause as an error.
    ///
    /// The returned cause is the very instance this Outcome held.
    ///
    /// # Errors
    ///
    /// Returns the cause of a failure.
    pub fn or_else_throw(self) -> std::result::Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// The value, or the error built by `mapper` from the cause.
    ///
    /// # Errors
    ///
    /// Returns `mapper(cause)` for a failure.
    pub fn or_else_throw_with<X, F>(self, mapper: F) -> std::result::Result<T, X>
    where
        F: FnOnce(Cause) -> X,
    {
        self.or_else_throw().map_err(mapper)
    }

    /// Discard the cause.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Discard the cause after logging it.
    pub fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(cause) => {
                tracing::error!("Operation failed: {}", cause);
                None
            }
        }
    }

    /// The value, or `default` after logging the cause.
    pub fn or_default_logged(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => {
                tracing::error!("Operation failed, using default: {}", cause);
                default
            }
        }
    }

    /// A fresh single-pass view over the value.
    pub fn iter(&self) -> Iter<'_, T> {
        let next = match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        };
        Iter { next }
    }
}

impl Outcome<()> {
    /// Run a procedure now; a normal return is `Success(())`.
    ///
    /// # Panics
    ///
    /// Re-raises fatal failures, see [`Outcome::failure`].
    pub fn run<F: FnOnce()>(procedure: F) -> Self {
        Self::of(procedure)
    }

    /// Run a fallible procedure now.
    ///
    /// # Panics
    ///
    /// Re-raises fatal failures, see [`Outcome::failure`].
    pub fn try_run<E, F>(procedure: F) -> Self
    where
        F: FnOnce() -> std::result::Result<(), E>,
        E: Into<Cause>,
    {
        Self::try_of(procedure)
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(cause) => write!(f, "Failure({cause})"),
        }
    }
}

impl<T, E: Into<Cause>> From<std::result::Result<T, E>> for Outcome<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for std::result::Result<T, Cause> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.or_else_throw()
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            next: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
