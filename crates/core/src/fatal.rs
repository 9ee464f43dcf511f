//! Classification of failures that must never be wrapped.
//!
//! A fatal failure is one the running process cannot meaningfully recover
//! from locally: an interruption request, a linkage error, forced termination
//! or exhaustion of a runtime resource. Swallowing one of these inside a
//! `Failure` would hide it from whatever supervises the process, so
//! [`Outcome::failure`](crate::Outcome::failure) escalates instead.
//!
//! Escalation unwinds with a [`FatalError`] payload. The combinators re-raise
//! that payload untouched, so it escapes any number of nested combinators. Callers that need to observe it use
//! [`std::panic::catch_unwind`] and downcast the payload.

use std::collections::TryReserveError;
use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;

use crate::cause::Cause;

/// The categories of unrecoverable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatalKind {
    /// Cancellation or interruption of the running thread.
    Interrupted,
    /// Irrecoverable linkage failure (missing symbol, incompatible module).
    Linkage,
    /// Forced termination of the running thread or process.
    Terminated,
    /// Exhaustion of memory, stack or another runtime resource.
    ResourceExhausted,
}

impl fmt::Display for FatalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interrupted => "interrupted",
            Self::Linkage => "linkage error",
            Self::Terminated => "terminated",
            Self::ResourceExhausted => "resource exhausted",
        };
        f.write_str(name)
    }
}

/// An error value that signals a fatal condition.
///
/// Return one from a computation (or `panic_any` with one) to request that
/// the failure bypass the Outcome machinery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fatal {
    #[error("interrupted: {0}")]
    Interrupted(String),

    #[error("linkage error: {0}")]
    Linkage(String),

    #[error("terminated: {0}")]
    Terminated(String),

    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
}

impl Fatal {
    /// Create an interruption signal.
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted(reason.into())
    }

    /// Create a linkage error.
    pub fn linkage(reason: impl Into<String>) -> Self {
        Self::Linkage(reason.into())
    }

    /// Create a forced-termination signal.
    pub fn terminated(reason: impl Into<String>) -> Self {
        Self::Terminated(reason.into())
    }

    /// Create a resource exhaustion error.
    pub fn resource_exhausted(reason: impl Into<String>) -> Self {
        Self::ResourceExhausted(reason.into())
    }

    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> FatalKind {
        match self {
            Self::Interrupted(_) => FatalKind::Interrupted,
            Self::Linkage(_) => FatalKind::Linkage,
            Self::Terminated(_) => FatalKind::Terminated,
            Self::ResourceExhausted(_) => FatalKind::ResourceExhausted,
        }
    }
}

/// The unwinding payload raised when a fatal cause reaches `Outcome::failure`.
#[derive(Debug, Clone, Error)]
#[error("fatal error ({kind}): {cause}")]
pub struct FatalError {
    kind: FatalKind,
    cause: Cause,
}

impl FatalError {
    #[must_use]
    pub const fn kind(&self) -> FatalKind {
        self.kind
    }

    /// The original failure, unchanged.
    #[must_use]
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

/// Decide whether `error` belongs to one of the fatal categories.
///
/// Only the error itself is inspected, not its `source()` chain. An
/// [`io::Error`] of kind `Interrupted` always counts as an interruption.
#[must_use]
pub fn classify(error: &(dyn StdError + 'static)) -> Option<FatalKind> {
    if let Some(fatal) = error.downcast_ref::<Fatal>() {
        return Some(fatal.kind());
    }
    if let Some(escalated) = error.downcast_ref::<FatalError>() {
        return Some(escalated.kind());
    }
    if error.is::<TryReserveError>() {
        return Some(FatalKind::ResourceExhausted);
    }
    error.downcast_ref::<io::Error>().and_then(classify_io)
}

fn classify_io(error: &io::Error) -> Option<FatalKind> {
    if error.kind() == io::ErrorKind::Interrupted {
        return Some(FatalKind::Interrupted);
    }
    error.get_ref().and_then(|inner| classify(inner))
}

/// Returns true if `error` must never be wrapped in a `Failure`.
#[must_use]
pub fn is_fatal(error: &(dyn StdError + 'static)) -> bool {
    classify(error).is_some()
}

/// Unwind with a [`FatalError`] wrapping `cause`. Never returns.
pub(crate) fn escalate(kind: FatalKind, cause: Cause) -> ! {
    tracing::error!(%kind, %cause, "fatal failure escaping outcome");
    std::panic::panic_any(FatalError { kind, cause })
}
