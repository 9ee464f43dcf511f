//! Runs caller-supplied logic and turns an unwind into a [`Cause`].
//!
//! Every combinator that invokes user code goes through [`guard`] or
//! [`guard_try`]. Neither classifies the resulting cause; that happens once,
//! in `Outcome::failure`.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::cause::Cause;
use crate::error::Error;
use crate::fatal::{Fatal, FatalError};

/// Run `f`, capturing a panic as a cause.
///
/// A [`FatalError`] payload is re-raised as is.
pub(crate) fn guard<R, F>(f: F) -> Result<R, Cause>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(cause_from_panic)
}

/// Run a fallible `f`, capturing both its error and a panic as a cause.
pub(crate) fn guard_try<R, E, F>(f: F) -> Result<R, Cause>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<Cause>,
{
    guard(f).and_then(|result| result.map_err(Into::into))
}

fn cause_from_panic(payload: Box<dyn Any + Send>) -> Cause {
    let payload = match payload.downcast::<FatalError>() {
        Ok(escalated) => panic::resume_unwind(escalated),
        Err(other) => other,
    };
    let payload = match payload.downcast::<Fatal>() {
        Ok(fatal) => return Cause::new(*fatal),
        Err(other) => other,
    };

    let message = panic_message(payload.as_ref());
    tracing::debug!(%message, "captured panic as failure");
    Cause::new(Error::panicked(message))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::io;

    use super::*;
    use crate::fatal::FatalKind;

    #[test]
    fn test_guard_returns_value() {
        assert_eq!(guard(|| 42).unwrap(), 42);
    }

    #[test]
    fn test_guard_captures_str_panic() {
        let cause = guard(|| -> i32 { panic!("boom") }).unwrap_err();
        assert_eq!(
            cause.downcast_ref::<Error>(),
            Some(&Error::panicked("boom"))
        );
    }

    #[test]
    fn test_guard_captures_formatted_panic() {
        let index = 7;
        let cause = guard(|| -> i32 { panic!("bad index {index}") }).unwrap_err();
        assert_eq!(cause.to_string(), "computation panicked: bad index 7");
    }

    #[test]
    fn test_guard_captures_opaque_payload() {
        let cause = guard(|| -> u8 { std::panic::panic_any(17_u8) }).unwrap_err();
        assert_eq!(cause.to_string(), "computation panicked: unknown panic");
    }

    #[test]
    fn test_guard_keeps_fatal_payload_as_cause() {
        let cause =
            guard(|| -> u8 { std::panic::panic_any(Fatal::terminated("sigkill")) }).unwrap_err();
        assert_eq!(
            cause.downcast_ref::<Fatal>().map(Fatal::kind),
            Some(FatalKind::Terminated)
        );
    }

    #[test]
    fn test_guard_reraises_escalation() {
        let escaped = panic::catch_unwind(|| {
            guard(|| -> u8 {
                crate::fatal::escalate(FatalKind::Interrupted, Cause::msg("stop"))
            })
        });
        let payload = escaped.unwrap_err();
        let escalated = payload.downcast_ref::<FatalError>().unwrap();
        assert_eq!(escalated.kind(), FatalKind::Interrupted);
    }

    #[test]
    fn test_guard_try_converts_error() {
        let cause = guard_try(|| -> Result<i32, io::Error> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        })
        .unwrap_err();
        assert!(cause.is::<io::Error>());
    }

    #[test]
    fn test_guard_try_passes_value() {
        let value = guard_try(|| "12".parse::<i32>()).unwrap();
        assert_eq!(value, 12);
    }
}
