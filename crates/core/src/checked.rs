//! Composition of fallible functions.
//!
//! A checked function is anything of the shape `Fn(T) -> Result<R, Cause>`.
//! These compose with `?`-style short-circuiting and slot straight into
//! [`Outcome::try_map`](crate::Outcome::try_map).

use crate::cause::Cause;

/// The checked function that returns its argument.
pub fn identity<T>() -> impl Fn(T) -> Result<T, Cause> {
    |value| Ok(value)
}

/// Run `f`, then `after` on its output.
pub fn and_then<T, R, U>(
    f: impl Fn(T) -> Result<R, Cause>,
    after: impl Fn(R) -> Result<U, Cause>,
) -> impl Fn(T) -> Result<U, Cause> {
    move |value| f(value).and_then(&after)
}

/// Run `before`, then `f` on its output.
pub fn compose<V, T, R>(
    f: impl Fn(T) -> Result<R, Cause>,
    before: impl Fn(V) -> Result<T, Cause>,
) -> impl Fn(V) -> Result<R, Cause> {
    move |value| before(value).and_then(&f)
}
