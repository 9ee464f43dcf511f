//! Result type definition and extension traits.
//!
//! Bridges the standard `Result` and [`Outcome`] so code written with `?`
//! and code written with combinators can hand values to each other.

use crate::cause::Cause;
use crate::error::Error;
use crate::outcome::Outcome;

/// The Result type for Outcome's own accessors.
///
/// Only accessor misuse is reported this way, see [`Error`]. Application
/// failures travel inside an [`Outcome`] or as a [`Cause`].
///
/// # Examples
///
/// ```ignore
/// match outcome.get() {
///     Ok(value) => println!("Got: {}", value),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait turning any `Result` into an [`Outcome`].
pub trait ResultExt<T> {
    /// Convert into an Outcome, classifying the error like
    /// [`Outcome::failure`] does.
    ///
    /// # Panics
    ///
    /// Re-raises fatal errors.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Cause>,
{
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}
