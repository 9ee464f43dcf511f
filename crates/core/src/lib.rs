//! # Outcome Core
//!
//! A value that is either a successfully computed result or the failure that
//! prevented it, plus combinators for working with it without branching on
//! errors at every call site.
//!
//! ## Laws
//!
//! - An Outcome is `Success` or `Failure` for its whole life
//! - A `Failure` never holds a fatal cause: [`Outcome::failure`] escalates it
//! - Caller logic run by a combinator is guarded: an `Err` or a panic becomes a
//!   new `Failure`
//! - A combinator that does not apply to the current variant passes it through
//!
//! ## Usage
//!
//! ```rust
//! use outcome_core::Outcome;
//!
//! let doubled = Outcome::try_of(|| "21".parse::<i32>())
//!     .map(|v| v * 2)
//!     .filter(|v| *v > 0);
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let fallback = Outcome::try_of(|| "x".parse::<i32>()).or_else(0);
//! assert_eq!(fallback, 0);
//! ```

mod capture;
mod cause;
pub mod checked;
mod error;
pub mod fatal;
pub mod iter;
mod outcome;
mod result;

pub use cause::Cause;
pub use error::Error;
pub use fatal::{Fatal, FatalError, FatalKind};
pub use outcome::Outcome;
pub use result::{Result, ResultExt};
