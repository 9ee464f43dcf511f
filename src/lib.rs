#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Outcome
//!
//! Deferred failure handling: a value that is either `Success` or `Failure`,
//! evaluated eagerly and transformed with combinators.
//!
//! This library re-exports the workspace's core crate for convenience.

pub use outcome_core;

pub mod prelude;
