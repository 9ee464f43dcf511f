//! Prelude module - common imports for Outcome
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use outcome::prelude::*;
//! ```

// Re-export the sum type and its failure handle
pub use outcome_core::{Cause, Outcome};

// Re-export error types
pub use outcome_core::{Error, Fatal, FatalError, FatalKind, Result};

// Re-export extension traits
pub use outcome_core::ResultExt;
