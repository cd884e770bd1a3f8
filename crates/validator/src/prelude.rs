//! Prelude module for convenient imports.
//!
//! A single `use turnstile_validator::prelude::*;` brings in the core
//! traits, the error type, and every combinator.

pub use crate::core::{Validate, ValidateExt, ValidationError, ValidationResult};

pub use crate::combinators::{And, AndAll, Not, Or, and, and_all, not, or};

pub use crate::rule::{Rule, rule};
