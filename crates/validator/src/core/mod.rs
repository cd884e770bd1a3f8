//! Core validation types and traits
//!
//! The fundamental building blocks of the rule algebra:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! # Architecture
//!
//! Validation is a capability, not a hierarchy. A rule is generic over its
//! input type and returns `Result<(), ValidationError>`:
//!
//! ```rust,ignore
//! use turnstile_validator::core::{Validate, ValidationError};
//!
//! struct OlderThan { min: i64 }
//!
//! impl Validate for OlderThan {
//!     type Input = User;
//!
//!     fn validate(&self, user: &User) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Rules compose with logical combinators, producing new rules and leaving
//! the operands untouched:
//!
//! ```rust,ignore
//! let validator = name_is_not_empty().and(email_contains_at_sign());
//! ```
//!
//! Combinators are generic structs, so a composed rule compiles to the same
//! code as writing the checks out by hand.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// The outcome of evaluating a rule.
///
/// `Ok(())` is valid and carries no payload; `Err` is invalid and carries
/// exactly one reason. The two observations cannot disagree, the sum type
/// rules it out.
pub type ValidationResult = Result<(), ValidationError>;
