//! # turnstile-validator
//!
//! A composable algebra for semantic validation rules.
//!
//! A rule is anything that can look at a value and answer "valid, or invalid
//! for exactly one reason". Rules are plain values: they are combined, never
//! mutated, and two rules are interchangeable whenever they answer the same
//! way for every input.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use turnstile_validator::prelude::*;
//!
//! let signup = name_is_not_empty().and(email_contains_at_sign());
//! assert!(signup.validate(&user).is_ok());
//! ```
//!
//! ## Building Rules
//!
//! Implement [`Validate`](core::Validate) on a struct for parameterized
//! rules, or wrap a closure with [`rule`](rule::rule) when a dedicated type
//! would be ceremony. Rule vocabularies defined in unrelated modules compose
//! at the use site through the same [`and`](core::ValidateExt::and) method;
//! neither side needs to know the other exists.

pub mod combinators;
pub mod core;
pub mod prelude;
pub mod rule;
