//! Closure-backed rules
//!
//! Most vocabularies don't need a dedicated struct per rule: the capability
//! is "callable as `&T -> ValidationResult`", not a nominal type. [`Rule`]
//! wraps a closure so vocabularies can be plain modules of factory
//! functions, and parameterized rules are factories closing over their
//! parameter:
//!
//! ```rust,ignore
//! use turnstile_validator::prelude::*;
//!
//! pub fn older_than(min: i64) -> impl Validate<Input = User> {
//!     rule("older_than", move |user: &User| {
//!         if user.age > min {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::new(
//!                 "older_than",
//!                 format!("User {user} must be older than {min}."),
//!             ))
//!         }
//!     })
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::core::{Validate, ValidationError};

/// A rule backed by a closure.
///
/// Identity is behavioral: two `Rule` values with different closures but
/// the same verdicts are interchangeable everywhere.
///
/// # Type Parameters
///
/// * `I` - The input type the closure inspects (can be `?Sized`)
/// * `F` - The closure type
pub struct Rule<I: ?Sized, F> {
    code: &'static str,
    check: F,
    _input: PhantomData<fn(&I)>,
}

/// Creates a [`Rule`] from a code and a predicate-with-reason closure.
///
/// The code doubles as the rule's [`name`](Validate::name) in debug output
/// and synthesized reasons.
pub fn rule<I, F>(code: &'static str, check: F) -> Rule<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> Result<(), ValidationError>,
{
    Rule {
        code,
        check,
        _input: PhantomData,
    }
}

impl<I: ?Sized, F> Rule<I, F> {
    /// The code this rule was created with.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl<I, F> Validate for Rule<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> Result<(), ValidationError>,
{
    type Input = I;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (self.check)(input)
    }

    fn name(&self) -> &str {
        self.code
    }
}

// Manual impls: deriving would demand bounds on `I`, which is only ever
// inspected by reference.
impl<I: ?Sized, F: Clone> Clone for Rule<I, F> {
    fn clone(&self) -> Self {
        Self {
            code: self.code,
            check: self.check.clone(),
            _input: PhantomData,
        }
    }
}

impl<I: ?Sized, F> fmt::Debug for Rule<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("code", &self.code).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidateExt;

    #[test]
    fn closure_verdict_is_the_rule_verdict() {
        let not_empty = rule("not_empty", |input: &str| {
            if input.is_empty() {
                Err(ValidationError::new("not_empty", "must not be empty"))
            } else {
                Ok(())
            }
        });
        assert!(not_empty.validate("x").is_ok());
        assert_eq!(
            not_empty.validate("").unwrap_err().reason(),
            "must not be empty"
        );
    }

    #[test]
    fn code_is_the_name() {
        let always = rule("always", |_: &str| Ok(()));
        assert_eq!(always.name(), "always");
    }

    #[test]
    fn closure_rules_compose() {
        let starts = rule("starts", |input: &str| {
            if input.starts_with('a') {
                Ok(())
            } else {
                Err(ValidationError::new("starts", "must start with 'a'"))
            }
        });
        let ends = rule("ends", |input: &str| {
            if input.ends_with('z') {
                Ok(())
            } else {
                Err(ValidationError::new("ends", "must end with 'z'"))
            }
        });

        let both = starts.and(ends);
        assert!(both.validate("abcz").is_ok());
        assert_eq!(both.validate("bcz").unwrap_err().code, "starts");
    }
}
