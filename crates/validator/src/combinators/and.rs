//! AND combinator - sequencing of rules
//!
//! [`And`] evaluates its left operand first. A rejection there is returned
//! unchanged and the right operand is never consulted; otherwise the verdict
//! is the right operand's. The surfaced reason is therefore always the
//! reason of the *first* failing component.
//!
//! # Examples
//!
//! ```rust,ignore
//! use turnstile_validator::prelude::*;
//!
//! let signup = name_is_not_empty().and(email_contains_at_sign());
//! assert!(signup.validate(&gregor).is_ok());
//! ```

use crate::core::{Validate, ValidationError};

/// Sequences two rules; both must accept.
///
/// Evaluation short-circuits: when `left` rejects, `right` is not evaluated
/// and the rejection carries `left`'s reason only.
///
/// Associative but not commutative: swapping the operands can change which
/// reason a doubly-invalid input is rejected with.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule
/// * `R` - The right (second) rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (second) rule.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an [`And`] combinator from two rules.
///
/// Free-function form of [`ValidateExt::and`](crate::core::ValidateExt::and).
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Sequences a homogeneous collection of rules.
///
/// All rules must accept; evaluation stops at the first rejection. Useful
/// when the rule set is assembled at runtime.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    rules: Vec<V>,
}

/// Creates an [`AndAll`] combinator from a vector of rules.
#[must_use]
pub fn and_all<V>(rules: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { rules }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.validate(input)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidateExt;

    struct MinLength {
        min: usize,
    }

    impl Validate for MinLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.min {
                Ok(())
            } else {
                Err(ValidationError::new("min_length", "too short"))
            }
        }
    }

    struct MaxLength {
        max: usize,
    }

    impl Validate for MaxLength {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() <= self.max {
                Ok(())
            } else {
                Err(ValidationError::new("max_length", "too long"))
            }
        }
    }

    #[test]
    fn both_pass() {
        let rule = And::new(MinLength { min: 5 }, MaxLength { max: 10 });
        assert!(rule.validate("hello").is_ok());
    }

    #[test]
    fn left_rejection_wins() {
        let rule = MinLength { min: 5 }.and(MaxLength { max: 3 });
        let error = rule.validate("hi").unwrap_err();
        assert_eq!(error.code, "min_length");
    }

    #[test]
    fn chains_keep_first_reason() {
        let rule = MinLength { min: 3 }
            .and(MaxLength { max: 4 })
            .and(MinLength { min: 10 });
        let error = rule.validate("hello").unwrap_err();
        assert_eq!(error.code, "max_length");
    }

    #[test]
    fn and_all_stops_at_first_rejection() {
        let rules = vec![
            MinLength { min: 3 },
            MinLength { min: 5 },
            MinLength { min: 7 },
        ];
        let combined = and_all(rules);
        assert!(combined.validate("helloworld").is_ok());
        assert!(combined.validate("hello").is_err());
    }
}
