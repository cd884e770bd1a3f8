//! OR combinator - alternative between rules
//!
//! [`Or`] accepts when either operand accepts, trying the left one first
//! and short-circuiting on success.

use crate::core::{Validate, ValidationError};

/// Accepts when either rule accepts.
///
/// The left rule is tried first; its success short-circuits. When both
/// reject, the rejection carries the right rule's reason: one reason, not
/// a merged report.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule
/// * `R` - The right (fallback) rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (fallback) rule.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an [`Or`] combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::rule;

    fn exact_length(len: usize) -> impl Validate<Input = str> {
        rule("exact_length", move |input: &str| {
            if input.len() == len {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "exact_length",
                    format!("length must be exactly {len}"),
                ))
            }
        })
    }

    #[test]
    fn left_success_short_circuits() {
        let rule = Or::new(exact_length(5), exact_length(10));
        assert!(rule.validate("hello").is_ok());
    }

    #[test]
    fn falls_back_to_right() {
        let rule = Or::new(exact_length(5), exact_length(10));
        assert!(rule.validate("helloworld").is_ok());
    }

    #[test]
    fn both_rejecting_surfaces_right_reason() {
        let rule = Or::new(exact_length(5), exact_length(10));
        let error = rule.validate("hi").unwrap_err();
        assert_eq!(error.reason(), "length must be exactly 10");
    }
}
