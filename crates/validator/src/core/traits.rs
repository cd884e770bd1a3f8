//! Core traits for the rule algebra
//!
//! This module defines the capability every rule implements, plus the
//! extension trait that hangs the combinators off it.

use crate::core::ValidationError;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The capability every rule implements: evaluate an input, produce a
/// verdict.
///
/// The trait is generic over the input type, so composition is checked at
/// compile time. Rules are stateless and pure; evaluating one must not
/// mutate anything, and the same input always yields the same verdict.
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile_validator::core::{Validate, ValidationError};
///
/// struct EmailContainsAtSign;
///
/// impl Validate for EmailContainsAtSign {
///     type Input = User;
///
///     fn validate(&self, user: &User) -> Result<(), ValidationError> {
///         if user.email.contains('@') {
///             Ok(())
///         } else {
///             Err(ValidationError::new("email", "E-Mail is not valid."))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so rules can be written directly against `str` and `[T]`.
    type Input: ?Sized;

    /// Evaluates the input.
    ///
    /// * `Ok(())` if the input is valid
    /// * `Err(e)` if the input is invalid; `e` carries the single reason
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// A name for debugging and synthesized reasons.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// Rules are values; a borrow of a rule is the same rule.
impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for everything that implements [`Validate`],
/// giving a fluent API for composition:
///
/// ```rust,ignore
/// use turnstile_validator::prelude::*;
///
/// let signup = name_is_not_empty()
///     .and(email_contains_at_sign())
///     .and(older_than(20));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Sequences two rules: `self` first, then `other`.
    ///
    /// If `self` rejects, its reason is returned immediately and `other` is
    /// never evaluated (short-circuit, not aggregation).
    ///
    /// # Properties
    ///
    /// `and` is associative but NOT commutative: `a.and(b).and(c)` and
    /// `a.and(b.and(c))` agree on every input, but `a.and(b)` and
    /// `b.and(a)` may reject the same input with different reasons, because
    /// reason attribution follows evaluation order.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Accepts when either rule accepts.
    ///
    /// Short-circuits on the first success. When both reject, the reason of
    /// the right-hand rule is surfaced, keeping the one-reason invariant.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule: accepts what `self` rejects and vice versa.
    ///
    /// A rejection synthesizes its reason from the inner rule's name, since
    /// the inner rule has none to offer on its success path.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn rule_trait_evaluates() {
        let rule = AlwaysValid;
        assert!(rule.validate("anything").is_ok());
    }

    #[test]
    fn default_name_is_the_type_name() {
        let rule = AlwaysValid;
        assert!(rule.name().contains("AlwaysValid"));
    }

    #[test]
    fn borrowed_rule_is_the_same_rule() {
        let rule = AlwaysValid;
        assert!((&rule).validate("anything").is_ok());
    }
}
