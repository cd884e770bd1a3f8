//! NOT combinator - rule inversion

use crate::core::{Validate, ValidationError};

/// Inverts a rule.
///
/// Accepts exactly the inputs the inner rule rejects. Since the inner rule
/// offers no reason on its success path, a rejection here synthesizes one
/// from the inner rule's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner rule to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                format!("rule '{}' must not pass", self.inner.name()),
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a [`Not`] combinator around a rule.
pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::rule;

    fn contains(needle: &'static str) -> impl Validate<Input = str> {
        rule("contains", move |input: &str| {
            if input.contains(needle) {
                Ok(())
            } else {
                Err(ValidationError::new("contains", "substring not found"))
            }
        })
    }

    #[test]
    fn inverts_the_verdict() {
        let forbidden = Not::new(contains("admin"));
        assert!(forbidden.validate("user123").is_ok());
        assert!(forbidden.validate("admin123").is_err());
    }

    #[test]
    fn rejection_names_the_inner_rule() {
        let forbidden = not(contains("admin"));
        let error = forbidden.validate("admin123").unwrap_err();
        assert!(error.reason().contains("contains"));
    }
}
