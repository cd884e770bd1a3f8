//! Error type for validation failures
//!
//! A failed rule produces exactly one human-readable reason. There is no
//! aggregation here: a composite rule surfaces the reason of its first
//! failing component and nothing else.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of rules with fixed messages.

use std::borrow::Cow;
use std::fmt;

/// A validation failure: a short machine-readable code plus one
/// human-readable reason.
///
/// # Examples
///
/// ```rust,ignore
/// use turnstile_validator::core::ValidationError;
///
/// // Static strings allocate nothing:
/// let error = ValidationError::new("name_not_empty", "User name is empty");
///
/// // Dynamic reasons allocate only when needed:
/// let error = ValidationError::new("older_than", format!("must be older than {min}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Code for programmatic handling, e.g. `"name_not_empty"`.
    pub code: Cow<'static, str>,

    /// The single human-readable reason. Never empty.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error with a code and reason.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "a rejection must carry a reason");
        Self {
            code: code.into(),
            message,
        }
    }

    /// The human-readable reason, as shown to callers verbatim.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_reason() {
        let error = ValidationError::new("email", "E-Mail is not valid.");
        assert_eq!(error.to_string(), "email: E-Mail is not valid.");
        assert_eq!(error.reason(), "E-Mail is not valid.");
    }

    #[test]
    fn equality_is_by_value() {
        let a = ValidationError::new("code", "same reason");
        let b = ValidationError::new("code", String::from("same reason"));
        assert_eq!(a, b);
    }
}
