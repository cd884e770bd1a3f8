//! Rule vocabularies for registration requests.
//!
//! Each vocabulary is a plain module of factory functions; none of them
//! knows the others exist. A concrete validator is assembled at the use
//! site by drawing from as many vocabularies as needed:
//!
//! ```rust,ignore
//! use turnstile_demos::rules::{age_rules, name_rules};
//! use turnstile_validator::prelude::*;
//!
//! let strict = age_rules::older_than(20).and(name_rules::name_is_upper_case());
//! ```

/// Rules about the user's name.
pub mod name_rules {
    use turnstile_validator::prelude::*;

    use crate::user::User;

    /// Rejects a blank (or all-whitespace) name.
    pub fn name_is_not_empty() -> impl Validate<Input = User> + Send + Sync {
        rule("name_not_empty", |user: &User| {
            if user.name.trim().is_empty() {
                Err(ValidationError::new("name_not_empty", "User name is empty"))
            } else {
                Ok(())
            }
        })
    }

    /// Rejects names that are not entirely upper case.
    pub fn name_is_upper_case() -> impl Validate<Input = User> + Send + Sync {
        rule("name_upper_case", |user: &User| {
            if user.name.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "name_upper_case",
                    format!("User {user} must be named in all upper case."),
                ))
            }
        })
    }
}

/// Rules about the user's age.
pub mod age_rules {
    use turnstile_validator::prelude::*;

    use crate::user::User;

    /// Rejects users not strictly older than `min`.
    pub fn older_than(min: i64) -> impl Validate<Input = User> + Send + Sync {
        rule("older_than", move |user: &User| {
            if user.age > min {
                Ok(())
            } else {
                Err(ValidationError::new(
                    "older_than",
                    format!("User {user} must be older than {min}."),
                ))
            }
        })
    }
}

/// Rules about the user's e-mail address.
pub mod email_rules {
    use turnstile_validator::prelude::*;

    use crate::user::User;

    /// Rejects addresses without an `@`.
    pub fn email_contains_at_sign() -> impl Validate<Input = User> + Send + Sync {
        rule("email_at_sign", |user: &User| {
            if user.email.contains('@') {
                Ok(())
            } else {
                Err(ValidationError::new("email_at_sign", "E-Mail is not valid."))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use turnstile_validator::prelude::*;

    use super::{age_rules, email_rules, name_rules};
    use crate::user::User;

    fn gregor() -> User {
        User {
            name: "Gregor Trefs".into(),
            age: 32,
            email: "mail@mailinator.com".into(),
        }
    }

    #[test]
    fn valid_user_passes_the_signup_rules() {
        let validation =
            name_rules::name_is_not_empty().and(email_rules::email_contains_at_sign());
        assert!(validation.validate(&gregor()).is_ok());
    }

    #[test]
    fn missing_at_sign_yields_the_email_reason() {
        let user = User {
            email: String::new(),
            ..gregor()
        };

        let validation =
            name_rules::name_is_not_empty().and(email_rules::email_contains_at_sign());
        let result = validation.validate(&user);

        assert_eq!(result.unwrap_err().reason(), "E-Mail is not valid.");
    }

    #[test]
    fn vocabularies_compose_without_knowing_each_other() {
        let validator = age_rules::older_than(20).and(name_rules::name_is_upper_case());

        let reason = validator.validate(&gregor()).unwrap_err();

        assert!(reason.reason().contains("upper case."));
    }

    #[test]
    fn whitespace_only_name_is_empty() {
        let user = User {
            name: "   ".into(),
            ..gregor()
        };

        let result = name_rules::name_is_not_empty().validate(&user);

        assert_eq!(result.unwrap_err().reason(), "User name is empty");
    }
}
