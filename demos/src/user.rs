//! The registration record and its wire schema.

use std::fmt;

use turnstile_decode::{Decoder, integer, map3, string};

/// A registration request, decoded from the request body.
///
/// Created fresh per request and never mutated; identity is field equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>, age {}", self.name, self.email, self.age)
    }
}

/// The field schema a registration body must satisfy.
#[must_use]
pub fn user_decoder() -> Decoder<User> {
    map3(
        string("name"),
        integer("age"),
        string("email"),
        |name, age, email| User { name, age, email },
    )
}
