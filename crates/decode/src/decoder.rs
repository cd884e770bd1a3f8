//! Field-schema decoders
//!
//! A [`Decoder<T>`] turns a parsed JSON value into a `T`, or reports the
//! first structural problem it meets. Decoders for whole records are built
//! from named-field primitives plus an N-ary constructor:
//!
//! ```rust,ignore
//! use turnstile_decode::{integer, map3, string};
//!
//! let decoder = map3(
//!     string("name"),
//!     integer("age"),
//!     string("email"),
//!     |name, age, email| User { name, age, email },
//! );
//! let user = decoder.decode_str(r#"{"name":"Gregor","age":32,"email":"g@t.de"}"#)?;
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{DecodeError, json_type};

/// Decodes a parsed JSON value into a `T`.
///
/// Cheaply cloneable; a decoder assembled once at startup can be shared by
/// any number of concurrent callers.
pub struct Decoder<T> {
    run: Arc<dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Decoder<T> {
    /// Wraps a decoding function.
    pub fn new(run: impl Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Applies the schema to an already-parsed value.
    pub fn decode_value(&self, value: &Value) -> Result<T, DecodeError> {
        (self.run)(value)
    }

    /// Parses `text` and applies the schema.
    ///
    /// Total and deterministic: the same text always yields the same
    /// outcome, so failures are final and never worth retrying.
    pub fn decode_str(&self, text: &str) -> Result<T, DecodeError> {
        let value = parse(text)?;
        self.decode_value(&value)
    }

    /// Transforms the decoded value.
    pub fn map<U>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U>
    where
        T: 'static,
    {
        Decoder::new(move |value| self.decode_value(value).map(&f))
    }
}

// ============================================================================
// FIELD PRIMITIVES
// ============================================================================

/// Decodes the named top-level field as a string.
#[must_use]
pub fn string(name: impl Into<String>) -> Decoder<String> {
    let name = name.into();
    Decoder::new(move |value| {
        let field = member(value, &name)?;
        field
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::TypeMismatch {
                name: name.clone(),
                expected: "string",
                found: json_type(field),
            })
    })
}

/// Decodes the named top-level field as an integer.
#[must_use]
pub fn integer(name: impl Into<String>) -> Decoder<i64> {
    let name = name.into();
    Decoder::new(move |value| {
        let field = member(value, &name)?;
        field.as_i64().ok_or_else(|| DecodeError::TypeMismatch {
            name: name.clone(),
            expected: "integer",
            found: json_type(field),
        })
    })
}

fn member<'v>(value: &'v Value, name: &str) -> Result<&'v Value, DecodeError> {
    let object = value.as_object().ok_or_else(|| DecodeError::NotAnObject {
        found: json_type(value),
    })?;
    object.get(name).ok_or_else(|| DecodeError::MissingField {
        name: name.to_owned(),
    })
}

// ============================================================================
// COMBINATION RULES
// ============================================================================

/// Combines two field decoders with a binary constructor.
#[must_use]
pub fn map2<A, B, T, F>(a: Decoder<A>, b: Decoder<B>, combine: F) -> Decoder<T>
where
    A: 'static,
    B: 'static,
    F: Fn(A, B) -> T + Send + Sync + 'static,
{
    Decoder::new(move |value| {
        Ok(combine(a.decode_value(value)?, b.decode_value(value)?))
    })
}

/// Combines three field decoders with a ternary constructor.
///
/// Fields are decoded in declaration order, so the failure surfaced for a
/// multiply-broken document is the first schema entry's.
#[must_use]
pub fn map3<A, B, C, T, F>(a: Decoder<A>, b: Decoder<B>, c: Decoder<C>, combine: F) -> Decoder<T>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B, C) -> T + Send + Sync + 'static,
{
    Decoder::new(move |value| {
        Ok(combine(
            a.decode_value(value)?,
            b.decode_value(value)?,
            c.decode_value(value)?,
        ))
    })
}

// ============================================================================
// PARSE BOUNDARY
// ============================================================================

/// Parses raw text, mapping the engine's syntax diagnostics onto the
/// decode-failure taxonomy.
fn parse(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|err| syntax_failure(text, &err))
}

fn syntax_failure(text: &str, err: &serde_json::Error) -> DecodeError {
    if err.is_eof() {
        return DecodeError::UnexpectedEnd;
    }
    match offending_char(text, err.line(), err.column()) {
        Some(found) => DecodeError::UnexpectedCharacter {
            found,
            line: err.line(),
            column: err.column(),
        },
        // The parser pointed past the end of the text.
        None => DecodeError::UnexpectedEnd,
    }
}

/// Looks up the character at the parser's reported 1-based position.
fn offending_char(text: &str, line: usize, column: usize) -> Option<char> {
    if line == 0 || column == 0 {
        return None;
    }
    text.lines().nth(line - 1)?.chars().nth(column - 1)
}
