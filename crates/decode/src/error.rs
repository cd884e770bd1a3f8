//! Decode failure taxonomy
//!
//! Every failure is structural: either the text is not JSON at all, or it
//! is a well-formed document that doesn't satisfy the field schema. The
//! `Display` output of each variant is returned to callers verbatim as the
//! rejection body, which makes it part of the public contract: the formats
//! below are pinned by tests and must not drift.

use thiserror::Error;

/// A structural decode failure.
///
/// Decoding is a deterministic function of the input text, so a failure is
/// final: retrying the same text yields the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The text is not parseable JSON.
    #[error("Unexpected character '{found}' at line {line}, column {column}")]
    UnexpectedCharacter {
        /// The character the parser choked on.
        found: char,
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
    },

    /// The text ended in the middle of a JSON value.
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// The top-level value is not the object the field schema requires.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// JSON type name of what was found instead.
        found: &'static str,
    },

    /// A required field is absent.
    #[error("field '{name}': missing")]
    MissingField {
        /// Name of the absent field.
        name: String,
    },

    /// A field is present but holds the wrong JSON type.
    #[error("field '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the offending field.
        name: String,
        /// What the schema requires.
        expected: &'static str,
        /// JSON type name of what was found.
        found: &'static str,
    },
}

/// JSON type name of a value, as used in diagnostics.
#[must_use]
pub(crate) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
