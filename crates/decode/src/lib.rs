//! # turnstile-decode
//!
//! The structural-decoding boundary: raw text in, typed value or decode
//! failure out.
//!
//! The JSON engine itself (`serde_json`) stays behind this crate. Callers
//! declare a field schema (named, typed fields plus the constructor that
//! combines them) and get back a [`Decoder`] whose failures are stable,
//! human-readable descriptions:
//!
//! - unparsable text → `Unexpected character '<c>' at line <l>, column <n>`
//! - missing required field → `field '<name>': missing`
//! - mistyped field → `field '<name>': expected <type>, found <actual>`

pub mod decoder;
pub mod error;

pub use decoder::{Decoder, integer, map2, map3, string};
pub use error::DecodeError;
