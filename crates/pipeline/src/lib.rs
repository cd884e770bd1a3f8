//! # turnstile-pipeline
//!
//! The pipeline policy: sequence a decoder, a rule set, and a handler into
//! one deterministic outcome per request body.
//!
//! ```rust,ignore
//! use turnstile_pipeline::Pipeline;
//!
//! let stage = Pipeline::decoding(user_decoder())
//!     .validating(name_is_not_empty().and(email_contains_at_sign()));
//!
//! let server = stage.handling(|_user| String::from("Received user."));
//! let response = server.respond(body);
//! ```
//!
//! The pipeline is a pure function of its input: no shared mutable state,
//! no suspension, no exception escaping the boundary. Failures of either
//! early stage become `Rejected` responses whose body is the failure's
//! description, verbatim; the two failure classes share one outward status
//! by design and differ only in body text.
//!
//! Handler faults are out of scope: handlers are assumed total for decoded,
//! valid input. Wrapping the handler call and mapping panics or error
//! returns onto an internal-error classification is the natural extension
//! point, and it belongs in a layer above this one.

pub mod pipeline;
pub mod response;

pub use pipeline::{DecodeStage, Pipeline, ValidateStage};
pub use response::{Response, Status};
