//! Pipeline assembly and dispatch
//!
//! A pipeline is assembled in stages (decoder, then rules, then handler)
//! so the early stages can be reused with many handlers. Assembly is the
//! whole configuration surface: every collaborator is passed in explicitly,
//! none is looked up globally.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};
use turnstile_decode::Decoder;
use turnstile_validator::core::Validate;

use crate::response::Response;

/// A ready pipeline: total function from raw request body to [`Response`].
///
/// All three parts are immutable after assembly, so a pipeline may be
/// cloned and invoked from any number of threads without synchronization.
pub struct Pipeline<T> {
    decoder: Decoder<T>,
    rules: Arc<dyn Validate<Input = T> + Send + Sync>,
    handler: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> Pipeline<T> {
    /// Starts assembling a pipeline around a decoder.
    pub fn decoding(decoder: Decoder<T>) -> DecodeStage<T> {
        DecodeStage { decoder }
    }

    /// Runs the raw request body through decode → validate → handle.
    ///
    /// Total: every failure becomes a `Rejected` response, nothing escapes.
    /// A decode failure short-circuits before validation, so input that is
    /// both unparsable and semantically wrong reports the decode failure.
    pub fn respond(&self, raw: &str) -> Response {
        let decoded = match self.decoder.decode_str(raw) {
            Ok(decoded) => decoded,
            Err(error) => {
                debug!(%error, "rejected: body failed to decode");
                return Response::rejected(error.to_string());
            }
        };

        if let Err(error) = self.rules.validate(&decoded) {
            debug!(reason = error.reason(), "rejected: validation failed");
            return Response::rejected(error.reason());
        }

        trace!("accepted");
        Response::ok((self.handler)(&decoded))
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            rules: Arc::clone(&self.rules),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

/// First assembly stage: the decoder is chosen.
pub struct DecodeStage<T> {
    decoder: Decoder<T>,
}

impl<T> Clone for DecodeStage<T> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
        }
    }
}

impl<T> fmt::Debug for DecodeStage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeStage")
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl<T> DecodeStage<T> {
    /// Fixes the validation rules, yielding a reusable stage.
    pub fn validating<V>(self, rules: V) -> ValidateStage<T>
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        ValidateStage {
            decoder: self.decoder,
            rules: Arc::new(rules),
        }
    }
}

/// Second assembly stage: decoder and rules are fixed.
///
/// Cloneable so one decoder+rules pair can finish into many pipelines with
/// different handlers, the usual shape in tests.
pub struct ValidateStage<T> {
    decoder: Decoder<T>,
    rules: Arc<dyn Validate<Input = T> + Send + Sync>,
}

impl<T> ValidateStage<T> {
    /// Fixes the handler, yielding a ready pipeline.
    ///
    /// The handler is business logic only: it sees decoded, validated
    /// values and returns the success body.
    pub fn handling<H>(&self, handler: H) -> Pipeline<T>
    where
        H: Fn(&T) -> String + Send + Sync + 'static,
    {
        Pipeline {
            decoder: self.decoder.clone(),
            rules: Arc::clone(&self.rules),
            handler: Arc::new(handler),
        }
    }
}

impl<T> Clone for ValidateStage<T> {
    fn clone(&self) -> Self {
        Self {
            decoder: self.decoder.clone(),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<T> fmt::Debug for ValidateStage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateStage")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}
