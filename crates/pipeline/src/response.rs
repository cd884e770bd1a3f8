//! Response model
//!
//! The pipeline's outcome is one of two classifications plus a body string.
//! Structural and semantic failures share the `Rejected` classification on
//! purpose: callers distinguish them by body text only. The transport-layer
//! mapping lives here as well, since it is the only thing the excluded
//! transport needs to know.

use http::StatusCode;

/// Outcome classification of a pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The request was decoded, validated, and handled.
    Success,
    /// The request was turned away, at either the decode or the validation
    /// stage.
    Rejected,
}

impl Status {
    /// The HTTP status the excluded transport should answer with.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Rejected => StatusCode::BAD_REQUEST,
        }
    }
}

/// A pipeline response: classification plus body.
///
/// Constructed once per invocation and returned by value; two invocations
/// with the same input produce equal responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    body: String,
}

impl Response {
    /// A success response carrying the handler's output.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            body: body.into(),
        }
    }

    /// A rejection carrying the failure description.
    pub fn rejected(description: impl Into<String>) -> Self {
        Self {
            status: Status::Rejected,
            body: description.into(),
        }
    }

    /// The outcome classification.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The body, verbatim.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_http() {
        assert_eq!(Status::Success.status_code(), StatusCode::OK);
        assert_eq!(Status::Rejected.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn responses_compare_by_value() {
        assert_eq!(Response::ok("done"), Response::ok(String::from("done")));
        assert_ne!(Response::ok("done"), Response::rejected("done"));
    }
}
