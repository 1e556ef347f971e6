//! Request and response body errors.

use bytes::Bytes;
use thiserror::Error;

use super::ModelError;

/// Errors at the body edges the HTTP layer calls into.
///
/// These wrap JSON syntax failures, model conversion failures, and the
/// unexpected-status policy of [`decode_response`](crate::body::decode_response).
#[derive(Debug, Error)]
pub enum BodyError {
    /// The body is not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A request body could not be encoded as JSON.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The body is valid JSON but does not fit the expected model.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The status code matches no known response shape.
    #[error("Unexpected status code {status}: {}", String::from_utf8_lossy(.body))]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: u16,
        /// The raw response body.
        body: Bytes,
    },
}

impl BodyError {
    /// Returns `true` if this is a JSON syntax error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }

    /// Returns `true` if a request body failed to encode.
    pub fn is_encode_error(&self) -> bool {
        matches!(self, Self::Encode(_))
    }

    /// Returns the model error, if this is one.
    pub fn as_model_error(&self) -> Option<&ModelError> {
        match self {
            Self::Model(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code if this is an unexpected status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
