//! Error types for resource encoding.

use thiserror::Error;

/// Failure to produce the JSON document for a [`Resource`](crate::Resource).
///
/// Encoding is all-or-nothing: when this error is returned no bytes have been
/// produced.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The payload has no JSON representation.
    #[error("payload cannot be encoded as JSON: {message}")]
    Payload { message: String },

    /// The payload encoded to something other than a JSON object, so it
    /// cannot be merged with the reserved sections.
    #[error("payload must encode to a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// Writing the final document failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for encoding results.
pub type EncodingResult<T> = Result<T, EncodingError>;
