//! Error types for the HTTP adapters.
//!
//! Every failure here happens before a response body is written, so an error
//! always replaces the whole HAL response rather than truncating it.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Encoding | 500 |
//! | InvalidHeader | 500 |

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use hal_forms::{EncodingError, HalContentType};
use serde::Serialize;
use thiserror::Error;

/// The error type for the HTTP adapters.
#[derive(Error, Debug)]
pub enum RestError {
    /// The resource could not be encoded.
    #[error("failed to encode resource: {0}")]
    Encoding(#[from] EncodingError),

    /// A header derived from the resource is not a valid header value.
    #[error("invalid header value for {name}: {value}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Result type for adapter operations.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Encoding(_) | RestError::InvalidHeader { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    status: u16,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let mut response = (
            status,
            Json(ErrorBody {
                error: &message,
                status: status.as_u16(),
            }),
        )
            .into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(HalContentType::Json.as_str()),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_maps_to_500() {
        let err = RestError::from(EncodingError::NotAnObject { kind: "number" });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn test_display() {
        let err = RestError::InvalidHeader {
            name: "location",
            value: "bad\nvalue".to_string(),
        };
        assert!(err.to_string().starts_with("invalid header value for location"));
    }
}
