//! Axum response adapter.
//!
//! [`HalResponse`] encodes a [`Resource`] in full before anything is handed
//! to axum. If encoding fails, the client receives the [`RestError`]
//! response instead of a partial document.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hal_forms::Resource;
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::responses::headers::HalHeaders;

/// A HAL resource ready to be returned from an axum handler.
///
/// # Example
///
/// ```rust
/// use hal_forms::{Link, Resource};
/// use hal_forms_rest::HalResponse;
/// use serde_json::json;
///
/// async fn handler() -> HalResponse {
///     Resource::new(json!({"hello": "World!"}))
///         .with_link("self", Link::new("/hello"))
///         .into()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HalResponse {
    resource: Resource,
    status: StatusCode,
    location: Option<String>,
    pretty: bool,
}

impl HalResponse {
    /// Creates a `200 OK` response for the resource.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            status: StatusCode::OK,
            location: None,
            pretty: false,
        }
    }

    /// Creates a `201 Created` response with a Location header.
    pub fn created(resource: Resource, location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location.into()),
            ..Self::new(resource)
        }
    }

    /// Sets the status code.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Enables or disables indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the wrapped resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Encodes the resource and builds the response.
    ///
    /// The content type and body come from the same resource.
    pub fn try_into_response(self) -> RestResult<Response> {
        let body = if self.pretty {
            self.resource.encode_pretty()?
        } else {
            self.resource.encode()?
        };

        let mut headers = HalHeaders::for_resource(&self.resource);
        if let Some(location) = self.location {
            headers = headers.with_location(location);
        }
        let headers = headers.to_header_map()?;

        debug!(
            status = %self.status,
            content_type = %self.resource.content_type(),
            bytes = body.len(),
            "Sending HAL resource"
        );

        Ok((self.status, headers, body).into_response())
    }
}

impl From<Resource> for HalResponse {
    fn from(resource: Resource) -> Self {
        HalResponse::new(resource)
    }
}

impl IntoResponse for HalResponse {
    fn into_response(self) -> Response {
        match self.try_into_response() {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to send HAL resource");
                e.into_response()
            }
        }
    }
}

/// Encodes a resource into a `200 OK` response.
///
/// For handlers returning `RestResult<Response>`, so encoding failures flow
/// through `?` like any other error.
pub fn send(resource: &Resource) -> RestResult<Response> {
    HalResponse::new(resource.clone()).try_into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use hal_forms::Link;
    use serde_json::json;

    #[test]
    fn test_ok_response() {
        let resource = Resource::new(json!({"a": 1})).with_link("self", Link::new("/a"));
        let response = HalResponse::from(resource).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/hal+json; charset=utf-8"
        );
    }

    #[test]
    fn test_created_response() {
        let response = HalResponse::created(Resource::new(json!({"id": 7})), "/todos/7")
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/todos/7");
    }

    #[test]
    fn test_encoding_failure_becomes_error_response() {
        let response = HalResponse::new(Resource::new(42)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn test_send_propagates_error() {
        let result = send(&Resource::new("not an object"));
        assert!(matches!(result, Err(RestError::Encoding(_))));
    }

    #[test]
    fn test_with_status() {
        let response = HalResponse::new(Resource::empty())
            .with_status(StatusCode::ACCEPTED)
            .into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
