//! Response header generation.
//!
//! The `Content-Type` of a HAL response always comes from the resource being
//! sent, so headers are built from the resource rather than configured.

use axum::http::{HeaderMap, HeaderValue, header};
use hal_forms::{HalContentType, Resource};

use crate::error::{RestError, RestResult};

/// Builder for HAL response headers.
///
/// Generates:
/// - Content-Type (derived from the resource)
/// - Location (for created resources)
#[derive(Debug, Clone)]
pub struct HalHeaders {
    /// Content-Type.
    content_type: HalContentType,
    /// Location URL (for created resources).
    location: Option<String>,
}

impl HalHeaders {
    /// Creates headers for the given resource.
    pub fn for_resource(resource: &Resource) -> Self {
        Self {
            content_type: resource.content_type(),
            location: None,
        }
    }

    /// Sets the Location URL.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Returns the content type.
    pub fn content_type(&self) -> HalContentType {
        self.content_type
    }

    /// Returns the Location value.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Converts to an Axum HeaderMap.
    ///
    /// Fails when the Location value cannot be used as a header value.
    pub fn to_header_map(&self) -> RestResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type.as_str()),
        );

        if let Some(location) = &self.location {
            let value =
                HeaderValue::from_str(location).map_err(|_| RestError::InvalidHeader {
                    name: "location",
                    value: location.clone(),
                })?;
            headers.insert(header::LOCATION, value);
        }

        Ok(headers)
    }
}

/// Returns a header map carrying the resource's content type.
///
/// For handlers that assemble their own response tuples around
/// [`Resource::encode`].
pub fn hal_headers(resource: &Resource) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(resource.content_type().as_str()),
    );
    headers
}
