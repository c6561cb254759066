//! Framework-independent adapter built on the `http` crate.

use hal_forms::{EncodingResult, Resource};
use http::header::{self, HeaderValue};
use http::{Response, StatusCode};
use tracing::debug;

/// Encodes a resource into a `200 OK` [`http::Response`].
///
/// The body is the encoded document and `Content-Type` is derived from the
/// same resource. Nothing is built if encoding fails.
pub fn to_http_response(resource: &Resource) -> EncodingResult<Response<Vec<u8>>> {
    let body = resource.encode()?;
    let content_type = resource.content_type();

    debug!(
        content_type = %content_type,
        bytes = body.len(),
        "Built HAL http response"
    );

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type.as_str()),
    );

    Ok(response)
}
