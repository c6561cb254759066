//! Response adapters for HAL resources.
//!
//! - [`hal`] - axum `IntoResponse` adapter
//! - [`http`] - adapter producing plain `http::Response` values
//! - [`headers`] - Response header generation (Content-Type, Location)

pub mod hal;
pub mod headers;
pub mod http;

pub use self::hal::{HalResponse, send};
pub use self::headers::{HalHeaders, hal_headers};
pub use self::http::to_http_response;
