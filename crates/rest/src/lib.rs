//! # hal-forms-rest - HTTP adapters for HAL resources
//!
//! This crate sends [`hal_forms::Resource`] documents over HTTP. Each adapter
//! does two things: it writes the encoded document as the body, and it sets
//! `Content-Type` from the same resource. The media type is never hardcoded.
//!
//! ## Adapters
//!
//! | Adapter | Output |
//! |---------|--------|
//! | [`HalResponse`] | axum `IntoResponse` |
//! | [`send`] | `RestResult<axum::response::Response>` |
//! | [`to_http_response`] | `http::Response<Vec<u8>>` |
//! | [`hal_headers`] | `HeaderMap` for handler-built responses |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use hal_forms::{Link, Resource};
//! use hal_forms_rest::HalResponse;
//! use serde_json::json;
//!
//! async fn hello() -> HalResponse {
//!     Resource::new(json!({"hello": "World!"}))
//!         .with_link("self", Link::new("/"))
//!         .into()
//! }
//!
//! let app: Router = Router::new().route("/", get(hello));
//! ```
//!
//! ## Error Handling
//!
//! Encoding always completes before a response is built. When it fails the
//! client receives a `500` with a JSON error body instead of a partial
//! document; see [`RestError`].
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`responses`] - Response adapters and header generation

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod responses;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use responses::{HalHeaders, HalResponse, hal_headers, send, to_http_response};

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` takes
/// precedence over `level` when set.
///
/// # Arguments
///
/// * `level` - Default log level for the HAL crates
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hal_forms={level},hal_forms_rest={level},hal_forms_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
