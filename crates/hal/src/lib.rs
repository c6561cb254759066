//! # hal-forms - HAL and HAL-FORMS resource documents
//!
//! This crate builds hypermedia response documents following the
//! [HAL](https://datatracker.ietf.org/doc/html/draft-kelly-json-hal) and
//! [HAL-FORMS](https://rwcbook.github.io/hal-forms/) conventions. An arbitrary
//! serializable payload is combined with links, embedded resources and
//! templates, then encoded into a single JSON object.
//!
//! ## Document shape
//!
//! - Payload fields are written at the top level.
//! - `_links` maps each relation to one link, or an array when a relation has
//!   several.
//! - `_embedded` maps each relation to one resource, or an array, with the same
//!   collapsing rule. Embedded resources nest arbitrarily.
//! - `_templates` maps each relation to exactly one template.
//!
//! ## Content types
//!
//! | Sections present | Content-Type |
//! |------------------|--------------|
//! | templates | `application/prs.hal-forms+json; charset=utf-8` |
//! | links or embedded | `application/hal+json; charset=utf-8` |
//! | none | `application/json; charset=utf-8` |
//!
//! ## Example
//!
//! ```rust
//! use hal_forms::{HalContentType, Link, Property, Resource, Template};
//! use serde_json::json;
//!
//! let resource = Resource::new(json!({"title": "Buy milk"}))
//!     .with_link("self", Link::new("/todos/1"))
//!     .with_template(
//!         "default",
//!         Template::new("PUT")
//!             .with_content_type("application/json")
//!             .with_property(Property::new("title").required()),
//!     );
//!
//! let bytes = hal_forms::encode(&resource).unwrap();
//! assert!(!bytes.is_empty());
//! assert_eq!(hal_forms::content_type(&resource), HalContentType::HalForms);
//! ```

pub mod collapse;
pub mod content_type;
pub mod error;
mod finite;
pub mod link;
pub mod resource;
pub mod template;

pub use collapse::OneOrMany;
pub use content_type::HalContentType;
pub use error::{EncodingError, EncodingResult};
pub use link::Link;
pub use resource::Resource;
pub use template::{
    InlineOption, InlineOptionValue, LinkOption, Property, PropertyOption, Template,
};

/// Encodes a resource to JSON bytes.
///
/// Equivalent to [`Resource::encode`].
pub fn encode(resource: &Resource) -> EncodingResult<Vec<u8>> {
    resource.encode()
}

/// Returns the content type a resource should be sent with.
///
/// Equivalent to [`Resource::content_type`].
pub fn content_type(resource: &Resource) -> HalContentType {
    resource.content_type()
}
