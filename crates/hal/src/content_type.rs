//! Content types for encoded resources.
//!
//! The media type of a document depends only on which reserved sections it
//! carries, see [`Resource::content_type`](crate::Resource::content_type).

use std::fmt;

/// The three media types a resource can be sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HalContentType {
    /// Plain JSON (`application/json`), no reserved sections.
    Json,
    /// HAL (`application/hal+json`), links or embedded resources present.
    Hal,
    /// HAL-FORMS (`application/prs.hal-forms+json`), templates present.
    HalForms,
}

impl HalContentType {
    /// Returns the full `Content-Type` header value, including the charset.
    pub fn as_str(&self) -> &'static str {
        match self {
            HalContentType::Json => "application/json; charset=utf-8",
            HalContentType::Hal => "application/hal+json; charset=utf-8",
            HalContentType::HalForms => "application/prs.hal-forms+json; charset=utf-8",
        }
    }

    /// Returns the MIME type without parameters.
    pub fn mime_type(&self) -> &'static str {
        match self {
            HalContentType::Json => "application/json",
            HalContentType::Hal => "application/hal+json",
            HalContentType::HalForms => "application/prs.hal-forms+json",
        }
    }

    /// Parses a content type string, ignoring any parameters.
    ///
    /// Example: "application/hal+json; charset=utf-8"
    pub fn parse(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();

        match essence.as_str() {
            "application/json" => Some(HalContentType::Json),
            "application/hal+json" => Some(HalContentType::Hal),
            "application/prs.hal-forms+json" => Some(HalContentType::HalForms),
            _ => None,
        }
    }
}

impl fmt::Display for HalContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
