//! Hyperlinks for the `_links` section.

use serde::{Deserialize, Serialize};

/// A hyperlink within a HAL resource.
///
/// Only `href` is required. Every other field is omitted from the encoded
/// JSON while it holds its zero value (an empty string or `false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI, or a URI template when `templated` is set.
    pub href: String,

    /// Whether `href` is a URI template (RFC 6570).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,

    /// Media type hint for the target resource.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,

    /// URL with information about the deprecation of this link.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deprecation: String,

    /// Secondary key for selecting links that share a relation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Profile URI of the target resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile: String,

    /// Human-readable label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Language of the target resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hreflang: String,
}

impl Link {
    /// Creates a link to `href` with every optional field unset.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    /// Creates a link whose `href` is a URI template.
    pub fn templated(href: impl Into<String>) -> Self {
        Self {
            templated: true,
            ..Self::new(href)
        }
    }

    /// Sets the media type hint.
    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Sets the deprecation URL.
    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.deprecation = deprecation.into();
        self
    }

    /// Sets the link name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the profile URI.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the language tag.
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = hreflang.into();
        self
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Link::new(href)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Link::new(href)
    }
}
