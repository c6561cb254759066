//! Resource composition.
//!
//! A [`Resource`] wraps an application payload together with the three
//! reserved HAL sections. Encoding merges the payload's own fields with
//! `_links`, `_embedded` and `_templates` into a single JSON object.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::ser::{Error as _, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use crate::collapse::{CollapsedRelations, OneOrMany};
use crate::content_type::HalContentType;
use crate::error::{EncodingError, EncodingResult};
use crate::finite::check_finite;
use crate::link::Link;
use crate::template::Template;

/// Reserved member holding the links.
pub const LINKS_KEY: &str = "_links";
/// Reserved member holding embedded resources.
pub const EMBEDDED_KEY: &str = "_embedded";
/// Reserved member holding HAL-FORMS templates.
pub const TEMPLATES_KEY: &str = "_templates";

/// The payload as captured at construction time.
///
/// Conversion failures are kept rather than reported so that they surface
/// from `encode`, like every other encoding problem.
#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Absent,
    Json(Value),
    Unencodable(String),
}

/// A HAL resource: a payload plus links, embedded resources and templates.
///
/// Relations are kept in key order so repeated encodes of the same resource
/// produce identical bytes. Embedded resources are stored by value; changing
/// a resource after embedding it does not affect the parent.
///
/// # Example
///
/// ```rust
/// use hal_forms::{Link, Resource};
/// use serde_json::json;
///
/// let mut resource = Resource::new(json!({"hello": "World!"}));
/// resource.add_link("self", Link::new("/greetings/1"));
///
/// let encoded = resource.to_value().unwrap();
/// assert_eq!(encoded["_links"]["self"]["href"], "/greetings/1");
/// assert_eq!(
///     resource.content_type().as_str(),
///     "application/hal+json; charset=utf-8"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    payload: Payload,
    links: BTreeMap<String, Vec<Link>>,
    embedded: BTreeMap<String, Vec<Resource>>,
    templates: BTreeMap<String, Template>,
}

impl Default for Resource {
    fn default() -> Self {
        Self::empty()
    }
}

impl Resource {
    /// Creates a resource from any serializable payload.
    ///
    /// Payloads serializing to `null`, such as `()` or `None`, are treated as
    /// absent. A payload that cannot be represented as JSON (including one
    /// holding a `NaN` or infinite float), or that is not a JSON object, is
    /// accepted here and rejected by [`Resource::encode`].
    pub fn new<P>(payload: P) -> Self
    where
        P: Serialize,
    {
        let captured = check_finite(&payload).and_then(|()| serde_json::to_value(&payload));
        let payload = match captured {
            Ok(Value::Null) => Payload::Absent,
            Ok(value) => Payload::Json(value),
            Err(e) => Payload::Unencodable(e.to_string()),
        };

        Self {
            payload,
            links: BTreeMap::new(),
            embedded: BTreeMap::new(),
            templates: BTreeMap::new(),
        }
    }

    /// Creates a resource without a payload.
    pub fn empty() -> Self {
        Self {
            payload: Payload::Absent,
            links: BTreeMap::new(),
            embedded: BTreeMap::new(),
            templates: BTreeMap::new(),
        }
    }

    /// Appends a link under `rel`, after any links already stored there.
    pub fn add_link(&mut self, rel: impl Into<String>, link: impl Into<Link>) {
        self.links.entry(rel.into()).or_default().push(link.into());
    }

    /// Appends an embedded resource under `rel`.
    pub fn add_embedded(&mut self, rel: impl Into<String>, resource: Resource) {
        self.embedded.entry(rel.into()).or_default().push(resource);
    }

    /// Sets the template for `rel`, replacing any previous one.
    pub fn add_template(&mut self, rel: impl Into<String>, template: Template) {
        self.templates.insert(rel.into(), template);
    }

    /// Builder form of [`Resource::add_link`].
    pub fn with_link(mut self, rel: impl Into<String>, link: impl Into<Link>) -> Self {
        self.add_link(rel, link);
        self
    }

    /// Builder form of [`Resource::add_embedded`].
    pub fn with_embedded(mut self, rel: impl Into<String>, resource: Resource) -> Self {
        self.add_embedded(rel, resource);
        self
    }

    /// Builder form of [`Resource::add_template`].
    pub fn with_template(mut self, rel: impl Into<String>, template: Template) -> Self {
        self.add_template(rel, template);
        self
    }

    /// Returns the payload as JSON, if one was given and could be converted.
    pub fn payload(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Json(value) => Some(value),
            Payload::Absent | Payload::Unencodable(_) => None,
        }
    }

    /// Returns the links stored under `rel`, in insertion order.
    pub fn links(&self, rel: &str) -> &[Link] {
        self.links.get(rel).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the embedded resources stored under `rel`, in insertion order.
    pub fn embedded(&self, rel: &str) -> &[Resource] {
        self.embedded.get(rel).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the template stored under `rel`.
    pub fn template(&self, rel: &str) -> Option<&Template> {
        self.templates.get(rel)
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    pub fn has_embedded(&self) -> bool {
        !self.embedded.is_empty()
    }

    pub fn has_templates(&self) -> bool {
        !self.templates.is_empty()
    }

    /// Derives the media type from the populated reserved sections.
    ///
    /// Templates take precedence over links and embedded resources. This
    /// does not encode the resource.
    pub fn content_type(&self) -> HalContentType {
        if self.has_templates() {
            HalContentType::HalForms
        } else if self.has_links() || self.has_embedded() {
            HalContentType::Hal
        } else {
            HalContentType::Json
        }
    }

    /// Builds the JSON object for this resource.
    ///
    /// Payload fields are copied first. A reserved section that is present
    /// replaces a payload field of the same name.
    pub fn to_value(&self) -> EncodingResult<Value> {
        let mut intermediate = Map::new();

        match &self.payload {
            Payload::Absent => {}
            Payload::Json(Value::Object(fields)) => {
                intermediate.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            Payload::Json(other) => {
                return Err(EncodingError::NotAnObject {
                    kind: json_kind(other),
                });
            }
            Payload::Unencodable(message) => {
                return Err(EncodingError::Payload {
                    message: message.clone(),
                });
            }
        }

        if !self.links.is_empty() {
            intermediate.insert(
                LINKS_KEY.to_string(),
                serde_json::to_value(CollapsedRelations(&self.links))?,
            );
        }

        if !self.embedded.is_empty() {
            let mut embedded = Map::new();
            for (rel, resources) in &self.embedded {
                let encoded = resources
                    .iter()
                    .map(Resource::to_value)
                    .collect::<EncodingResult<Vec<_>>>()?;
                embedded.insert(rel.clone(), serde_json::to_value(OneOrMany(&encoded))?);
            }
            intermediate.insert(EMBEDDED_KEY.to_string(), Value::Object(embedded));
        }

        if !self.templates.is_empty() {
            intermediate.insert(
                TEMPLATES_KEY.to_string(),
                serde_json::to_value(&self.templates)?,
            );
        }

        Ok(Value::Object(intermediate))
    }

    /// Encodes this resource to compact JSON bytes.
    pub fn encode(&self) -> EncodingResult<Vec<u8>> {
        let bytes = serde_json::to_vec(&self.to_value()?)?;
        self.trace_encoded(bytes.len());
        Ok(bytes)
    }

    /// Encodes this resource to indented JSON bytes.
    pub fn encode_pretty(&self) -> EncodingResult<Vec<u8>> {
        let bytes = serde_json::to_vec_pretty(&self.to_value()?)?;
        self.trace_encoded(bytes.len());
        Ok(bytes)
    }

    fn trace_encoded(&self, len: usize) {
        trace!(
            bytes = len,
            links = self.links.len(),
            embedded = self.embedded.len(),
            templates = self.templates.len(),
            content_type = %self.content_type(),
            "Encoded resource"
        );
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
