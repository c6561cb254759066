//! HAL-FORMS templates for the `_templates` section.
//!
//! Templates describe the state transitions a client may perform on a
//! resource. They are plain value objects: nothing here validates or executes
//! a form, the types only control how a template is written to JSON.

use serde::{Deserialize, Serialize};

use crate::link::Link;

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// A form describing one action on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Media type the request body should be sent as.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,

    /// HTTP method to use.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method: String,

    /// Target URI. Clients fall back to the `self` link when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,

    /// Human-readable title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Form fields. Always written, even when empty.
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl Template {
    /// Creates a template for the given HTTP method with no properties.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    /// Sets the request content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the target URI.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Appends a property.
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

/// A single field within a [`Template`].
///
/// Numeric constraints are omitted while zero, strings while empty and
/// flags while `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub regex: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub cols: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_length: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_length: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PropertyOption>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub placeholder: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub rows: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub step: u32,

    /// Input type hint, e.g. `text`, `email` or `number`.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub input_type: String,
}

impl Property {
    /// Creates a property with only its name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the default value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Marks the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the property as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Sets the input type hint.
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Attaches an option source.
    pub fn with_options(mut self, options: impl Into<PropertyOption>) -> Self {
        self.options = Some(options.into());
        self
    }
}

/// The source of allowed values for a [`Property`].
///
/// Serialized without a tag: the variant is recognisable from whether the
/// object carries `inline` or `link`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyOption {
    Inline(InlineOption),
    Link(LinkOption),
}

impl From<InlineOption> for PropertyOption {
    fn from(option: InlineOption) -> Self {
        PropertyOption::Inline(option)
    }
}

impl From<LinkOption> for PropertyOption {
    fn from(option: LinkOption) -> Self {
        PropertyOption::Link(option)
    }
}

/// One selectable entry of an [`InlineOption`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineOptionValue {
    pub prompt: String,
    pub value: String,
}

impl InlineOptionValue {
    pub fn new(prompt: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            value: value.into(),
        }
    }
}

/// Options listed directly in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineOption {
    pub inline: Vec<InlineOptionValue>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_items: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_items: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_values: Vec<String>,
}

/// Options fetched by the client from a linked resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOption {
    pub link: Link,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_items: u32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_items: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_template() {
        let template = Template::new("POST")
            .with_title("Create")
            .with_content_type("application/json")
            .with_property(Property::new("title").required().with_prompt("Title"))
            .with_property(
                Property::new("completed")
                    .with_value("false")
                    .with_prompt("Completed"),
            );

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "title": "Create",
                "method": "POST",
                "contentType": "application/json",
                "properties": [
                    {"name": "title", "required": true, "prompt": "Title"},
                    {"name": "completed", "value": "false", "prompt": "Completed"}
                ]
            })
        );
    }

    #[test]
    fn test_empty_properties_written() {
        let template = Template::default();
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({"properties": []})
        );
    }

    #[test]
    fn test_numeric_constraints() {
        let property = Property {
            name: "quantity".to_string(),
            input_type: "number".to_string(),
            min: 1,
            max: 10,
            step: 1,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({"name": "quantity", "type": "number", "min": 1, "max": 10, "step": 1})
        );
    }

    #[test]
    fn test_link_option() {
        let property = Property::new("options").with_options(LinkOption {
            link: Link::new("/options"),
            max_items: 3,
            selected_values: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({
                "name": "options",
                "options": {
                    "link": {"href": "/options"},
                    "maxItems": 3,
                    "selectedValues": ["a", "b", "c"]
                }
            })
        );
    }

    #[test]
    fn test_inline_option() {
        let property = Property::new("options").with_options(InlineOption {
            inline: vec![
                InlineOptionValue::new("First", "1"),
                InlineOptionValue::new("Second", "2"),
            ],
            min_items: 1,
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({
                "name": "options",
                "options": {
                    "inline": [
                        {"prompt": "First", "value": "1"},
                        {"prompt": "Second", "value": "2"}
                    ],
                    "minItems": 1
                }
            })
        );
    }

    #[test]
    fn test_option_variant_from_json() {
        let inline: PropertyOption =
            serde_json::from_value(json!({"inline": [{"prompt": "A", "value": "a"}]})).unwrap();
        assert!(matches!(inline, PropertyOption::Inline(_)));

        let link: PropertyOption =
            serde_json::from_value(json!({"link": {"href": "/opts"}, "maxItems": 2})).unwrap();
        match link {
            PropertyOption::Link(option) => {
                assert_eq!(option.link.href, "/opts");
                assert_eq!(option.max_items, 2);
            }
            other => panic!("expected link option, got {:?}", other),
        }
    }
}
