//! End-to-end encoding of HAL and HAL-FORMS documents.

use hal_forms::{
    EncodingError, HalContentType, InlineOption, InlineOptionValue, Link, LinkOption, Property,
    Resource, Template,
};
use serde_json::{Value, json};

fn decode(resource: &Resource) -> Value {
    let bytes = hal_forms::encode(resource).expect("encode");
    serde_json::from_slice(&bytes).expect("valid JSON")
}

#[test]
fn test_empty_payload() {
    let resource = Resource::new(());

    assert_eq!(decode(&resource), json!({}));
    assert_eq!(
        hal_forms::content_type(&resource).as_str(),
        "application/json; charset=utf-8"
    );
}

#[test]
fn test_map_payload_matches_direct_encoding() {
    let payload = json!({"hello": "World!", "answer": 42});
    let resource = Resource::new(&payload);

    let direct: Value = serde_json::from_slice(&serde_json::to_vec(&payload).unwrap()).unwrap();
    assert_eq!(decode(&resource), direct);
    assert_eq!(
        resource.content_type().as_str(),
        "application/json; charset=utf-8"
    );
}

#[test]
fn test_integer_payload_fails() {
    let resource = Resource::new(1);
    assert!(matches!(
        hal_forms::encode(&resource),
        Err(EncodingError::NotAnObject { .. })
    ));
}

#[test]
fn test_self_link() {
    let mut resource = Resource::new(json!({"hello": "World!", "answer": 42}));
    resource.add_link("self", Link::new("/testSelfLink"));

    assert_eq!(
        decode(&resource),
        json!({
            "_links": {"self": {"href": "/testSelfLink"}},
            "hello": "World!",
            "answer": 42
        })
    );
    assert_eq!(resource.content_type(), HalContentType::Hal);
}

#[test]
fn test_two_links_different_rels() {
    let mut resource = Resource::new(json!({"hello": "World!"}));
    resource.add_link("a", Link::new("/a/b"));
    resource.add_link("b", Link::new("/c/d"));

    assert_eq!(
        decode(&resource),
        json!({
            "_links": {
                "a": {"href": "/a/b"},
                "b": {"href": "/c/d"}
            },
            "hello": "World!"
        })
    );
}

#[test]
fn test_single_embedded() {
    let mut resource = Resource::new(json!({"hello": "World!"}));
    resource.add_embedded("other", Resource::new(json!({"age": 41})));

    let bytes = hal_forms::encode(&resource).expect("encode");
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"_embedded":{"other":{"age":41}},"hello":"World!"}"#
    );
    assert_eq!(
        resource.content_type().as_str(),
        "application/hal+json; charset=utf-8"
    );
}

#[test]
fn test_two_embedded_same_rel() {
    let mut resource = Resource::new(json!({"hello": "World!"}));
    resource.add_embedded("other", Resource::new(json!({"age": 41})));
    resource.add_embedded("other", Resource::new(json!({"answer": 42})));

    assert_eq!(
        decode(&resource),
        json!({
            "_embedded": {
                "other": [{"age": 41}, {"answer": 42}]
            },
            "hello": "World!"
        })
    );
}

#[test]
fn test_two_embedded_different_rels() {
    let resource = Resource::new(json!({"hello": "World!"}))
        .with_embedded("other1", Resource::new(json!({"age": 41})))
        .with_embedded("other2", Resource::new(json!({"answer": 42})));

    assert_eq!(
        decode(&resource),
        json!({
            "_embedded": {
                "other1": {"age": 41},
                "other2": {"answer": 42}
            },
            "hello": "World!"
        })
    );
}

#[test]
fn test_simple_template() {
    let mut resource = Resource::new(json!({"hello": "World!"}));
    resource.add_template(
        "default",
        Template {
            title: "Create".to_string(),
            method: "POST".to_string(),
            content_type: "application/json".to_string(),
            properties: vec![
                Property {
                    name: "title".to_string(),
                    required: true,
                    prompt: "Title".to_string(),
                    ..Default::default()
                },
                Property {
                    name: "completed".to_string(),
                    value: "false".to_string(),
                    prompt: "Completed".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
    );

    assert_eq!(
        decode(&resource),
        json!({
            "_templates": {
                "default": {
                    "title": "Create",
                    "method": "POST",
                    "contentType": "application/json",
                    "properties": [
                        {"name": "title", "required": true, "prompt": "Title"},
                        {"name": "completed", "value": "false", "prompt": "Completed"}
                    ]
                }
            },
            "hello": "World!"
        })
    );
    assert_eq!(
        resource.content_type().as_str(),
        "application/prs.hal-forms+json; charset=utf-8"
    );
}

#[test]
fn test_template_options() {
    let resource = Resource::empty().with_template(
        "default",
        Template::default()
            .with_property(Property::new("linked").with_options(LinkOption {
                link: Link::new("/options"),
                max_items: 3,
                selected_values: vec!["a".into(), "b".into(), "c".into()],
                ..Default::default()
            }))
            .with_property(Property::new("inline").with_options(InlineOption {
                inline: vec![
                    InlineOptionValue::new("First", "1"),
                    InlineOptionValue::new("Second", "2"),
                    InlineOptionValue::new("Third", "3"),
                ],
                max_items: 3,
                selected_values: vec!["1".into(), "2".into(), "3".into()],
                ..Default::default()
            })),
    );

    assert_eq!(
        decode(&resource),
        json!({
            "_templates": {
                "default": {
                    "properties": [
                        {
                            "name": "linked",
                            "options": {
                                "link": {"href": "/options"},
                                "maxItems": 3,
                                "selectedValues": ["a", "b", "c"]
                            }
                        },
                        {
                            "name": "inline",
                            "options": {
                                "inline": [
                                    {"prompt": "First", "value": "1"},
                                    {"prompt": "Second", "value": "2"},
                                    {"prompt": "Third", "value": "3"}
                                ],
                                "maxItems": 3,
                                "selectedValues": ["1", "2", "3"]
                            }
                        }
                    ]
                }
            }
        })
    );
}

#[test]
fn test_content_type_follows_mutation() {
    let mut resource = Resource::new(json!({"id": 1}));
    assert_eq!(resource.content_type(), HalContentType::Json);

    resource.add_embedded("item", Resource::empty());
    assert_eq!(resource.content_type(), HalContentType::Hal);

    resource.add_template("default", Template::new("DELETE"));
    assert_eq!(resource.content_type(), HalContentType::HalForms);
}
