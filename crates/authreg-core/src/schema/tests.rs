//! Tests for default config construction

use super::*;
use crate::errors::RegistryError;
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn props(value: Value) -> BTreeMap<String, Value> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_bare_type_names_get_zero_values() {
    let config = build_default_config(&props(json!({
        "host": "String",
        "port": "Number",
        "secure": "Boolean",
        "groups": "Array"
    })))
    .unwrap();

    assert_eq!(config["host"], json!({"type": "string", "value": ""}));
    assert_eq!(config["port"], json!({"type": "number", "value": 0}));
    assert_eq!(config["secure"], json!({"type": "boolean", "value": false}));
    assert_eq!(config["groups"], json!({"type": "array", "value": []}));
}

#[test]
fn test_explicit_default_wins_over_zero_value() {
    let config = build_default_config(&props(json!({
        "port": {"type": "Number", "default": 389},
        "label": {"type": "String", "default": "Sign in"},
        "enabled": {"type": "Boolean", "default": true},
        "mismatched": {"type": "Boolean", "default": "yes"}
    })))
    .unwrap();

    assert_eq!(config["port"]["value"], json!(389));
    assert_eq!(config["label"]["value"], json!("Sign in"));
    assert_eq!(config["enabled"]["value"], json!(true));
    assert_eq!(config["mismatched"]["value"], json!("yes"));
}

#[test]
fn test_null_or_missing_default_uses_zero_value() {
    let config = build_default_config(&props(json!({
        "a": {"type": "String", "default": null},
        "b": {"type": "NUMBER"}
    })))
    .unwrap();

    assert_eq!(config["a"], json!({"type": "string", "value": ""}));
    assert_eq!(config["b"], json!({"type": "number", "value": 0}));
}

#[test]
fn test_falsy_defaults_are_kept() {
    let config = build_default_config(&props(json!({
        "retries": {"type": "Number", "default": 0},
        "prefix": {"type": "String", "default": ""},
        "strict": {"type": "Boolean", "default": false}
    })))
    .unwrap();

    assert_eq!(config["retries"]["value"], json!(0));
    assert_eq!(config["prefix"]["value"], json!(""));
    assert_eq!(config["strict"]["value"], json!(false));
}

#[test]
fn test_enum_copied_only_when_array() {
    let config = build_default_config(&props(json!({
        "scope": {"type": "String", "default": "openid", "enum": ["openid", "profile"]},
        "mode": {"type": "String", "enum": "not-a-list"}
    })))
    .unwrap();

    assert_eq!(
        config["scope"],
        json!({"type": "string", "value": "openid", "enum": ["openid", "profile"]})
    );
    assert!(config["mode"].get("enum").is_none());
}

#[test]
fn test_unknown_type_gets_null_value() {
    let config = build_default_config(&props(json!({"cert": "Certificate"}))).unwrap();
    assert_eq!(config["cert"], json!({"type": "certificate", "value": null}));
}

#[test]
fn test_descriptor_extra_fields_are_dropped() {
    let config = build_default_config(&props(json!({
        "clientId": {"type": "String", "title": "Client ID", "hint": "From the console", "order": 1}
    })))
    .unwrap();
    assert_eq!(config["clientId"], json!({"type": "string", "value": ""}));
}

#[test]
fn test_dotted_property_names_are_nested() {
    let config = build_default_config(&props(json!({
        "tls.enabled": "Boolean",
        "tls.ca.path": {"type": "String", "default": "/etc/ssl/ca.pem"},
        "url": "String"
    })))
    .unwrap();

    assert_eq!(config["tls"]["enabled"], json!({"type": "boolean", "value": false}));
    assert_eq!(
        config["tls"]["ca"]["path"],
        json!({"type": "string", "value": "/etc/ssl/ca.pem"})
    );
    assert_eq!(config["url"], json!({"type": "string", "value": ""}));
}

#[test]
fn test_empty_path_segment_is_rejected() {
    let result = build_default_config(&props(json!({"tls..enabled": "Boolean"})));
    assert!(matches!(result, Err(RegistryError::SchemaError { .. })));

    let result = build_default_config(&props(json!({"": "String"})));
    assert!(matches!(result, Err(RegistryError::SchemaError { .. })));
}

#[test]
fn test_descriptor_without_type_is_rejected() {
    let result = build_default_config(&props(json!({"url": {"default": "x"}})));
    match result {
        Err(RegistryError::SchemaError { property, .. }) => assert_eq!(property, "url"),
        other => panic!("expected schema error, got {:?}", other),
    }

    let result = build_default_config(&props(json!({"url": {"type": 5}})));
    assert!(matches!(result, Err(RegistryError::SchemaError { .. })));
}

#[test]
fn test_non_string_non_object_props_are_rejected() {
    let result = build_default_config(&props(json!({"port": 42})));
    assert!(matches!(result, Err(RegistryError::SchemaError { .. })));

    let result = build_default_config(&props(json!({"list": ["a"]})));
    assert!(matches!(result, Err(RegistryError::SchemaError { .. })));
}

#[test]
fn test_builder_is_deterministic() {
    let input = props(json!({
        "b.x": "String",
        "a": {"type": "Number", "default": 3, "enum": [1, 2, 3]},
        "c": "Boolean"
    }));

    let first = build_default_config(&input).unwrap();
    let second = build_default_config(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_empty_props_yield_empty_config() {
    let config = build_default_config(&BTreeMap::new()).unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_set_at_path_replaces_non_map_intermediate() {
    let mut tree = ConfigTree::new();
    set_at_path(&mut tree, &["a"], json!("scalar"));
    set_at_path(&mut tree, &["a", "b"], json!(1));
    assert_eq!(Value::Object(tree), json!({"a": {"b": 1}}));
}

#[test]
fn test_zero_value_is_case_insensitive() {
    assert_eq!(zero_value("STRING"), json!(""));
    assert_eq!(zero_value("Integer"), json!(0));
    assert_eq!(zero_value("bOoLeAn"), json!(false));
    assert_eq!(zero_value("List"), json!([]));
    assert_eq!(zero_value("Object"), json!({}));
}
