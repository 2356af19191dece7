//! Default configuration builder
//!
//! Turns a definition's `props` mapping into the `config` tree stored on a new
//! strategy row. Pure and deterministic: no I/O, and the output maps are
//! key-ordered so the same props always produce the same tree.

use crate::errors::RegistryError;
use crate::schema::types::{ConfigTree, PropertySpec};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Build the default config tree for a set of property declarations
pub fn build_default_config(props: &BTreeMap<String, Value>) -> Result<ConfigTree, RegistryError> {
    let mut config = ConfigTree::new();
    for (name, raw) in props {
        let spec = PropertySpec::parse(name, raw)?;
        let descriptor = serde_json::to_value(spec.to_config_property())
            .map_err(|e| RegistryError::schema(name.as_str(), e.to_string()))?;
        let path = property_path(name)?;
        set_at_path(&mut config, &path, descriptor);
    }
    Ok(config)
}

/// Split a property name into its nested location (`a.b.c` -> `[a, b, c]`)
pub fn property_path(name: &str) -> Result<Vec<&str>, RegistryError> {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RegistryError::schema(
            name,
            "property path contains an empty segment",
        ));
    }
    Ok(segments)
}

/// Insert `value` at `path`, creating intermediate maps as needed.
///
/// An intermediate that already holds a non-map value is replaced by a map.
pub fn set_at_path(tree: &mut Map<String, Value>, path: &[&str], value: Value) {
    match path {
        [] => {}
        [leaf] => {
            tree.insert((*leaf).to_string(), value);
        }
        [head, rest @ ..] => {
            let child = tree
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(child_map) = child {
                set_at_path(child_map, rest, value);
            }
        }
    }
}
