//! Property specifications and the typed descriptors derived from them

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tree of configuration values keyed by property name; leaves are
/// serialized [`ConfigProperty`] descriptors.
pub type ConfigTree = Map<String, Value>;

/// One configurable property as stored on a strategy row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigProperty {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: Value,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
}

/// A property declaration from a definition's `props` mapping
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySpec {
    /// Shorthand form: `name: String`
    TypeName(String),
    /// Long form: `name: { type: String, default: ..., enum: [...] }`
    Descriptor {
        type_name: String,
        default: Option<Value>,
        allowed: Option<Vec<Value>>,
    },
}

impl PropertySpec {
    /// Interpret a raw `props` entry
    pub fn parse(property: &str, raw: &Value) -> Result<Self, RegistryError> {
        match raw {
            Value::String(type_name) => Ok(PropertySpec::TypeName(type_name.clone())),
            Value::Object(fields) => {
                let type_name = match fields.get("type") {
                    Some(Value::String(t)) => t.clone(),
                    Some(other) => {
                        return Err(RegistryError::schema(
                            property,
                            format!("'type' must be a string, got {}", other),
                        ))
                    }
                    None => {
                        return Err(RegistryError::schema(
                            property,
                            "descriptor is missing 'type'",
                        ))
                    }
                };
                let default = fields.get("default").filter(|v| !v.is_null()).cloned();
                let allowed = match fields.get("enum") {
                    Some(Value::Array(values)) => Some(values.clone()),
                    _ => None,
                };
                Ok(PropertySpec::Descriptor {
                    type_name,
                    default,
                    allowed,
                })
            }
            other => Err(RegistryError::schema(
                property,
                format!("expected a type name or a descriptor, got {}", other),
            )),
        }
    }

    /// Resolve this declaration into its stored descriptor
    pub fn to_config_property(&self) -> ConfigProperty {
        match self {
            PropertySpec::TypeName(type_name) => ConfigProperty {
                type_name: type_name.to_lowercase(),
                value: zero_value(type_name),
                allowed: None,
            },
            PropertySpec::Descriptor {
                type_name,
                default,
                allowed,
            } => ConfigProperty {
                type_name: type_name.to_lowercase(),
                value: default.clone().unwrap_or_else(|| zero_value(type_name)),
                allowed: allowed.clone(),
            },
        }
    }
}

/// Canonical empty value for a declared type name (case-insensitive).
/// Types without a natural zero get `null`.
pub fn zero_value(type_name: &str) -> Value {
    match type_name.to_lowercase().as_str() {
        "string" => Value::String(String::new()),
        "number" | "integer" => Value::from(0),
        "boolean" => Value::Bool(false),
        "array" | "list" => Value::Array(Vec::new()),
        "object" => Value::Object(Map::new()),
        _ => Value::Null,
    }
}
