//! Provider definition documents as they appear on disk

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Declarative description of one authentication provider template.
///
/// Loaded fresh from `<root>/<provider>/definition.yml` on every reconciliation
/// pass and never persisted itself. Fields the registry does not use
/// (description, logo, website, ...) are ignored on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub use_form: bool,
    /// Property name to either a bare type name or a `{type, default?, enum?}`
    /// descriptor. Kept untyped here; the schema builder interprets it.
    #[serde(default)]
    pub props: BTreeMap<String, Value>,
}

impl Definition {
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.key.trim().is_empty() {
            return Err(RegistryError::schema("key", "definition key cannot be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(RegistryError::schema(
                "title",
                format!("definition '{}' has an empty title", self.key),
            ));
        }
        Ok(())
    }
}
