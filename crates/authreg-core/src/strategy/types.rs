//! Persisted strategy rows and their read model

use crate::definition::Definition;
use crate::errors::RegistryError;
use crate::schema::{build_default_config, ConfigTree};
use serde::{Deserialize, Serialize};

/// Storage wrapper for list-valued row fields: `{ "v": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WrappedList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<Vec<String>>,
}

impl WrappedList {
    pub fn empty() -> Self {
        Self { v: Some(Vec::new()) }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.v.unwrap_or_default()
    }
}

/// Unwrap an optional stored list, defaulting to empty
pub fn unwrap_list(list: Option<WrappedList>) -> Vec<String> {
    list.map(WrappedList::into_vec).unwrap_or_default()
}

/// A strategy row as held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub key: String,
    pub title: String,
    pub is_enabled: bool,
    pub use_form: bool,
    #[serde(default)]
    pub config: ConfigTree,
    #[serde(default)]
    pub self_registration: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_whitelist: Option<WrappedList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_enroll_groups: Option<WrappedList>,
}

/// A strategy row that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    pub key: String,
    pub title: String,
    pub is_enabled: bool,
    pub use_form: bool,
    pub config: ConfigTree,
    pub self_registration: bool,
    pub domain_whitelist: WrappedList,
    pub auto_enroll_groups: WrappedList,
}

impl NewStrategy {
    /// Seed a disabled row from a definition, with default config
    pub fn from_definition(definition: &Definition) -> Result<Self, RegistryError> {
        definition.validate()?;
        Ok(Self {
            key: definition.key.clone(),
            title: definition.title.clone(),
            is_enabled: false,
            use_form: definition.use_form,
            config: build_default_config(&definition.props)?,
            self_registration: false,
            domain_whitelist: WrappedList::empty(),
            auto_enroll_groups: WrappedList::empty(),
        })
    }

    /// Required-field check applied by stores before persisting
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.key.trim().is_empty() {
            return Err(RegistryError::StoreError(
                "strategy key is required".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(RegistryError::StoreError(format!(
                "strategy '{}' is missing a title",
                self.key
            )));
        }
        Ok(())
    }

    pub fn with_id(self, id: i64) -> Strategy {
        Strategy {
            id,
            key: self.key,
            title: self.title,
            is_enabled: self.is_enabled,
            use_form: self.use_form,
            config: self.config,
            self_registration: self.self_registration,
            domain_whitelist: Some(self.domain_whitelist),
            auto_enroll_groups: Some(self.auto_enroll_groups),
        }
    }
}

/// Strategy as handed to callers, with list fields unwrapped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyView {
    pub id: i64,
    pub key: String,
    pub title: String,
    pub is_enabled: bool,
    pub use_form: bool,
    pub config: ConfigTree,
    pub self_registration: bool,
    pub domain_whitelist: Vec<String>,
    pub auto_enroll_groups: Vec<String>,
}

impl From<Strategy> for StrategyView {
    fn from(row: Strategy) -> Self {
        Self {
            id: row.id,
            key: row.key,
            title: row.title,
            is_enabled: row.is_enabled,
            use_form: row.use_form,
            config: row.config,
            self_registration: row.self_registration,
            domain_whitelist: unwrap_list(row.domain_whitelist),
            auto_enroll_groups: unwrap_list(row.auto_enroll_groups),
        }
    }
}
