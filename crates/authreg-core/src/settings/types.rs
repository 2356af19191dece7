//! Settings document for a registry deployment

use crate::definition::DEFAULT_DEFINITION_FILE;
use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level settings, usually read from `authreg.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub definitions: DefinitionSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// Where provider definitions live on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSettings {
    /// Root directory holding one subdirectory per provider
    #[serde(default = "default_definitions_dir")]
    pub dir: PathBuf,
    /// Definition file name inside each provider subdirectory
    #[serde(default = "default_definition_file")]
    pub file_name: String,
}

impl Default for DefinitionSettings {
    fn default() -> Self {
        Self {
            dir: default_definitions_dir(),
            file_name: default_definition_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// JSON file holding the strategy rows
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_definitions_dir() -> PathBuf {
    PathBuf::from("modules/authentication")
}

fn default_definition_file() -> String {
    DEFAULT_DEFINITION_FILE.to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/strategies.json")
}

impl RegistrySettings {
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.definitions.dir.as_os_str().is_empty() {
            return Err(RegistryError::ConfigError(
                "definitions.dir cannot be empty".to_string(),
            ));
        }
        let file_name = self.definitions.file_name.trim();
        if file_name.is_empty() || file_name.contains('/') || file_name.contains('\\') {
            return Err(RegistryError::ConfigError(format!(
                "definitions.file_name must be a plain file name, got '{}'",
                self.definitions.file_name
            )));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(RegistryError::ConfigError(
                "store.path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
