//! Error types for the provider registry
//!
//! Failures are grouped by where they originate: reading definitions from disk,
//! interpreting a definition's property schema, or talking to the persisted
//! strategy store. A reconciliation pass contains all of them; only the CLI
//! surface lets them escape.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Failed to load provider definitions: {0}")]
    LoadError(String),
    #[error("Invalid property schema for '{property}': {message}")]
    SchemaError { property: String, message: String },
    #[error("Strategy store operation failed: {0}")]
    StoreError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RegistryError {
    pub fn schema(property: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::SchemaError {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Short tag for the failure kind, used in log lines and CLI output
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::LoadError(_) => "load",
            RegistryError::SchemaError { .. } => "schema",
            RegistryError::StoreError(_) => "store",
            RegistryError::ConfigError(_) => "config",
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::StoreError(err.to_string())
    }
}
