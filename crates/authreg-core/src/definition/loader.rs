//! Discovery and parsing of provider definitions
//!
//! The root directory holds one subdirectory per provider; each subdirectory
//! holds a single definition file. Loading is all-or-nothing: one unreadable or
//! malformed definition fails the whole load so that a reconciliation pass
//! never acts on a partial view of the disk.

use crate::definition::types::Definition;
use crate::errors::RegistryError;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DEFAULT_DEFINITION_FILE: &str = "definition.yml";

/// Loads every provider definition below a root directory
#[derive(Debug, Clone)]
pub struct DefinitionLoader {
    root: PathBuf,
    file_name: String,
}

impl DefinitionLoader {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_DEFINITION_FILE.to_string(),
        }
    }

    /// Override the per-provider definition file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Load all definitions, in directory listing order
    pub async fn load_all(&self) -> Result<Vec<Definition>, RegistryError> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            RegistryError::LoadError(format!(
                "Failed to list definitions directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let mut definitions = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                RegistryError::LoadError(format!(
                    "Failed to list definitions directory {}: {}",
                    self.root.display(),
                    e
                ))
            })?;
            let Some(entry) = entry else { break };

            let provider_dir = entry.path();
            let file_type = entry.file_type().await.map_err(|e| {
                RegistryError::LoadError(format!(
                    "Failed to inspect {}: {}",
                    provider_dir.display(),
                    e
                ))
            })?;
            if !file_type.is_dir() {
                log::debug!("Skipping non-directory entry: {}", provider_dir.display());
                continue;
            }

            let definition = Self::from_file(provider_dir.join(&self.file_name)).await?;
            log::debug!(
                "Loaded provider definition '{}' from {}",
                definition.key,
                provider_dir.display()
            );
            definitions.push(definition);
        }

        Ok(definitions)
    }

    /// Load a single definition file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Definition, RegistryError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            RegistryError::LoadError(format!(
                "Failed to read definition file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content).map_err(|e| match e {
            RegistryError::LoadError(msg) => {
                RegistryError::LoadError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Parse a definition from a YAML string
    pub fn from_str(content: &str) -> Result<Definition, RegistryError> {
        let definition: Definition = serde_yaml::from_str(content).map_err(|e| {
            RegistryError::LoadError(format!("Failed to parse definition YAML: {}", e))
        })?;
        definition.validate()?;
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_definition(root: &Path, dir: &str, content: &str) {
        let provider_dir = root.join(dir);
        std::fs::create_dir_all(&provider_dir).unwrap();
        std::fs::write(provider_dir.join(DEFAULT_DEFINITION_FILE), content).unwrap();
    }

    #[test]
    fn test_parse_definition_with_mixed_props() {
        let yaml = r#"
key: ldap
title: LDAP / Active Directory
description: Active Directory is a directory service
useForm: true
props:
  url:
    type: String
    default: ldap://localhost:389
  bindDn: String
  tlsEnabled: Boolean
"#;
        let def = DefinitionLoader::from_str(yaml).unwrap();
        assert_eq!(def.key, "ldap");
        assert_eq!(def.title, "LDAP / Active Directory");
        assert!(def.use_form);
        assert_eq!(def.props.len(), 3);
        assert_eq!(def.props["bindDn"], serde_json::json!("String"));
        assert_eq!(def.props["url"]["default"], serde_json::json!("ldap://localhost:389"));
    }

    #[test]
    fn test_parse_definition_defaults_optional_fields() {
        let def = DefinitionLoader::from_str("key: local\ntitle: Local\n").unwrap();
        assert!(!def.use_form);
        assert!(def.props.is_empty());
    }

    #[test]
    fn test_parse_definition_rejects_invalid_yaml() {
        let result = DefinitionLoader::from_str("key: [unterminated");
        assert!(matches!(result, Err(RegistryError::LoadError(_))));
    }

    #[test]
    fn test_parse_definition_requires_key() {
        let result = DefinitionLoader::from_str("title: No key\n");
        assert!(matches!(result, Err(RegistryError::LoadError(_))));

        let result = DefinitionLoader::from_str("key: ''\ntitle: Empty key\n");
        assert!(matches!(result, Err(RegistryError::SchemaError { .. })));
    }

    #[tokio::test]
    async fn test_load_all_reads_each_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "local", "key: local\ntitle: Local\nuseForm: true\n");
        write_definition(temp_dir.path(), "ldap", "key: ldap\ntitle: LDAP\nuseForm: true\n");
        std::fs::write(temp_dir.path().join("README.md"), "not a provider").unwrap();

        let loader = DefinitionLoader::new(temp_dir.path());
        let defs = loader.load_all().await.unwrap();

        let mut keys: Vec<_> = defs.iter().map(|d| d.key.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["ldap", "local"]);
    }

    #[tokio::test]
    async fn test_load_all_fails_when_definition_missing() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "local", "key: local\ntitle: Local\n");
        std::fs::create_dir_all(temp_dir.path().join("broken")).unwrap();

        let loader = DefinitionLoader::new(temp_dir.path());
        let err = loader.load_all().await.unwrap_err();
        assert!(matches!(err, RegistryError::LoadError(_)));
        assert!(err.to_string().contains("broken"));
    }

    #[tokio::test]
    async fn test_load_all_fails_when_root_missing() {
        let temp_dir = TempDir::new().unwrap();
        let loader = DefinitionLoader::new(temp_dir.path().join("does-not-exist"));
        assert!(matches!(
            loader.load_all().await,
            Err(RegistryError::LoadError(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_definition_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let provider_dir = temp_dir.path().join("oidc");
        std::fs::create_dir_all(&provider_dir).unwrap();
        std::fs::write(provider_dir.join("provider.yaml"), "key: oidc\ntitle: OIDC\n").unwrap();

        let loader = DefinitionLoader::new(temp_dir.path()).with_file_name("provider.yaml");
        let defs = loader.load_all().await.unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].key, "oidc");
    }
}
