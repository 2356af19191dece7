//! Settings loader for YAML files and environment overrides

use crate::errors::RegistryError;
use crate::settings::types::RegistrySettings;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const ENV_DEFINITIONS_DIR: &str = "AUTHREG_DEFINITIONS_DIR";
pub const ENV_DEFINITION_FILE: &str = "AUTHREG_DEFINITION_FILE";
pub const ENV_STORE_PATH: &str = "AUTHREG_STORE_PATH";

pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<RegistrySettings, RegistryError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            RegistryError::ConfigError(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut settings = Self::parse(&content)?;

        // Relative paths in a settings file are taken relative to that file
        if let Some(base_dir) = path.parent() {
            Self::resolve_relative_paths(&mut settings, base_dir);
        }

        Self::resolve_environment(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file if it exists, otherwise start from defaults
    pub async fn from_file_or_default<P: AsRef<Path>>(
        path: P,
    ) -> Result<RegistrySettings, RegistryError> {
        let path = path.as_ref();
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await
        } else {
            log::debug!(
                "Settings file {} not found, using defaults",
                path.display()
            );
            let mut settings = RegistrySettings::default();
            Self::resolve_environment(&mut settings);
            settings.validate()?;
            Ok(settings)
        }
    }

    /// Load settings from a YAML string
    pub fn from_str(content: &str) -> Result<RegistrySettings, RegistryError> {
        let mut settings = Self::parse(content)?;
        Self::resolve_environment(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    fn parse(content: &str) -> Result<RegistrySettings, RegistryError> {
        if content.trim().is_empty() {
            return Ok(RegistrySettings::default());
        }
        serde_yaml::from_str(content).map_err(|e| {
            RegistryError::ConfigError(format!("Failed to parse YAML settings: {}", e))
        })
    }

    /// Apply `AUTHREG_*` environment overrides
    fn resolve_environment(settings: &mut RegistrySettings) {
        if let Ok(dir) = env::var(ENV_DEFINITIONS_DIR) {
            if !dir.is_empty() {
                settings.definitions.dir = PathBuf::from(dir);
            }
        }
        if let Ok(file_name) = env::var(ENV_DEFINITION_FILE) {
            if !file_name.is_empty() {
                settings.definitions.file_name = file_name;
            }
        }
        if let Ok(path) = env::var(ENV_STORE_PATH) {
            if !path.is_empty() {
                settings.store.path = PathBuf::from(path);
            }
        }
    }

    fn resolve_relative_paths(settings: &mut RegistrySettings, base_dir: &Path) {
        if settings.definitions.dir.is_relative() {
            settings.definitions.dir = base_dir.join(&settings.definitions.dir);
        }
        if settings.store.path.is_relative() {
            settings.store.path = base_dir.join(&settings.store.path);
        }
    }
}
