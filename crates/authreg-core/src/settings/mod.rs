//! Deployment settings: where definitions live and where strategies are stored

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::RegistryError;
use std::path::Path;

/// Load settings from a YAML file
pub async fn load_settings<P: AsRef<Path>>(path: P) -> Result<RegistrySettings, RegistryError> {
    SettingsLoader::from_file(path).await
}
