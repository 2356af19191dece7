//! Strategy store backed by a single JSON file
//!
//! The file holds a JSON array of rows. A missing file reads as an empty
//! registry. Writes go to a sibling temp file which is then renamed over the
//! original, so readers never see a half-written registry.

use crate::errors::RegistryError;
use crate::store::{assign_ids, check_batch, StrategyStore};
use crate::strategy::{NewStrategy, Strategy};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct JsonFileStrategyStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStrategyStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_rows(&self) -> Result<Vec<Strategy>, RegistryError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RegistryError::StoreError(format!(
                    "Failed to read strategy store {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            RegistryError::StoreError(format!(
                "Failed to parse strategy store {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_rows(&self, rows: &[Strategy]) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                RegistryError::StoreError(format!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(rows)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            RegistryError::StoreError(format!(
                "Failed to write strategy store {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            RegistryError::StoreError(format!(
                "Failed to replace strategy store {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl StrategyStore for JsonFileStrategyStore {
    async fn query_all(&self) -> Result<Vec<Strategy>, RegistryError> {
        self.read_rows().await
    }

    async fn insert_many(&self, rows: Vec<NewStrategy>) -> Result<Vec<Strategy>, RegistryError> {
        let _guard = self.write_lock.lock().await;
        let mut existing = self.read_rows().await?;
        check_batch(&existing, &rows)?;
        let inserted = assign_ids(&existing, rows);
        existing.extend(inserted.iter().cloned());
        self.write_rows(&existing).await?;
        log::debug!(
            "Persisted {} strategies to {}",
            inserted.len(),
            self.path.display()
        );
        Ok(inserted)
    }
}
