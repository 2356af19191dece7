//! Persistence for strategy rows
//!
//! The registry only needs two operations from a store: read everything, and
//! insert a batch atomically. Stores enforce key uniqueness so that two
//! reconciliation passes racing each other cannot both seed the same key.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStrategyStore;
pub use memory::InMemoryStrategyStore;

use crate::errors::RegistryError;
use crate::strategy::{NewStrategy, Strategy};
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait StrategyStore: Send + Sync {
    /// Every persisted row, in insertion order
    async fn query_all(&self) -> Result<Vec<Strategy>, RegistryError>;

    /// Insert all rows or none; returns the rows with their assigned ids
    async fn insert_many(&self, rows: Vec<NewStrategy>) -> Result<Vec<Strategy>, RegistryError>;
}

/// Reject a batch that is invalid or would introduce a duplicate key
pub(crate) fn check_batch(existing: &[Strategy], rows: &[NewStrategy]) -> Result<(), RegistryError> {
    let mut keys: HashSet<&str> = existing.iter().map(|s| s.key.as_str()).collect();
    for row in rows {
        row.validate()?;
        if !keys.insert(row.key.as_str()) {
            return Err(RegistryError::StoreError(format!(
                "unique constraint violated: strategy key '{}' already exists",
                row.key
            )));
        }
    }
    Ok(())
}

/// Assign sequential ids after the current maximum
pub(crate) fn assign_ids(existing: &[Strategy], rows: Vec<NewStrategy>) -> Vec<Strategy> {
    let start = existing.iter().map(|s| s.id).max().unwrap_or(0);
    rows.into_iter()
        .zip(start + 1..)
        .map(|(row, id)| row.with_id(id))
        .collect()
}
