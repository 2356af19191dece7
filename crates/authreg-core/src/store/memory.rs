use crate::errors::RegistryError;
use crate::store::{assign_ids, check_batch, StrategyStore};
use crate::strategy::{NewStrategy, Strategy};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryStrategyStore {
    rows: RwLock<Vec<Strategy>>,
}

impl InMemoryStrategyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-existing rows (ids and keys are taken as given)
    pub fn with_rows(rows: Vec<Strategy>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl StrategyStore for InMemoryStrategyStore {
    async fn query_all(&self) -> Result<Vec<Strategy>, RegistryError> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert_many(&self, rows: Vec<NewStrategy>) -> Result<Vec<Strategy>, RegistryError> {
        let mut guard = self.rows.write().await;
        check_batch(&guard, &rows)?;
        let inserted = assign_ids(&guard, rows);
        guard.extend(inserted.iter().cloned());
        Ok(inserted)
    }
}
