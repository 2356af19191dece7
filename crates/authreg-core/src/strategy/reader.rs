use crate::errors::RegistryError;
use crate::store::StrategyStore;
use crate::strategy::types::StrategyView;
use std::sync::Arc;

/// Read path over the strategy store
#[derive(Clone)]
pub struct StrategyReader {
    store: Arc<dyn StrategyStore>,
}

impl StrategyReader {
    pub fn new(store: Arc<dyn StrategyStore>) -> Self {
        Self { store }
    }

    /// All rows, with `domainWhitelist` / `autoEnrollGroups` unwrapped
    pub async fn get_strategies(&self) -> Result<Vec<StrategyView>, RegistryError> {
        let rows = self.store.query_all().await?;
        Ok(rows.into_iter().map(StrategyView::from).collect())
    }
}
