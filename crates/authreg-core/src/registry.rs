//! Entry points used by the host service

use crate::definition::DefinitionLoader;
use crate::errors::RegistryError;
use crate::reconciler::{Reconciler, RefreshOutcome};
use crate::settings::RegistrySettings;
use crate::store::{JsonFileStrategyStore, StrategyStore};
use crate::strategy::{StrategyReader, StrategyView};
use std::sync::Arc;

/// Authentication strategy registry: the reconciler and the reader over one
/// shared store.
pub struct AuthenticationRegistry {
    reconciler: Reconciler,
    reader: StrategyReader,
}

impl AuthenticationRegistry {
    pub fn new(store: Arc<dyn StrategyStore>, loader: DefinitionLoader) -> Self {
        Self {
            reconciler: Reconciler::new(store.clone(), loader),
            reader: StrategyReader::new(store),
        }
    }

    /// Wire a registry over a JSON file store as described by `settings`
    pub fn from_settings(settings: &RegistrySettings) -> Self {
        let store: Arc<dyn StrategyStore> =
            Arc::new(JsonFileStrategyStore::new(&settings.store.path));
        let loader = DefinitionLoader::new(&settings.definitions.dir)
            .with_file_name(&settings.definitions.file_name);
        Self::new(store, loader)
    }

    pub async fn get_strategies(&self) -> Result<Vec<StrategyView>, RegistryError> {
        self.reader.get_strategies().await
    }

    pub async fn refresh_strategies_from_disk(&self) -> RefreshOutcome {
        self.reconciler.run().await
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }
}
