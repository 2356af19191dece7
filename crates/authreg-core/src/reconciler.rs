//! Additive synchronization of on-disk definitions into the strategy store
//!
//! A pass reads every existing row, loads every definition, and inserts one
//! new row per definition whose key has no row yet. Existing rows are never
//! updated or removed, and rows whose definition disappeared from disk are
//! left in place. Failures are logged and reported through [`RefreshOutcome`];
//! a pass never panics and never returns an error to its caller.

use crate::definition::DefinitionLoader;
use crate::errors::RegistryError;
use crate::store::StrategyStore;
use crate::strategy::NewStrategy;
use std::collections::HashSet;
use std::sync::Arc;

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// This many new strategies were inserted
    Created(usize),
    /// Every definition already had a row
    NothingNew,
    /// The pass aborted; nothing was written
    Failed(RegistryError),
}

impl RefreshOutcome {
    pub fn created(&self) -> usize {
        match self {
            RefreshOutcome::Created(n) => *n,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RefreshOutcome::Failed(_))
    }
}

pub struct Reconciler {
    store: Arc<dyn StrategyStore>,
    loader: DefinitionLoader,
}

impl Reconciler {
    pub fn new(store: Arc<dyn StrategyStore>, loader: DefinitionLoader) -> Self {
        Self { store, loader }
    }

    pub fn loader(&self) -> &DefinitionLoader {
        &self.loader
    }

    /// Run one pass, logging the outcome
    pub async fn run(&self) -> RefreshOutcome {
        let outcome = match self.plan().await {
            Ok(batch) if batch.is_empty() => RefreshOutcome::NothingNew,
            Ok(batch) => match self.store.insert_many(batch).await {
                Ok(inserted) => RefreshOutcome::Created(inserted.len()),
                Err(e) => RefreshOutcome::Failed(e),
            },
            Err(e) => RefreshOutcome::Failed(e),
        };

        match &outcome {
            RefreshOutcome::Created(n) => {
                log::info!("Loaded {} new authentication strategies: [ OK ]", n)
            }
            RefreshOutcome::NothingNew => {
                log::info!("No new authentication strategies found: [ SKIPPED ]")
            }
            RefreshOutcome::Failed(e) => {
                log::error!("Failed to scan or load new authentication providers: [ FAILED ]");
                log::error!("{} error: {}", e.kind(), e);
            }
        }
        outcome
    }

    /// Compute the rows a pass would insert, without writing anything
    pub async fn plan(&self) -> Result<Vec<NewStrategy>, RegistryError> {
        let existing = self.store.query_all().await?;
        let definitions = self.loader.load_all().await?;

        let mut known: HashSet<String> = existing.into_iter().map(|s| s.key).collect();
        let mut batch = Vec::new();
        for definition in &definitions {
            if known.contains(&definition.key) {
                if batch.iter().any(|row: &NewStrategy| row.key == definition.key) {
                    log::warn!(
                        "Duplicate provider definition key '{}' in {}; keeping the first",
                        definition.key,
                        self.loader.root().display()
                    );
                }
                continue;
            }
            let row = NewStrategy::from_definition(definition)?;
            known.insert(row.key.clone());
            batch.push(row);
        }
        Ok(batch)
    }
}
