//! Authentication provider registry.
//!
//! Provider templates are declared as YAML definition files on disk, one
//! subdirectory per provider. This crate keeps a persisted registry of
//! strategy rows in step with those templates: every definition gets exactly
//! one row, seeded once with typed default configuration derived from the
//! definition's property schema. Existing rows are never overwritten,
//! duplicated, or removed.
//!
//! # Architecture Overview
//!
//! - **Definitions**: discovery and parsing of on-disk provider definitions
//! - **Schema**: pure construction of default config trees from property declarations
//! - **Store**: async persistence trait with in-memory and JSON-file backends
//! - **Reconciler**: one-shot additive synchronization from disk to store
//! - **Strategy reader**: normalized read path over persisted rows
//! - **Settings**: YAML settings with environment overrides

pub mod definition;
pub mod errors;
pub mod reconciler;
pub mod registry;
pub mod schema;
pub mod settings;
pub mod store;
pub mod strategy;

pub use definition::{Definition, DefinitionLoader};
pub use errors::RegistryError;
pub use reconciler::{Reconciler, RefreshOutcome};
pub use registry::AuthenticationRegistry;
pub use schema::{build_default_config, ConfigProperty, ConfigTree};
pub use settings::{RegistrySettings, SettingsLoader};
pub use store::{InMemoryStrategyStore, JsonFileStrategyStore, StrategyStore};
pub use strategy::{NewStrategy, Strategy, StrategyReader, StrategyView};
