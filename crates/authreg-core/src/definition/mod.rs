//! Provider definitions read from disk

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
