//! Typed default configuration derived from provider property schemas

pub mod builder;
pub mod types;

pub use builder::*;
pub use types::*;

#[cfg(test)]
mod tests;
