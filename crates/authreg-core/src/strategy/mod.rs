//! Strategy registry rows and the read path over them

pub mod reader;
pub mod types;

pub use reader::StrategyReader;
pub use types::*;
