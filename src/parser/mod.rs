//! Parser module - CSV rows to transitions

pub mod normalize;
pub mod reader;
pub mod trigger;

// Re-export key types
pub use normalize::normalize_rows;
pub use reader::{RawRow, TableReader, resolve_table_path};
pub use trigger::classify;
