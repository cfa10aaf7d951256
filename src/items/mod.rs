//! Loot items and the editable table of items being hunted.

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
