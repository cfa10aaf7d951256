//! dropcalc - Loot Drop Probability Library
//!
//! Chance of getting an item (or a whole set) after N attempts, attempts
//! needed for near-certainty, time estimates, and chart-ready curves.
//! The CLI in `main.rs` is a thin front end over these modules.

pub mod calculator;
pub mod core;
pub mod items;
pub mod odds;
pub mod simulator;
pub mod utils;

pub use calculator::{CalcConfig, CalcReport, CalcRequest, Calculator};
pub use items::{ItemField, LootItem, LootTable};
pub use odds::{CalcError, CalcResult, JointRule};
