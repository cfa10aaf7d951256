//! Monte Carlo drop simulator.
//!
//! Farms a loot table many times with a seeded RNG to check the analytic
//! figures from [`crate::odds`]:
//! - attempts until the set completes
//! - how often and how early each item drops
//! - share of runs done within the analytic near-certainty count

mod config;
mod loot_sim;
mod report;
mod runner;

pub use config::SimConfig;
pub use loot_sim::{attempt_completes, roll_attempt, simulate_run, RunStats};
pub use report::{ItemDropStats, SimReport};
pub use runner::run_simulation;
