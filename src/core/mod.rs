//! Shared constants used across the engine, calculator and simulator.

pub mod constants;
