// Near-certainty
pub const NEAR_CERTAINTY_THRESHOLD: f64 = 0.9999;
pub const PERCENT: f64 = 100.0;

// Curve tabulation
pub const MIN_CURVE_POINTS: u32 = 10;
pub const ALL_ITEMS_LABEL: &str = "All Items";
/// Largest attempt count a calculator request accepts. The curve holds one
/// point per attempt.
pub const MAX_ATTEMPTS: u32 = 1_000_000;

// Starting table
pub const DEFAULT_ATTEMPTS: u32 = 10;
pub const DEFAULT_NEW_ITEM_RARITY: f64 = 1.0;
pub const DEFAULT_NEW_ITEM_TIME: f64 = 1.0;

// Calculator pacing
pub const INTERACTIVE_LATENCY_MS: u64 = 500;

// Simulation
pub const DEFAULT_SIM_RUNS: u32 = 1000;
pub const DEFAULT_SIM_MAX_ATTEMPTS: u64 = 1_000_000;
