//! Simulation configuration.

use crate::core::constants::{DEFAULT_SIM_MAX_ATTEMPTS, DEFAULT_SIM_RUNS};
use crate::odds::JointRule;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated farming sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Attempts per session before giving up
    pub max_attempts_per_run: u64,

    /// What counts as completing the set within one attempt
    pub joint_rule: JointRule,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_SIM_RUNS,
            seed: None,
            max_attempts_per_run: DEFAULT_SIM_MAX_ATTEMPTS,
            joint_rule: JointRule::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible config for sanity checks
    pub fn quick_check(seed: u64) -> Self {
        Self {
            num_runs: 200,
            seed: Some(seed),
            max_attempts_per_run: 10_000,
            ..Default::default()
        }
    }

    /// Many runs for comparing against the analytic figures
    pub fn agreement_check(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
