//! Calculator configuration.

use crate::core::constants::{INTERACTIVE_LATENCY_MS, NEAR_CERTAINTY_THRESHOLD};
use crate::odds::JointRule;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs for one calculator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Fraction treated as "certain" (0.9999 = 99.99%)
    pub threshold: f64,

    /// How item rarities combine for the whole set
    pub joint_rule: JointRule,

    /// Artificial pause before a result is handed back (0 = none)
    pub latency_ms: u64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            threshold: NEAR_CERTAINTY_THRESHOLD,
            joint_rule: JointRule::default(),
            latency_ms: 0,
        }
    }
}

impl CalcConfig {
    /// No pause at all, for scripts and tests
    pub fn instant() -> Self {
        Self::default()
    }

    /// Half-second "Calculating..." pause, like the web form
    pub fn interactive() -> Self {
        Self {
            latency_ms: INTERACTIVE_LATENCY_MS,
            ..Default::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
