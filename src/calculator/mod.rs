//! Request/response boundary around the odds engine.
//!
//! A front end builds a [`CalcRequest`], hands it to a [`Calculator`] and
//! renders the returned [`CalcReport`]. Any artificial pause lives here,
//! never inside the engine.

mod config;
mod latency;
mod report;

pub use config::CalcConfig;
pub use latency::{Latency, NoLatency, SleepLatency};
pub use report::CalcReport;

use crate::core::constants::{DEFAULT_ATTEMPTS, MAX_ATTEMPTS};
use crate::items::LootTable;
use crate::odds::{self, CalcError, CalcResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// User input: how many attempts, over which items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcRequest {
    pub attempts: u32,
    #[serde(flatten)]
    pub table: LootTable,
}

impl Default for CalcRequest {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            table: LootTable::default(),
        }
    }
}

pub struct Calculator {
    config: CalcConfig,
    latency: Box<dyn Latency>,
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            config,
            latency: Box::new(NoLatency),
        }
    }

    /// Replace the latency used before results are returned.
    pub fn with_latency(mut self, latency: impl Latency + 'static) -> Self {
        self.latency = Box::new(latency);
        self
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Validates the request and computes the full report.
    ///
    /// Invalid input fails before any waiting. A set that can never be
    /// completed still gets its probabilities; only `estimate` is `None`.
    pub fn evaluate(&self, request: &CalcRequest) -> CalcResult<CalcReport> {
        if request.attempts == 0 {
            return Err(CalcError::ZeroAttempts);
        }
        if request.attempts > MAX_ATTEMPTS {
            return Err(CalcError::TooManyAttempts {
                attempts: request.attempts,
                max: MAX_ATTEMPTS,
            });
        }
        request.table.validate()?;

        let rule = self.config.joint_rule;
        let items = &request.table.items;
        debug!(
            "Evaluating {} items over {} attempts ({} rule)",
            items.len(),
            request.attempts,
            rule
        );

        let result = odds::probability_result_with(rule, request.attempts, items)?;
        let time_for_attempts = odds::estimated_time(request.attempts as u64, items)?;
        let estimate = match odds::completion_estimate_with(rule, items, self.config.threshold) {
            Ok(estimate) => Some(estimate),
            Err(CalcError::DegenerateComputation) => None,
            Err(e) => return Err(e),
        };
        let curve = odds::build_curve_with(rule, request.attempts, items)?;

        self.latency.wait(self.config.latency());

        match &estimate {
            Some(e) => info!(
                "{:.2}% in {} attempts; {} attempts for near-certainty",
                result.combined, request.attempts, e.attempts_needed
            ),
            None => info!(
                "{:.2}% in {} attempts; set can never be completed",
                result.combined, request.attempts
            ),
        }

        Ok(CalcReport {
            attempts: request.attempts,
            joint_rule: rule,
            threshold: self.config.threshold,
            result,
            time_for_attempts,
            estimate,
            curve,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}
