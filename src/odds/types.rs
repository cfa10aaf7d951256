use super::error::{CalcError, CalcResult};
use crate::core::constants::{ALL_ITEMS_LABEL, PERCENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How individual rarities combine into the per-attempt chance for the
/// whole item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointRule {
    /// `1 - Π(1 - p_i)`: an attempt counts when it yields at least one item.
    #[default]
    Union,
    /// `Π p_i`: an attempt counts only when it yields every item at once.
    Simultaneous,
}

impl JointRule {
    pub fn name(&self) -> &'static str {
        match self {
            JointRule::Union => "union",
            JointRule::Simultaneous => "simultaneous",
        }
    }

    /// Joint per-attempt chance as a decimal in [0, 1].
    pub fn per_attempt_chance(&self, rarity_percents: &[f64]) -> CalcResult<f64> {
        Ok(1.0 - self.per_attempt_miss(rarity_percents)?)
    }

    /// Chance that a single attempt does NOT complete the set.
    ///
    /// The engine works from this value so a one-item set goes through
    /// exactly the same float operations as a lone item.
    pub fn per_attempt_miss(&self, rarity_percents: &[f64]) -> CalcResult<f64> {
        if rarity_percents.is_empty() {
            return Err(CalcError::EmptyItemSet);
        }
        for &rarity in rarity_percents {
            validate_rarity(rarity)?;
        }

        let miss: f64 = match self {
            JointRule::Union => rarity_percents
                .iter()
                .map(|r| 1.0 - r / PERCENT)
                .product(),
            JointRule::Simultaneous => {
                let hit_all: f64 = rarity_percents.iter().map(|r| r / PERCENT).product();
                1.0 - hit_all
            }
        };

        Ok(miss.clamp(0.0, 1.0))
    }
}

impl fmt::Display for JointRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JointRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "union" | "any" => Ok(JointRule::Union),
            "simultaneous" | "all" => Ok(JointRule::Simultaneous),
            other => Err(format!(
                "unknown joint rule '{other}' (expected 'union' or 'simultaneous')"
            )),
        }
    }
}

pub(crate) fn validate_rarity(rarity_percent: f64) -> CalcResult<()> {
    if rarity_percent.is_finite() && (0.0..=PERCENT).contains(&rarity_percent) {
        Ok(())
    } else {
        Err(CalcError::RarityOutOfRange(rarity_percent))
    }
}

pub(crate) fn validate_time(time_per_attempt: f64) -> CalcResult<()> {
    if time_per_attempt.is_finite() && time_per_attempt > 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidTimePerAttempt(time_per_attempt))
    }
}

/// Chance of one item after a fixed number of attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProbability {
    pub id: String,
    pub name: String,
    pub probability: f64,
}

/// Per-item and whole-set probabilities for one attempt count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    pub per_item: Vec<ItemProbability>,
    pub combined: f64,
}

impl ProbabilityResult {
    /// Looks up an item's probability by id.
    pub fn get(&self, id: &str) -> Option<f64> {
        self.per_item
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.probability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    pub attempts_needed: u64,
    pub total_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub label: String,
    pub probability: f64,
}

/// One x-position of the probability chart: every item's curve plus the
/// "All Items" curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub attempts: u32,
    pub values: Vec<SeriesValue>,
}

impl CurvePoint {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.label == label)
            .map(|v| v.probability)
    }

    pub fn all_items(&self) -> Option<f64> {
        self.get(ALL_ITEMS_LABEL)
    }
}
