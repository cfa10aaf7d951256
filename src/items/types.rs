use crate::odds::error::{CalcError, CalcResult};
use crate::odds::types::{validate_rarity, validate_time};
use serde::{Deserialize, Serialize};

/// A droppable item the player is hunting for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LootItem {
    pub id: String,
    pub name: String,
    /// Chance per attempt, as a percentage in [0, 100].
    pub rarity: f64,
    /// Time units one attempt costs (minutes in the CLI).
    pub time_per_attempt: f64,
}

impl LootItem {
    /// Builds a validated item.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: f64,
        time_per_attempt: f64,
    ) -> CalcResult<Self> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            rarity,
            time_per_attempt,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::EmptyName(self.id.clone()));
        }
        validate_rarity(self.rarity)?;
        validate_time(self.time_per_attempt)
    }
}

/// A single editable field of a [`LootItem`].
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Name(String),
    Rarity(f64),
    TimePerAttempt(f64),
}
