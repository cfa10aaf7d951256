//! The ordered list of items a calculation runs over.

use super::types::{ItemField, LootItem};
use crate::core::constants::{DEFAULT_NEW_ITEM_RARITY, DEFAULT_NEW_ITEM_TIME};
use crate::odds::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
    #[serde(default)]
    pub items: Vec<LootItem>,
}

impl Default for LootTable {
    /// The starter table: a 5% sword and a 10% shield at one minute each.
    fn default() -> Self {
        Self {
            items: vec![
                LootItem {
                    id: "1".to_string(),
                    name: "Legendary Sword".to_string(),
                    rarity: 5.0,
                    time_per_attempt: 1.0,
                },
                LootItem {
                    id: "2".to_string(),
                    name: "Rare Shield".to_string(),
                    rarity: 10.0,
                    time_per_attempt: 1.0,
                },
            ],
        }
    }
}

impl LootTable {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<LootItem>) -> CalcResult<Self> {
        let mut table = Self::empty();
        for item in items {
            table.add(item)?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LootItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Next free numeric id, one past the highest numeric id in use.
    pub fn next_id(&self) -> String {
        let highest = self
            .items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (highest.max(self.items.len() as u64) + 1).to_string()
    }

    /// Appends an unnamed placeholder row and returns its id.
    ///
    /// The placeholder fails validation until it is given a name.
    pub fn add_item(&mut self) -> String {
        let id = self.next_id();
        self.items.push(LootItem {
            id: id.clone(),
            name: String::new(),
            rarity: DEFAULT_NEW_ITEM_RARITY,
            time_per_attempt: DEFAULT_NEW_ITEM_TIME,
        });
        id
    }

    pub fn add(&mut self, item: LootItem) -> CalcResult<()> {
        item.validate()?;
        if self.get(&item.id).is_some() {
            return Err(CalcError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the item with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Sets one field on one item. The edited value is range-checked, but a
    /// still-unnamed placeholder may keep its empty name.
    pub fn update(&mut self, id: &str, field: ItemField) -> CalcResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CalcError::UnknownItem(id.to_string()))?;

        match field {
            ItemField::Name(name) => item.name = name,
            ItemField::Rarity(rarity) => {
                crate::odds::types::validate_rarity(rarity)?;
                item.rarity = rarity;
            }
            ItemField::TimePerAttempt(time) => {
                crate::odds::types::validate_time(time)?;
                item.time_per_attempt = time;
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.items.is_empty() {
            return Err(CalcError::EmptyItemSet);
        }
        for (idx, item) in self.items.iter().enumerate() {
            item.validate()?;
            if self.items[..idx].iter().any(|other| other.id == item.id) {
                return Err(CalcError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }

    pub fn rarities(&self) -> Vec<f64> {
        self.items.iter().map(|item| item.rarity).collect()
    }

    /// Time one attempt at every item costs.
    pub fn total_time_per_attempt(&self) -> f64 {
        self.items.iter().map(|item| item.time_per_attempt).sum()
    }
}
