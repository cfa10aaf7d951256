//! Rolling individual attempts.

use crate::core::constants::PERCENT;
use crate::items::LootItem;
use crate::odds::JointRule;
use rand::Rng;

/// Outcome of one farming session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    /// Attempt on which the set counted as complete, if it ever did
    pub completed_at: Option<u64>,
    /// Attempt on which each item first dropped, in table order
    pub first_drops: Vec<Option<u64>>,
    pub attempts_rolled: u64,
}

/// Roll every item once. Returns which ones dropped.
pub fn roll_attempt(items: &[LootItem], rng: &mut impl Rng) -> Vec<bool> {
    items
        .iter()
        .map(|item| rng.gen::<f64>() < item.rarity / PERCENT)
        .collect()
}

/// Whether one attempt's drops complete the set under `rule`.
pub fn attempt_completes(rule: JointRule, drops: &[bool]) -> bool {
    match rule {
        JointRule::Union => drops.iter().any(|&d| d),
        JointRule::Simultaneous => !drops.is_empty() && drops.iter().all(|&d| d),
    }
}

/// Roll attempts until the set completes or `max_attempts` is reached.
pub fn simulate_run(
    items: &[LootItem],
    rule: JointRule,
    max_attempts: u64,
    rng: &mut impl Rng,
) -> RunStats {
    let mut stats = RunStats {
        first_drops: vec![None; items.len()],
        ..Default::default()
    };

    for attempt in 1..=max_attempts {
        let drops = roll_attempt(items, rng);
        stats.attempts_rolled = attempt;

        for (first, dropped) in stats.first_drops.iter_mut().zip(&drops) {
            if *dropped && first.is_none() {
                *first = Some(attempt);
            }
        }

        if attempt_completes(rule, &drops) {
            stats.completed_at = Some(attempt);
            break;
        }
    }

    stats
}
