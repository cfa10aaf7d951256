//! Pure probability math. Nothing here holds state between calls.

use super::error::{CalcError, CalcResult};
use super::types::{
    validate_rarity, CompletionEstimate, CurvePoint, ItemProbability, JointRule,
    ProbabilityResult, SeriesValue,
};
use crate::core::constants::{ALL_ITEMS_LABEL, MIN_CURVE_POINTS, NEAR_CERTAINTY_THRESHOLD, PERCENT};
use crate::items::LootItem;
use log::trace;

/// Percent chance that an event with per-attempt miss chance `miss` happens
/// at least once in `attempts` tries.
fn at_least_once(miss: f64, attempts: u64) -> f64 {
    let miss_every_time = miss.powf(attempts as f64);
    ((1.0 - miss_every_time) * PERCENT).clamp(0.0, PERCENT)
}

fn check_attempts(attempts: u32) -> CalcResult<()> {
    if attempts == 0 {
        Err(CalcError::ZeroAttempts)
    } else {
        Ok(())
    }
}

fn validate_items(items: &[LootItem]) -> CalcResult<()> {
    items.iter().try_for_each(LootItem::validate)
}

/// Chance (percent) of at least one drop of an item with `rarity_percent`
/// in `attempts` independent attempts.
pub fn single_item_probability(attempts: u32, rarity_percent: f64) -> CalcResult<f64> {
    check_attempts(attempts)?;
    validate_rarity(rarity_percent)?;
    Ok(at_least_once(1.0 - rarity_percent / PERCENT, attempts as u64))
}

/// Chance (percent) of completing the whole set within `attempts`, using
/// the default [`JointRule`].
pub fn combined_probability(attempts: u32, rarity_percents: &[f64]) -> CalcResult<f64> {
    combined_probability_with(JointRule::default(), attempts, rarity_percents)
}

pub fn combined_probability_with(
    rule: JointRule,
    attempts: u32,
    rarity_percents: &[f64],
) -> CalcResult<f64> {
    check_attempts(attempts)?;
    let miss = rule.per_attempt_miss(rarity_percents)?;
    Ok(at_least_once(miss, attempts as u64))
}

/// Smallest attempt count whose combined probability reaches
/// `threshold * 100` percent, using the default [`JointRule`].
pub fn attempts_for_near_certainty(rarity_percents: &[f64], threshold: f64) -> CalcResult<u64> {
    attempts_for_near_certainty_with(JointRule::default(), rarity_percents, threshold)
}

pub fn attempts_for_near_certainty_with(
    rule: JointRule,
    rarity_percents: &[f64],
    threshold: f64,
) -> CalcResult<u64> {
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(CalcError::InvalidThreshold(threshold));
    }

    let miss = rule.per_attempt_miss(rarity_percents)?;
    if miss >= 1.0 {
        return Err(CalcError::DegenerateComputation);
    }
    // Guaranteed on the first attempt; ln(0) must not be taken.
    if miss <= 0.0 {
        return Ok(1);
    }

    let estimate = ((1.0 - threshold).ln() / miss.ln()).ceil();
    let mut attempts = if estimate.is_finite() && estimate >= 1.0 {
        estimate as u64
    } else {
        1
    };

    // The closed form can land one off after rounding; settle on the exact
    // boundary as seen by at_least_once.
    let target = threshold * PERCENT;
    while at_least_once(miss, attempts) < target {
        attempts += 1;
    }
    while attempts > 1 && at_least_once(miss, attempts - 1) >= target {
        attempts -= 1;
    }

    trace!(
        "near-certainty: rule={rule} miss={miss} estimate={estimate} attempts={attempts}"
    );
    Ok(attempts)
}

/// Total time if every item is farmed for the same `attempts_needed`.
///
/// Items that drop more easily are still charged the full count.
pub fn estimated_time(attempts_needed: u64, items: &[LootItem]) -> CalcResult<f64> {
    if attempts_needed == 0 {
        return Err(CalcError::ZeroAttempts);
    }
    validate_items(items)?;
    Ok(items
        .iter()
        .map(|item| attempts_needed as f64 * item.time_per_attempt)
        .sum())
}

/// Tabulates every item's curve and the "All Items" curve for
/// `1..=max(max_attempts, 10)` attempts.
pub fn build_curve(max_attempts: u32, items: &[LootItem]) -> CalcResult<Vec<CurvePoint>> {
    build_curve_with(JointRule::default(), max_attempts, items)
}

pub fn build_curve_with(
    rule: JointRule,
    max_attempts: u32,
    items: &[LootItem],
) -> CalcResult<Vec<CurvePoint>> {
    check_attempts(max_attempts)?;
    validate_items(items)?;
    let rarities: Vec<f64> = items.iter().map(|item| item.rarity).collect();
    let set_miss = rule.per_attempt_miss(&rarities)?;

    let last = max_attempts.max(MIN_CURVE_POINTS);
    trace!("building curve: {} items, {last} points", items.len());

    let curve = (1..=last)
        .map(|attempts| {
            let mut values: Vec<SeriesValue> = items
                .iter()
                .map(|item| SeriesValue {
                    label: item.name.clone(),
                    probability: at_least_once(1.0 - item.rarity / PERCENT, attempts as u64),
                })
                .collect();
            values.push(SeriesValue {
                label: ALL_ITEMS_LABEL.to_string(),
                probability: at_least_once(set_miss, attempts as u64),
            });
            CurvePoint { attempts, values }
        })
        .collect();

    Ok(curve)
}

/// Per-item and combined probabilities for `attempts`.
pub fn probability_result(attempts: u32, items: &[LootItem]) -> CalcResult<ProbabilityResult> {
    probability_result_with(JointRule::default(), attempts, items)
}

pub fn probability_result_with(
    rule: JointRule,
    attempts: u32,
    items: &[LootItem],
) -> CalcResult<ProbabilityResult> {
    validate_items(items)?;
    let rarities: Vec<f64> = items.iter().map(|item| item.rarity).collect();
    let combined = combined_probability_with(rule, attempts, &rarities)?;

    let per_item = items
        .iter()
        .map(|item| {
            Ok(ItemProbability {
                id: item.id.clone(),
                name: item.name.clone(),
                probability: single_item_probability(attempts, item.rarity)?,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(ProbabilityResult { per_item, combined })
}

/// Attempts needed for near-certainty and the time they take.
pub fn completion_estimate(items: &[LootItem]) -> CalcResult<CompletionEstimate> {
    completion_estimate_with(JointRule::default(), items, NEAR_CERTAINTY_THRESHOLD)
}

pub fn completion_estimate_with(
    rule: JointRule,
    items: &[LootItem],
    threshold: f64,
) -> CalcResult<CompletionEstimate> {
    validate_items(items)?;
    let rarities: Vec<f64> = items.iter().map(|item| item.rarity).collect();
    let attempts_needed = attempts_for_near_certainty_with(rule, &rarities, threshold)?;
    let total_time = estimated_time(attempts_needed, items)?;
    Ok(CompletionEstimate {
        attempts_needed,
        total_time,
    })
}
