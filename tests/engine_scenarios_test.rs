//! Integration test: Odds Engine Properties
//!
//! Exercises the public `dropcalc::odds` functions end to end: bounds,
//! monotonicity, the 0% and 100% edges, single-item consistency, the
//! near-certainty round trip, and the worked scenarios.

use dropcalc::core::constants::{ALL_ITEMS_LABEL, MIN_CURVE_POINTS, NEAR_CERTAINTY_THRESHOLD};
use dropcalc::items::LootItem;
use dropcalc::odds::{
    attempts_for_near_certainty, attempts_for_near_certainty_with, build_curve,
    combined_probability, combined_probability_with, completion_estimate, estimated_time,
    single_item_probability, CalcError, JointRule,
};
use float_eq::assert_float_eq;

const RARITIES: [f64; 8] = [0.01, 0.5, 1.0, 5.0, 12.5, 33.3, 50.0, 99.9];

fn item(id: &str, name: &str, rarity: f64, time: f64) -> LootItem {
    LootItem::new(id, name, rarity, time).unwrap()
}

// =========================================================================
// Bounds and monotonicity
// =========================================================================

#[test]
fn test_probabilities_stay_within_percent_bounds() {
    for &rarity in &RARITIES {
        for attempts in [1, 2, 10, 100, 1_000, 100_000] {
            let p = single_item_probability(attempts, rarity).unwrap();
            assert!(
                (0.0..=100.0).contains(&p),
                "rarity {rarity}% over {attempts} attempts gave {p}"
            );
            let c = combined_probability(attempts, &[rarity, 5.0]).unwrap();
            assert!((0.0..=100.0).contains(&c), "combined out of bounds: {c}");
        }
    }
}

#[test]
fn test_more_attempts_never_lowers_probability() {
    for &rarity in &RARITIES {
        let mut previous = 0.0;
        for attempts in 1..=300 {
            let p = single_item_probability(attempts, rarity).unwrap();
            assert!(
                p >= previous,
                "rarity {rarity}%: P({attempts}) = {p} < P({}) = {previous}",
                attempts - 1
            );
            previous = p;
        }
    }
}

#[test]
fn test_combined_curve_is_monotonic_for_both_rules() {
    for rule in [JointRule::Union, JointRule::Simultaneous] {
        let mut previous = 0.0;
        for attempts in 1..=200 {
            let p = combined_probability_with(rule, attempts, &[40.0, 60.0]).unwrap();
            assert!(p >= previous, "{rule}: dropped at {attempts} attempts");
            previous = p;
        }
    }
}

// =========================================================================
// Edges: 0% and 100%
// =========================================================================

#[test]
fn test_zero_rarity_never_drops() {
    for attempts in [1, 10, 1_000_000] {
        assert_eq!(single_item_probability(attempts, 0.0).unwrap(), 0.0);
    }
}

#[test]
fn test_certain_rarity_always_drops() {
    for attempts in [1, 10, 1_000_000] {
        assert_eq!(single_item_probability(attempts, 100.0).unwrap(), 100.0);
    }
}

#[test]
fn test_out_of_range_inputs_rejected() {
    assert_eq!(
        single_item_probability(10, 100.5).unwrap_err(),
        CalcError::RarityOutOfRange(100.5)
    );
    assert_eq!(
        single_item_probability(10, -1.0).unwrap_err(),
        CalcError::RarityOutOfRange(-1.0)
    );
    assert_eq!(
        single_item_probability(0, 5.0).unwrap_err(),
        CalcError::ZeroAttempts
    );
    assert!(single_item_probability(10, f64::NAN).unwrap_err().is_invalid_input());
}

// =========================================================================
// Single-item consistency
// =========================================================================

#[test]
fn test_one_item_set_matches_single_item_exactly() {
    for &rarity in &RARITIES {
        for attempts in [1, 7, 59, 180, 5_000] {
            let single = single_item_probability(attempts, rarity).unwrap();
            for rule in [JointRule::Union, JointRule::Simultaneous] {
                let combined = combined_probability_with(rule, attempts, &[rarity]).unwrap();
                assert_eq!(
                    single, combined,
                    "{rule}: rarity {rarity}% over {attempts} attempts"
                );
            }
        }
    }
}

// =========================================================================
// Near-certainty round trip
// =========================================================================

#[test]
fn test_near_certainty_count_is_minimal() {
    for &rarity in &RARITIES {
        let n = attempts_for_near_certainty(&[rarity], NEAR_CERTAINTY_THRESHOLD).unwrap();
        let target = NEAR_CERTAINTY_THRESHOLD * 100.0;

        let at_n = combined_probability(n as u32, &[rarity]).unwrap();
        assert!(at_n >= target, "rarity {rarity}%: P({n}) = {at_n} < {target}");

        if n > 1 {
            let before = combined_probability((n - 1) as u32, &[rarity]).unwrap();
            assert!(
                before < target,
                "rarity {rarity}%: {} attempts already reach {before}",
                n - 1
            );
        }
    }
}

#[test]
fn test_near_certainty_with_other_thresholds() {
    // 50% per attempt: 90% needs 4 attempts (93.75%), 3 only give 87.5%
    assert_eq!(attempts_for_near_certainty(&[50.0], 0.9).unwrap(), 4);
    assert_eq!(attempts_for_near_certainty(&[50.0], 0.5).unwrap(), 1);
    assert_eq!(
        attempts_for_near_certainty(&[50.0], 1.0).unwrap_err(),
        CalcError::InvalidThreshold(1.0)
    );
}

// =========================================================================
// Worked scenarios
// =========================================================================

#[test]
fn test_scenario_two_items_over_ten_attempts() {
    let p = combined_probability(10, &[5.0, 10.0]).unwrap();
    assert_float_eq!(p, (1.0 - (0.95_f64 * 0.90).powi(10)) * 100.0, abs <= 1e-9);
    assert_float_eq!(p, 79.1233, abs <= 1e-4);
}

#[test]
fn test_scenario_five_percent_needs_180_attempts() {
    assert_eq!(
        attempts_for_near_certainty(&[5.0], NEAR_CERTAINTY_THRESHOLD).unwrap(),
        180
    );
}

#[test]
fn test_scenario_certain_item_needs_one_attempt() {
    assert_eq!(
        attempts_for_near_certainty(&[100.0], NEAR_CERTAINTY_THRESHOLD).unwrap(),
        1
    );
    assert_eq!(
        attempts_for_near_certainty_with(
            JointRule::Simultaneous,
            &[100.0, 100.0],
            NEAR_CERTAINTY_THRESHOLD
        )
        .unwrap(),
        1
    );
}

#[test]
fn test_scenario_impossible_item_is_degenerate() {
    assert_eq!(
        attempts_for_near_certainty(&[0.0], NEAR_CERTAINTY_THRESHOLD).unwrap_err(),
        CalcError::DegenerateComputation
    );
    // One impossible item makes the simultaneous set impossible too
    assert_eq!(
        attempts_for_near_certainty_with(
            JointRule::Simultaneous,
            &[0.0, 50.0],
            NEAR_CERTAINTY_THRESHOLD
        )
        .unwrap_err(),
        CalcError::DegenerateComputation
    );
    let items = vec![item("1", "Cut Content", 0.0, 1.0)];
    assert_eq!(
        completion_estimate(&items).unwrap_err(),
        CalcError::DegenerateComputation
    );
}

// =========================================================================
// Curve
// =========================================================================

#[test]
fn test_curve_floor_applies_to_short_requests() {
    let items = vec![item("1", "Sword", 5.0, 1.0), item("2", "Shield", 10.0, 1.0)];
    let curve = build_curve(5, &items).unwrap();

    assert_eq!(curve.len(), MIN_CURVE_POINTS as usize);
    for (idx, point) in curve.iter().enumerate() {
        assert_eq!(point.attempts, idx as u32 + 1);
        let labels: Vec<&str> = point.values.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Sword", "Shield", ALL_ITEMS_LABEL]);
    }
}

#[test]
fn test_curve_agrees_with_point_queries() {
    let items = vec![item("1", "Sword", 5.0, 1.0), item("2", "Shield", 10.0, 1.0)];
    let curve = build_curve(40, &items).unwrap();
    assert_eq!(curve.len(), 40);

    let point = &curve[9];
    assert_eq!(point.attempts, 10);
    assert_eq!(
        point.all_items().unwrap(),
        combined_probability(10, &[5.0, 10.0]).unwrap()
    );
    assert_eq!(
        point.get("Sword").unwrap(),
        single_item_probability(10, 5.0).unwrap()
    );
}

// =========================================================================
// Empty set and time
// =========================================================================

#[test]
fn test_empty_item_set_is_rejected_everywhere() {
    assert_eq!(combined_probability(10, &[]).unwrap_err(), CalcError::EmptyItemSet);
    assert_eq!(
        attempts_for_near_certainty(&[], NEAR_CERTAINTY_THRESHOLD).unwrap_err(),
        CalcError::EmptyItemSet
    );
    assert_eq!(build_curve(10, &[]).unwrap_err(), CalcError::EmptyItemSet);
}

#[test]
fn test_estimated_time_charges_every_item_the_shared_count() {
    let items = vec![item("1", "Sword", 5.0, 1.5), item("2", "Shield", 10.0, 2.0)];
    assert_float_eq!(estimated_time(100, &items).unwrap(), 350.0, abs <= 1e-9);
    assert_eq!(estimated_time(0, &items).unwrap_err(), CalcError::ZeroAttempts);
}
