//! Calculation report: what the front end renders.

use crate::core::constants::ALL_ITEMS_LABEL;
use crate::odds::{CompletionEstimate, CurvePoint, JointRule, ProbabilityResult};
use serde::Serialize;

/// Rows shown in the text chart before the curve is sampled.
const MAX_CHART_ROWS: usize = 20;

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcReport {
    pub attempts: u32,
    pub joint_rule: JointRule,
    pub threshold: f64,
    pub result: ProbabilityResult,
    /// Time for the requested attempts across every item.
    pub time_for_attempts: f64,
    /// `None` when no finite number of attempts completes the set.
    pub estimate: Option<CompletionEstimate>,
    pub curve: Vec<CurvePoint>,
}

impl CalcReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  LOOT DROP PROBABILITY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── PROBABILITY ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  All items in {} attempts: {:.2}%  ({} rule)\n",
            self.attempts, self.result.combined, self.joint_rule
        ));
        report.push_str(&format!(
            "  Estimated time:           {:.2} minutes\n\n",
            self.time_for_attempts
        ));

        report.push_str("  Individual items:\n");
        for item in &self.result.per_item {
            report.push_str(&format!("    {}: {:.2}%\n", item.name, item.probability));
        }
        report.push('\n');

        report.push_str("── ATTEMPTS FOR NEAR-CERTAINTY ──────────────────────────────────\n");
        match &self.estimate {
            Some(estimate) => {
                report.push_str(&format!(
                    "  {:.2}% of all items needs: {} attempts\n",
                    self.threshold * 100.0,
                    estimate.attempts_needed
                ));
                report.push_str(&format!(
                    "  Estimated time:           {:.2} minutes\n",
                    estimate.total_time
                ));
            }
            None => {
                report.push_str("  Never: the set has a 0% chance per attempt.\n");
            }
        }
        report.push_str(&format!(
            "  ({:.2}% stands in for 100%, which no finite count reaches.)\n\n",
            self.threshold * 100.0
        ));

        report.push_str("── ALL ITEMS OVER ATTEMPTS ──────────────────────────────────────\n");
        for point in sample_rows(&self.curve) {
            let pct = point.all_items().unwrap_or(0.0);
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:>6}: {:>6.2}% {}\n", point.attempts, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for charting or further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Curve column labels in chart order, "All Items" last.
    pub fn series_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .result
            .per_item
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        labels.push(ALL_ITEMS_LABEL);
        labels
    }
}

/// Evenly spaced rows, always keeping the last one.
fn sample_rows(curve: &[CurvePoint]) -> Vec<&CurvePoint> {
    if curve.len() <= MAX_CHART_ROWS {
        return curve.iter().collect();
    }
    let step = curve.len().div_ceil(MAX_CHART_ROWS);
    let mut rows: Vec<&CurvePoint> = curve.iter().step_by(step).collect();
    if let Some(last) = curve.last() {
        if rows.last().map(|p| p.attempts) != Some(last.attempts) {
            rows.push(last);
        }
    }
    rows
}
