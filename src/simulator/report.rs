//! Simulation report generation.

use super::loot_sim::RunStats;
use crate::odds::JointRule;
use serde::Serialize;

/// Empirical first-drop figures for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDropStats {
    pub name: String,
    pub rarity: f64,
    /// Share of runs in which the item dropped at all (percent)
    pub seen_rate: f64,
    /// Mean attempt of the first drop, over runs where it dropped
    pub avg_first_drop: Option<f64>,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_capped: u32,
    pub joint_rule: JointRule,

    pub avg_attempts_to_complete: Option<f64>,
    pub median_attempts_to_complete: Option<u64>,
    pub max_attempts_to_complete: Option<u64>,

    pub items: Vec<ItemDropStats>,

    /// Analytic attempts for near-certainty, if the set is completable
    pub analytic_attempts_needed: Option<u64>,
    /// Share of runs finished within the analytic count (percent)
    pub empirical_rate_at_analytic: Option<f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(
        runs: Vec<RunStats>,
        item_labels: &[(String, f64)],
        joint_rule: JointRule,
        analytic_attempts_needed: Option<u64>,
    ) -> Self {
        let num_runs = runs.len() as u32;
        let mut completions: Vec<u64> = runs.iter().filter_map(|r| r.completed_at).collect();
        completions.sort_unstable();
        let runs_completed = completions.len() as u32;

        let avg_attempts_to_complete = (!completions.is_empty())
            .then(|| completions.iter().sum::<u64>() as f64 / completions.len() as f64);
        let median_attempts_to_complete = completions.get(completions.len() / 2).copied();
        let max_attempts_to_complete = completions.last().copied();

        let items = item_labels
            .iter()
            .enumerate()
            .map(|(idx, (name, rarity))| {
                let firsts: Vec<u64> = runs
                    .iter()
                    .filter_map(|r| r.first_drops.get(idx).copied().flatten())
                    .collect();
                ItemDropStats {
                    name: name.clone(),
                    rarity: *rarity,
                    seen_rate: percent_of(firsts.len(), runs.len()),
                    avg_first_drop: (!firsts.is_empty())
                        .then(|| firsts.iter().sum::<u64>() as f64 / firsts.len() as f64),
                }
            })
            .collect();

        let mut report = Self {
            num_runs,
            runs_completed,
            runs_capped: num_runs - runs_completed,
            joint_rule,
            avg_attempts_to_complete,
            median_attempts_to_complete,
            max_attempts_to_complete,
            items,
            analytic_attempts_needed,
            empirical_rate_at_analytic: None,
            run_stats: runs,
        };
        report.empirical_rate_at_analytic =
            analytic_attempts_needed.map(|n| report.completion_rate_within(n));
        report
    }

    /// Percent of runs that completed the set in `attempts` or fewer.
    pub fn completion_rate_within(&self, attempts: u64) -> f64 {
        let done = self
            .run_stats
            .iter()
            .filter(|r| r.completed_at.is_some_and(|at| at <= attempts))
            .count();
        percent_of(done, self.run_stats.len())
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    DROP SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} hit the attempt cap ({} rule)\n\n",
            self.num_runs, self.runs_completed, self.runs_capped, self.joint_rule
        ));

        report.push_str("── ATTEMPTS TO COMPLETE ─────────────────────────────────────────\n");
        match (
            self.avg_attempts_to_complete,
            self.median_attempts_to_complete,
            self.max_attempts_to_complete,
        ) {
            (Some(avg), Some(median), Some(max)) => {
                report.push_str(&format!("  Average: {:.2}\n", avg));
                report.push_str(&format!("  Median:  {}\n", median));
                report.push_str(&format!("  Worst:   {}\n\n", max));
            }
            _ => report.push_str("  No run completed the set.\n\n"),
        }

        report.push_str("── ITEMS ────────────────────────────────────────────────────────\n");
        for item in &self.items {
            let first = item
                .avg_first_drop
                .map(|a| format!("{:.1}", a))
                .unwrap_or_else(|| "-".to_string());
            report.push_str(&format!(
                "  {:<24} {:>6.2}%  seen in {:>6.2}% of runs, first drop ~{}\n",
                item.name, item.rarity, item.seen_rate, first
            ));
        }
        report.push('\n');

        report.push_str("── ANALYTIC CHECK ───────────────────────────────────────────────\n");
        match (self.analytic_attempts_needed, self.empirical_rate_at_analytic) {
            (Some(n), Some(rate)) => {
                report.push_str(&format!(
                    "  Analytic near-certainty: {} attempts\n  Runs done by then:       {:.2}%\n",
                    n, rate
                ));
                if rate < 99.0 && self.num_runs >= 1000 {
                    report.push_str("  ⚠️  Empirical rate well below the analytic target\n");
                }
            }
            _ => report.push_str("  Set can never be completed analytically.\n"),
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
