//! Monte Carlo runner: farm the table many times and aggregate.

use super::config::SimConfig;
use super::loot_sim::simulate_run;
use super::report::SimReport;
use crate::core::constants::NEAR_CERTAINTY_THRESHOLD;
use crate::items::LootTable;
use crate::odds::{self, CalcError, CalcResult};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
///
/// The table is validated first; an uncompletable set is still simulated
/// (every run hits the cap) so the report can show it.
pub fn run_simulation(config: &SimConfig, table: &LootTable) -> CalcResult<SimReport> {
    table.validate()?;

    let analytic = match odds::attempts_for_near_certainty_with(
        config.joint_rule,
        &table.rarities(),
        NEAR_CERTAINTY_THRESHOLD,
    ) {
        Ok(n) => Some(n),
        Err(CalcError::DegenerateComputation) => {
            warn!("Every run will hit the cap: the set can never be completed");
            None
        }
        Err(e) => return Err(e),
    };

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_run(
            &table.items,
            config.joint_rule,
            config.max_attempts_per_run,
            &mut rng,
        );

        if config.verbosity >= 2 {
            debug!(
                "Run {}/{} - completed at {:?} after {} attempts",
                run_idx + 1,
                config.num_runs,
                run.completed_at,
                run.attempts_rolled
            );
        }
        all_runs.push(run);
    }

    let labels: Vec<(String, f64)> = table
        .items
        .iter()
        .map(|item| (item.name.clone(), item.rarity))
        .collect();
    let report = SimReport::from_runs(all_runs, &labels, config.joint_rule, analytic);

    if config.verbosity >= 1 {
        info!(
            "Simulated {} runs: {} completed, avg {:?} attempts",
            report.num_runs, report.runs_completed, report.avg_attempts_to_complete
        );
    }

    Ok(report)
}
