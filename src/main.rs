//! dropcalc command-line front end.
//!
//! Usage:
//!   dropcalc calc [OPTIONS]        # probabilities, near-certainty, curve
//!   dropcalc simulate [OPTIONS]    # Monte Carlo check of the same table
//!
//! Examples:
//!   dropcalc calc                                   # starter table, 10 attempts
//!   dropcalc calc -n 50 -i "Dragon Scale:2.5:3"     # custom item, 3 min/attempt
//!   dropcalc calc --file raid.json --json           # request file, JSON out
//!   dropcalc simulate --runs 5000 --seed 42

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dropcalc::calculator::{CalcConfig, CalcRequest, Calculator, SleepLatency};
use dropcalc::core::constants::{
    DEFAULT_ATTEMPTS, DEFAULT_SIM_MAX_ATTEMPTS, DEFAULT_SIM_RUNS, MAX_ATTEMPTS,
};
use dropcalc::items::{LootItem, LootTable};
use dropcalc::odds::JointRule;
use dropcalc::simulator::{run_simulation, SimConfig};
use dropcalc::utils::version_banner;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(about = "Loot drop probability calculator", disable_version_flag = true)]
struct Cli {
    /// Print version and build info
    #[arg(short = 'V', long)]
    version: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute probabilities for a loot table
    Calc {
        /// Number of attempts [default: from --file, else 10]
        #[arg(
            short = 'n',
            long,
            value_parser = clap::value_parser!(u32).range(1..=MAX_ATTEMPTS as i64)
        )]
        attempts: Option<u32>,

        #[command(flatten)]
        source: TableSource,

        /// Near-certainty threshold as a fraction
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Pause like the interactive form before showing results
        #[arg(long)]
        interactive: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate farming the table to check the analytic figures
    Simulate {
        /// Number of simulated sessions
        #[arg(long, default_value_t = DEFAULT_SIM_RUNS)]
        runs: u32,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Attempts per session before giving up
        #[arg(long, default_value_t = DEFAULT_SIM_MAX_ATTEMPTS)]
        max_attempts: u64,

        #[command(flatten)]
        source: TableSource,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct TableSource {
    /// Item as "Name:rarity%:minutes" (repeatable)
    #[arg(short, long = "item")]
    items: Vec<String>,

    /// Read items (and optionally "attempts") from a request JSON file
    #[arg(short, long, conflicts_with = "items")]
    file: Option<PathBuf>,

    /// How rarities combine: union (any item per attempt) or simultaneous
    #[arg(short, long, default_value_t = JointRule::Union)]
    rule: JointRule,
}

/// A request file: the `CalcRequest` shape with `attempts` optional, so a
/// bare table file loads too.
#[derive(Debug, Deserialize)]
struct RequestFile {
    attempts: Option<u32>,
    #[serde(flatten)]
    table: LootTable,
}

fn parse_request_json(json: &str) -> Result<RequestFile> {
    Ok(serde_json::from_str(json)?)
}

fn read_request_file(path: &Path) -> Result<RequestFile> {
    let json = std::fs::read_to_string(path)?;
    parse_request_json(&json)
}

impl TableSource {
    /// The table to run, plus the attempt count if a request file named one.
    fn load(&self) -> Result<(LootTable, Option<u32>)> {
        if let Some(path) = &self.file {
            let request = read_request_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return Ok((request.table, request.attempts));
        }
        if self.items.is_empty() {
            debug!("No items given, using the starter table");
            return Ok((LootTable::default(), None));
        }

        let mut table = LootTable::empty();
        for spec in &self.items {
            let item = parse_item_spec(spec, &table.next_id())?;
            table.add(item)?;
        }
        Ok((table, None))
    }
}

/// `-n` wins over a request file's `attempts`.
fn resolve_attempts(flag: Option<u32>, from_file: Option<u32>) -> u32 {
    flag.or(from_file).unwrap_or(DEFAULT_ATTEMPTS)
}

/// Parses "Name:rarity:time". The name may itself contain ':'.
fn parse_item_spec(spec: &str, id: &str) -> Result<LootItem> {
    let mut parts = spec.rsplitn(3, ':');
    let (time, rarity, name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(time), Some(rarity), Some(name)) => (time, rarity, name),
        _ => bail!("Item '{}' must look like Name:rarity:minutes", spec),
    };
    let rarity: f64 = rarity
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| anyhow!("Bad rarity '{}' in item '{}'", rarity, spec))?;
    let time: f64 = time
        .trim()
        .parse()
        .map_err(|_| anyhow!("Bad time '{}' in item '{}'", time, spec))?;
    Ok(LootItem::new(id, name.trim(), rarity, time)?)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!("{}", version_banner());
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Calc {
        attempts: None,
        source: TableSource {
            items: Vec::new(),
            file: None,
            rule: JointRule::Union,
        },
        threshold: None,
        interactive: false,
        json: false,
    }) {
        Commands::Calc {
            attempts,
            source,
            threshold,
            interactive,
            json,
        } => {
            let (table, file_attempts) = source.load()?;
            let attempts = resolve_attempts(attempts, file_attempts);
            let mut config = if interactive {
                CalcConfig::interactive()
            } else {
                CalcConfig::instant()
            };
            config.joint_rule = source.rule;
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }

            if interactive {
                println!("Calculating...");
            }
            let calculator = Calculator::new(config).with_latency(SleepLatency);
            let report = calculator.evaluate(&CalcRequest { attempts, table })?;

            if json {
                println!("{}", report.to_json());
            } else {
                println!("{}", report.to_text());
            }
        }
        Commands::Simulate {
            runs,
            seed,
            max_attempts,
            source,
            json,
        } => {
            let (table, _) = source.load()?;
            let config = SimConfig {
                num_runs: runs,
                seed,
                max_attempts_per_run: max_attempts,
                joint_rule: source.rule,
                verbosity: cli.verbose.saturating_add(1),
            };
            let report = run_simulation(&config, &table)?;
            if json {
                println!("{}", report.to_json());
            } else {
                println!("{}", report.to_text());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_spec() {
        let item = parse_item_spec("Legendary Sword:5:1.5", "1").unwrap();
        assert_eq!(item.name, "Legendary Sword");
        assert_eq!(item.rarity, 5.0);
        assert_eq!(item.time_per_attempt, 1.5);
    }

    #[test]
    fn test_parse_item_spec_name_with_colon_and_percent() {
        let item = parse_item_spec("Key: Vault 3:0.5%:2", "4").unwrap();
        assert_eq!(item.name, "Key: Vault 3");
        assert_eq!(item.rarity, 0.5);
        assert_eq!(item.id, "4");
    }

    #[test]
    fn test_parse_item_spec_rejects_bad_input() {
        assert!(parse_item_spec("Sword:5", "1").is_err());
        assert!(parse_item_spec("Sword:lots:1", "1").is_err());
        assert!(parse_item_spec("Sword:150:1", "1").is_err());
        assert!(parse_item_spec("Sword:5:0", "1").is_err());
    }

    #[test]
    fn test_cli_parses_calc_flags() {
        let cli = Cli::try_parse_from([
            "dropcalc", "calc", "-n", "25", "-i", "Gem:2:1", "-i", "Ore:40:0.5", "--rule",
            "simultaneous", "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Calc {
                attempts,
                source,
                json,
                ..
            }) => {
                assert_eq!(attempts, Some(25));
                assert!(json);
                assert_eq!(source.rule, JointRule::Simultaneous);
                let (table, file_attempts) = source.load().unwrap();
                assert_eq!(table.len(), 2);
                assert_eq!(table.items[1].id, "2");
                assert_eq!(file_attempts, None);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_cli_bounds_attempt_count() {
        assert!(Cli::try_parse_from(["dropcalc", "calc", "-n", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["dropcalc", "calc", "-n", "0"]).is_err());
        let limit = MAX_ATTEMPTS.to_string();
        assert!(Cli::try_parse_from(["dropcalc", "calc", "-n", limit.as_str()]).is_ok());
        let over = (MAX_ATTEMPTS + 1).to_string();
        assert!(Cli::try_parse_from(["dropcalc", "calc", "-n", over.as_str()]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_commands_and_flags() {
        assert!(Cli::try_parse_from(["dropcalc", "tables"]).is_err());
        assert!(Cli::try_parse_from(["dropcalc", "calc", "--save-report"]).is_err());
        assert!(Cli::try_parse_from(["dropcalc", "calc", "--save-as", "raid"]).is_err());
        assert!(Cli::try_parse_from(["dropcalc", "calc", "--table", "raid"]).is_err());
    }

    #[test]
    fn test_request_file_keeps_attempts() {
        let request = parse_request_json(
            r#"{"attempts":25,"items":[{"id":"1","name":"Cape","rarity":1,"timePerAttempt":2}]}"#,
        )
        .unwrap();
        assert_eq!(request.attempts, Some(25));
        assert_eq!(request.table.len(), 1);
        assert_eq!(request.table.items[0].time_per_attempt, 2.0);
    }

    #[test]
    fn test_bare_table_file_has_no_attempts() {
        let request = parse_request_json(
            r#"{"items":[{"id":"1","name":"Cape","rarity":1,"timePerAttempt":2}]}"#,
        )
        .unwrap();
        assert_eq!(request.attempts, None);
        assert_eq!(request.table.len(), 1);
    }

    #[test]
    fn test_resolve_attempts_precedence() {
        assert_eq!(resolve_attempts(Some(5), Some(25)), 5);
        assert_eq!(resolve_attempts(None, Some(25)), 25);
        assert_eq!(resolve_attempts(None, None), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_request_file_rejects_bad_json() {
        assert!(parse_request_json(r#"{"attempts":"many"}"#).is_err());
        assert!(parse_request_json("not json").is_err());
    }
}
