use std::path::PathBuf;

use clap::Parser;

use kaiser_bench::config::{BenchConfig, ResolvedOutputs};
use kaiser_bench::logging::init_logging;
use kaiser_bench::selfplay::SelfPlayRunner;

/// Self-play harness for the Kaiser rules engine.
#[derive(Debug, Parser)]
#[command(
    name = "kaiser-bench",
    author,
    version,
    about = "Deterministic Kaiser self-play harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "bench/bench.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of matches to play.
    #[arg(long, value_name = "MATCHES")]
    matches: Option<usize>,

    /// Override the RNG seed for shuffling and player choices.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Exit after validating the configuration (no matches are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = BenchConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(matches) = cli.matches {
        config.deals.matches = matches;
    }

    if let Some(seed) = cli.seed {
        config.deals.seed = Some(seed);
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let run_id = config.run_id.clone();
    let matches = config.deals.matches;

    println!(
        "Loaded configuration '{run_id}' ({matches} match{}, passing {})",
        if matches == 1 { "" } else { "es" },
        if config.rules.pass_card { "on" } else { "off" }
    );

    if cli.validate_only {
        println!("Validation-only mode: self-play skipped.");
        return Ok(());
    }

    let logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = SelfPlayRunner::new(config, outputs);
    let summary = runner.run()?;

    println!(
        "Self-play complete for '{run_id}': {} matches → {} hand rows at {}",
        summary.matches_played,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    println!(
        "Team wins: 0/2 {}, 1/3 {}, undecided {}",
        summary.stats.wins[0], summary.stats.wins[1], summary.stats.undecided
    );
    println!("Summary table: {}", summary.summary_path.display());
    if let Some(guard) = logging_guard.as_ref() {
        println!("Event log: {}", guard.events_path.display());
    }

    Ok(())
}
