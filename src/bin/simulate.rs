//! Headless simulator CLI.
//!
//! Plays seeded sessions with a scripted strategy and prints averages.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100 idle runs
//!   cargo run --bin simulate -- --strategy dodge -n 20
//!   cargo run --bin simulate -- --seed 42 --ticks 7200

use anyhow::Context;
use clap::Parser;
use pigeon_dodge::simulator::{run_simulation, SimConfig, Strategy};
use pigeon_dodge::GameConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Run headless Pigeon Dodge sessions")]
struct Cli {
    /// Number of sessions to play
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Tick budget per session
    #[arg(short, long, default_value_t = 36_000)]
    ticks: u64,

    /// Base RNG seed (run i uses seed + i)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scripted input strategy
    #[arg(long, value_enum, default_value_t = Strategy::Idle)]
    strategy: Strategy,

    /// TOML game config
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let game = GameConfig::load_or_default(cli.config.as_deref())
        .context("failed to load game config")?;
    let sim = SimConfig {
        num_runs: cli.runs,
        seed: cli.seed,
        max_ticks_per_run: cli.ticks,
        strategy: cli.strategy,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              PIGEON DODGE SIMULATOR                           ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", sim.num_runs);
    println!("  Max Ticks:      {}", sim.max_ticks_per_run);
    println!("  Strategy:       {:?}", sim.strategy);
    if let Some(seed) = sim.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&sim, &game).context("simulation failed")?;
    println!("{}", report.to_text());
    Ok(())
}
