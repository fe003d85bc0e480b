//! idle_sim - Headless driver for the idle engine
//!
//! Opens (or creates) a save directory, credits offline progress, runs a
//! number of combat ticks with a seeded RNG and prints the event log.
//!
//! ```text
//! idle_sim [--ticks N] [--seed S] [--save-dir DIR] [--config FILE]
//! ```

mod simulation;

use anyhow::{Context, Result};
use clap::Parser;
use idle_core::config::load_constants;
use idle_core::{FileStore, GameConstants, GameSession, SystemClock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::RunSummary;
use std::path::PathBuf;

/// Run the idle engine headless against a save directory
#[derive(Parser)]
#[command(name = "idle_sim")]
#[command(version, long_about = None)]
struct Args {
    /// Combat ticks to run
    #[arg(long, default_value_t = 1_000)]
    ticks: u64,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory holding the JSON save files
    #[arg(long, default_value = "saves")]
    save_dir: PathBuf,

    /// TOML file overriding the balance constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    setup_logging();
    let options = Args::parse();

    let constants = match &options.config {
        Some(path) => load_constants(path)
            .with_context(|| format!("failed to load constants from {}", path.display()))?,
        None => GameConstants::default(),
    };
    let store = FileStore::new(&options.save_dir)
        .with_context(|| format!("failed to open save directory {}", options.save_dir.display()))?;

    let mut session = GameSession::open(
        Box::new(store),
        Box::new(SystemClock),
        constants,
        ChaCha8Rng::seed_from_u64(options.seed),
    );
    tracing::info!(ticks = options.ticks, seed = options.seed, "running simulation");

    let mut summary = RunSummary::default();
    for _ in 0..options.ticks {
        let report = session.tick();
        summary.record(&report);
        summary.floating_texts += session.drain_floating().len() as u64;
    }
    session.save().context("failed to write final save")?;

    let mut entries: Vec<_> = session.events().entries().collect();
    entries.reverse();
    for entry in entries {
        println!("[{:?}] {}", entry.kind, entry.message);
    }

    let player = session.player();
    let floor = session.floor();
    println!();
    for unit in session.scheduler().allies() {
        println!(
            "{:<12} Lv{:<3} HP {:>5.0}/{:<5.0} ({:.0}%)",
            unit.name,
            unit.level,
            unit.current_hp,
            unit.max_hp,
            unit.hp_fraction() * 100.0
        );
    }
    println!(
        "Level {} | Gold {} | Stones {} | Floor {} (best {})",
        player.level, player.gold, player.enchant_stones, floor.current, floor.highest
    );
    println!(
        "Ticks {} | Encounters {} | Won {} | Lost {} | Bosses {} | Win rate {:.1}%",
        summary.ticks,
        summary.encounters,
        summary.victories,
        summary.defeats,
        summary.bosses,
        summary.win_rate() * 100.0
    );
    println!(
        "Damage dealt {} | taken {} | Crits {} | Dodges {} | Items kept {} | auto-sold {} | Floating texts {}",
        summary.damage_dealt,
        summary.damage_taken,
        summary.crits,
        summary.dodges,
        summary.items_kept,
        summary.items_sold,
        summary.floating_texts
    );
    Ok(())
}
