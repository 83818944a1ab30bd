//! Thin CLI surface over `boxsim-core`: a `clap` derive `Cli`/`Commands`
//! pair, one function per subcommand, no simulation logic of its own.
//! `boxsim-cli` depends on `boxsim-core` only.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use boxsim_core::combat::{run_fight, run_fight_with_tunables, Tunables};
use boxsim_core::config::{FightConfigFile, FighterConfigFile};
use boxsim_core::models::events::EventLog;
use boxsim_core::models::fight::{Fight, FightResult, StoppageMethod};

#[derive(Parser)]
#[command(name = "boxsim")]
#[command(about = "Deterministic boxing combat engine and career simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a single bout between two fighter configs.
    Fight {
        /// Path to fighter A's config file (JSON or YAML)
        fighter_a: PathBuf,
        /// Path to fighter B's config file (JSON or YAML)
        fighter_b: PathBuf,
        /// Override scheduled rounds
        #[arg(long)]
        rounds: Option<u8>,
        /// Override the simulation speed multiplier
        #[arg(long)]
        speed: Option<f32>,
        /// Skip real-time pacing and run to completion immediately
        #[arg(long, default_value_t = false)]
        instant: bool,
        /// Seed override (defaults to the fight config's own seed, or 0)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the full event stream, not just the final result
        #[arg(long, default_value_t = false)]
        events: bool,
        /// Print the result (and events, if requested) as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Optional fight config file (JSON or YAML); defaults apply if omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Simulate the same matchup many times and report aggregate outcomes.
    Batch {
        /// Path to fighter A's config file (JSON or YAML)
        fighter_a: PathBuf,
        /// Path to fighter B's config file (JSON or YAML)
        fighter_b: PathBuf,
        /// Override scheduled rounds
        #[arg(long)]
        rounds: Option<u8>,
        /// Override the simulation speed multiplier
        #[arg(long)]
        speed: Option<f32>,
        /// Skip real-time pacing and run to completion immediately
        #[arg(long, default_value_t = false)]
        instant: bool,
        /// Number of bouts to simulate
        #[arg(long, default_value_t = 100)]
        count: u32,
        /// Optional fight config file (JSON or YAML); defaults apply if omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a fighter or fight config file without simulating anything.
    Validate {
        /// Path to the config file (JSON or YAML)
        config: PathBuf,
        /// Treat the file as a fight config instead of a fighter config
        #[arg(long, default_value_t = false)]
        fight: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Fight { fighter_a, fighter_b, rounds, speed, instant, seed, events, json, config } => {
            run_fight_command(fighter_a, fighter_b, rounds, speed, instant, seed, events, json, config)
        }
        Commands::Batch { fighter_a, fighter_b, rounds, speed, instant, count, config } => {
            run_batch_command(fighter_a, fighter_b, rounds, speed, instant, count, config)
        }
        Commands::Validate { config, fight } => run_validate_command(config, fight),
    };

    match outcome {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            if let Some(CliFailure::InvalidInput) = err.downcast_ref::<CliFailure>() {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    }
}

/// Distinguishes "bad arguments/config" (exit 1) from "something broke
/// while running" (exit 2), per the CLI's documented exit codes. Attached
/// to an `anyhow::Error` via `.context()` so `main` can tell them apart
/// without a second error type threading through every function.
#[derive(Debug, thiserror::Error)]
enum CliFailure {
    #[error("invalid input")]
    InvalidInput,
}

fn load_fighter_pair(fighter_a: &std::path::Path, fighter_b: &std::path::Path) -> Result<(boxsim_core::Fighter, boxsim_core::Fighter)> {
    let red = FighterConfigFile::load(fighter_a)
        .with_context(|| format!("loading fighter config {}", fighter_a.display()))
        .map_err(|e| e.context(CliFailure::InvalidInput))?;
    let blue = FighterConfigFile::load(fighter_b)
        .with_context(|| format!("loading fighter config {}", fighter_b.display()))
        .map_err(|e| e.context(CliFailure::InvalidInput))?;
    Ok((red, blue))
}

fn resolve_fight_config(
    config_path: Option<PathBuf>,
    rounds_override: Option<u8>,
    speed_override: Option<f32>,
    instant: bool,
    seed_override: Option<u64>,
) -> Result<boxsim_core::FightConfig> {
    let mut file = match config_path {
        Some(path) => FightConfigFile::load(&path)
            .with_context(|| format!("loading fight config {}", path.display()))
            .map_err(|e| e.context(CliFailure::InvalidInput))?,
        None => FightConfigFile {
            rounds: 12,
            fight_type: boxsim_core::config::fight_config::FightType::MainEvent,
            seed: None,
            simulation: Default::default(),
            rules: Default::default(),
        },
    };

    if let Some(rounds) = rounds_override {
        file.rounds = rounds;
    }
    if let Some(speed) = speed_override {
        file.simulation.speed_multiplier = speed;
    }
    if instant {
        file.simulation.real_time = false;
    }

    file.to_fight_config(seed_override).map_err(|e| anyhow::Error::from(e).context(CliFailure::InvalidInput))
}

fn run_fight_command(
    fighter_a: PathBuf,
    fighter_b: PathBuf,
    rounds: Option<u8>,
    speed: Option<f32>,
    instant: bool,
    seed: Option<u64>,
    print_events: bool,
    as_json: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let (red, blue) = load_fighter_pair(&fighter_a, &fighter_b)?;
    let fight_config = resolve_fight_config(config, rounds, speed, instant, seed)?;
    let fight = Fight { red, blue, config: fight_config };

    log::debug!("running fight {} vs {} (seed {})", fight.red.name, fight.blue.name, fight.config.seed);
    let mut log = EventLog::default();
    let result = run_fight(&fight, &mut log);

    if as_json {
        let result_json = serde_json::to_string_pretty(&result).context("serializing fight result")?;
        println!("{result_json}");
        if print_events {
            let events_json = serde_json::to_string_pretty(&log.events).context("serializing event log")?;
            println!("{events_json}");
        }
        return Ok(());
    }

    print_result(&fight, &result);
    if print_events {
        for event in &log.events {
            println!("{event:?}");
        }
    }

    Ok(())
}

fn run_batch_command(
    fighter_a: PathBuf,
    fighter_b: PathBuf,
    rounds: Option<u8>,
    speed: Option<f32>,
    instant: bool,
    count: u32,
    config: Option<PathBuf>,
) -> Result<()> {
    if count == 0 {
        return Err(anyhow::anyhow!("--count must be at least 1").context(CliFailure::InvalidInput));
    }

    let (red, blue) = load_fighter_pair(&fighter_a, &fighter_b)?;
    let base_config = resolve_fight_config(config, rounds, speed, instant, None)?;

    let mut red_wins = 0u32;
    let mut blue_wins = 0u32;
    let mut draws = 0u32;
    let mut no_contests = 0u32;
    let tunables = Tunables::default();

    for i in 0..count {
        let fight_config = boxsim_core::FightConfig { seed: base_config.seed ^ (i as u64), ..base_config.clone() };
        let fight = Fight { red: red.clone(), blue: blue.clone(), config: fight_config };

        let mut log = EventLog::default();
        let result = run_fight_with_tunables(&fight, &tunables, &mut log);

        match result.method {
            StoppageMethod::NoContest => no_contests += 1,
            StoppageMethod::Draw(_) => draws += 1,
            _ => match &result.winner_id {
                Some(id) if *id == fight.red.id => red_wins += 1,
                Some(id) if *id == fight.blue.id => blue_wins += 1,
                _ => {}
            },
        }
    }

    println!("Batch of {count} bouts: {} vs {}", red.name, blue.name);
    println!("  {} wins: {red_wins} ({:.1}%)", red.name, red_wins as f64 / count as f64 * 100.0);
    println!("  {} wins: {blue_wins} ({:.1}%)", blue.name, blue_wins as f64 / count as f64 * 100.0);
    println!("  draws: {draws}");
    println!("  no contests: {no_contests}");

    Ok(())
}

fn run_validate_command(config: PathBuf, is_fight_config: bool) -> Result<()> {
    if is_fight_config {
        let file = FightConfigFile::load(&config)
            .with_context(|| format!("loading fight config {}", config.display()))
            .map_err(|e| e.context(CliFailure::InvalidInput))?;
        file.to_fight_config(None).map_err(|e| anyhow::Error::from(e).context(CliFailure::InvalidInput))?;
        println!("{} is a valid fight config", config.display());
    } else {
        let fighter = FighterConfigFile::load(&config)
            .with_context(|| format!("loading fighter config {}", config.display()))
            .map_err(|e| e.context(CliFailure::InvalidInput))?;
        println!("{} is a valid fighter config ({})", config.display(), fighter.name);
    }

    Ok(())
}

fn print_result(fight: &Fight, result: &FightResult) {
    let method = match result.method {
        StoppageMethod::Ko => "KO".to_string(),
        StoppageMethod::Tko(reason) => format!("TKO ({reason:?})"),
        StoppageMethod::Decision(kind) => format!("Decision ({kind:?})"),
        StoppageMethod::Draw(kind) => format!("Draw ({kind:?})"),
        StoppageMethod::Disqualification => "Disqualification".to_string(),
        StoppageMethod::NoContest => "No Contest".to_string(),
    };

    println!("{} vs {}", fight.red.name, fight.blue.name);
    println!("  result: {method}, round {}, tick {}", result.ending_round, result.ending_tick);

    match &result.winner_id {
        Some(id) if *id == fight.red.id => println!("  winner: {}", fight.red.name),
        Some(id) if *id == fight.blue.id => println!("  winner: {}", fight.blue.name),
        _ => println!("  no winner recorded"),
    }

    println!("  knockdowns: {} - {}", result.knockdowns_total.0, result.knockdowns_total.1);
}
