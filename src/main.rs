//! `portfolio-engine`: play against an arbiter on stdin/stdout, or run
//! seeded local simulations.
//!
//! Logs go to stderr; stdout carries the protocol in `play` mode.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rust_portfolio::{EngineConfig, EngineError, GameLoop, GameOutcome, LineArbiter, SimConfig, SimulatedArbiter};

#[derive(Parser)]
#[command(name = "portfolio-engine", about = "Greedy project/card portfolio engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file with engine settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Per-project density cutoff for cancel decisions.
    #[arg(long = "low-value-threshold", global = true)]
    low_value_threshold: Option<f64>,

    /// Per-project share of the aggregate density cutoff.
    #[arg(long = "aggregate-ratio", global = true)]
    aggregate_ratio: Option<f64>,

    /// Investment level cap.
    #[arg(long = "max-invest-level", global = true)]
    max_invest_level: Option<u32>,

    /// Do not emit `# ` comment lines.
    #[arg(long = "no-comments", global = true)]
    no_comments: bool,

    /// Write the per-turn history as JSON.
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game on stdin/stdout (default).
    Play,
    /// Play seeded games against the local simulator.
    Simulate {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long = "hand-size", default_value_t = 5)]
        hand_size: usize,
        #[arg(long, default_value_t = 5)]
        projects: usize,
        #[arg(long, default_value_t = 4)]
        offers: usize,
        #[arg(long, default_value_t = 1000)]
        turns: u32,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("encoding record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Serialize)]
struct SimulatedGame {
    seed: u64,
    score: i64,
    invest_level: u32,
    min_money: Option<i64>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn engine_config(cli: &Cli) -> Result<EngineConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| CliError::Parse {
                path: path.clone(),
                source,
            })?
        }
        None => EngineConfig::default(),
    };

    if let Some(threshold) = cli.low_value_threshold {
        config = config.with_low_value_threshold(threshold);
    }
    if let Some(ratio) = cli.aggregate_ratio {
        config = config.with_low_value_aggregate_ratio(ratio);
    }
    if let Some(cap) = cli.max_invest_level {
        config = config.with_max_invest_level(cap);
    }
    if cli.no_comments {
        config = config.with_comments(false);
    }
    Ok(config)
}

fn write_record<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn play(cli: &Cli, config: EngineConfig) -> Result<(), CliError> {
    let mut game = GameLoop::new(LineArbiter::stdio(), config).with_history(cli.record.is_some());
    let outcome = game.run()?;

    eprintln!("score:{}", outcome.score);
    if let Some(path) = &cli.record {
        write_record(path, &outcome)?;
    }
    Ok(())
}

fn simulate(cli: &Cli, config: EngineConfig, sim: SimConfig, games: u32) -> Result<(), CliError> {
    let mut outcomes: Vec<GameOutcome> = Vec::new();
    let mut total = 0i64;

    for game_index in 0..u64::from(games) {
        let seed = sim.seed.wrapping_add(game_index);
        let arbiter = SimulatedArbiter::new(sim.clone().with_seed(seed));
        let outcome = GameLoop::new(arbiter, config.clone())
            .with_history(true)
            .run()?;

        let summary = SimulatedGame {
            seed,
            score: outcome.score,
            invest_level: outcome.final_invest_level,
            min_money: outcome.min_money(),
        };
        println!("{}", serde_json::to_string(&summary)?);

        total += outcome.score;
        if cli.record.is_some() {
            outcomes.push(outcome);
        }
    }

    if games > 0 {
        info!(games, mean_score = total / i64::from(games), "simulation finished");
    }
    if let Some(path) = &cli.record {
        write_record(path, &outcomes)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = engine_config(cli)?;
    match &cli.command {
        None | Some(Command::Play) => play(cli, config),
        Some(Command::Simulate {
            seed,
            games,
            hand_size,
            projects,
            offers,
            turns,
        }) => {
            let sim = SimConfig::new()
                .with_seed(*seed)
                .with_hand_size(*hand_size)
                .with_project_count(*projects)
                .with_offer_count(*offers)
                .with_turns(*turns)
                .with_max_invest_level(config.max_invest_level);
            simulate(cli, config, sim, *games)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
