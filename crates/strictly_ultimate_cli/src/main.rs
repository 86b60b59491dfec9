//! Strictly Ultimate - command-line caller for the rules engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;
mod replay;
mod simulate;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use play::Seat;
use strictly_ultimate::{Advisor, GameState, Move, Tier};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ultimate");
    config.log_in_effect(&cli.config);

    match cli.command {
        Command::Play { tier, human } => run_play(&config, tier, human),
        Command::Simulate {
            games,
            x_tier,
            o_tier,
            seed,
        } => run_simulate(&config, games, x_tier, o_tier, seed),
        Command::Replay { path, json } => run_replay(&config, path, json),
        Command::Schema => run_schema(),
    }
}

fn advisor_for(seed: Option<u64>) -> Advisor {
    match seed {
        Some(seed) => Advisor::new(seed),
        None => Advisor::from_entropy(),
    }
}

/// Play against the advisor, or hot seat, on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &AppConfig, tier: Option<Tier>, human: Seat) -> Result<()> {
    let mut advisor = advisor_for(*config.seed());
    let tier = tier.unwrap_or(*config.default_tier());
    let state = GameState::with_first_player(*config.first_player());
    let stdin = std::io::stdin();
    play::run(stdin.lock(), std::io::stdout(), &mut advisor, state, human, tier)?;
    Ok(())
}

/// Run advisor-vs-advisor games and print the tally
#[instrument(skip(config))]
fn run_simulate(
    config: &AppConfig,
    games: usize,
    x_tier: Option<Tier>,
    o_tier: Option<Tier>,
    seed: Option<u64>,
) -> Result<()> {
    let mut advisor = advisor_for(seed.or(*config.seed()));
    let tally = simulate::run(
        &mut advisor,
        games,
        *config.first_player(),
        x_tier.unwrap_or(*config.default_tier()),
        o_tier.unwrap_or(*config.default_tier()),
    )?;
    println!("{}", tally);
    Ok(())
}

/// Replay a recorded game and print it
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, path: std::path::PathBuf, json: bool) -> Result<()> {
    let state = replay::load(&path, *config.first_player())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", state);
    }
    Ok(())
}

/// Print the JSON schema callers use to submit moves
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(Move);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
