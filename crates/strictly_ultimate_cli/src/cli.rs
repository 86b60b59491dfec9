//! Command-line interface for the ultimate binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use crate::play::Seat;
use strictly_ultimate::Tier;

/// Strictly Ultimate - ultimate tic-tac-toe rules engine and advisor
#[derive(Parser, Debug)]
#[command(name = "ultimate")]
#[command(about = "Play, simulate, and replay ultimate tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, default_value = "ultimate.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the advisor, or hot seat, on stdin
    Play {
        /// Advisor tier (random, heuristic, minimax)
        #[arg(long)]
        tier: Option<Tier>,

        /// Marks entered by hand (x, o, or both for hot seat)
        #[arg(long, default_value = "x")]
        human: Seat,
    },

    /// Run advisor-vs-advisor games and report the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Tier playing X
        #[arg(long)]
        x_tier: Option<Tier>,

        /// Tier playing O
        #[arg(long)]
        o_tier: Option<Tier>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a JSON array of moves and print the resulting state
    Replay {
        /// Path to the moves file
        path: PathBuf,

        /// Print the state as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of a move
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::parse_from([
            "ultimate", "simulate", "--games", "3", "--x-tier", "minimax", "--seed", "9",
        ]);
        match cli.command {
            Command::Simulate {
                games,
                x_tier,
                o_tier,
                seed,
            } => {
                assert_eq!(games, 3);
                assert_eq!(x_tier, Some(Tier::Minimax));
                assert_eq!(o_tier, None);
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["ultimate", "play"]);
        assert_eq!(cli.config, PathBuf::from("ultimate.toml"));
        assert!(matches!(
            cli.command,
            Command::Play {
                tier: None,
                human: Seat::X
            }
        ));
    }

    #[test]
    fn test_parse_play_hot_seat() {
        let cli = Cli::parse_from(["ultimate", "play", "--human", "both"]);
        assert!(matches!(
            cli.command,
            Command::Play {
                human: Seat::Both,
                ..
            }
        ));
    }
}
