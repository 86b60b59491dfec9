//! Replaying recorded games from JSON.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_ultimate::{GameState, Mark, Move};
use tracing::instrument;

/// Reads a JSON array of moves and replays it from a fresh game.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>, first_player: Mark) -> Result<GameState> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let moves: Vec<Move> = serde_json::from_str(&content).context("Failed to parse moves")?;
    let state = GameState::replay(first_player, &moves)?;
    Ok(state)
}
