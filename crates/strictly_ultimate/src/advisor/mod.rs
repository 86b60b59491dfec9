//! Move advisor: synthetic players of increasing strength.
//!
//! The advisor reads a [`GameState`] and proposes a [`Move`]. It never
//! mutates the state; callers route the proposal through
//! [`engine::apply`](crate::engine::apply) like any other move.

mod heuristic;
mod minimax;
mod random;

pub use minimax::minimax_score;

use super::action::Move;
use super::state::GameState;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Advisor strength level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Uniformly random legal move.
    Random,
    /// One-ply win, block, center, corner.
    #[default]
    Heuristic,
    /// Single sub-board minimax.
    Minimax,
}

/// The advisor was asked to move in a state with no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum NoLegalMoveError {
    /// The game has already ended.
    #[display("No legal move: game already terminated")]
    GameTerminated,
    /// No undecided sub-board is reachable under the active constraint.
    #[display("No legal move: no playable sub-board")]
    NoPlayableBoard,
}

/// Sub-boards the mover may choose from, in ascending order.
///
/// Same as [`GameState::playable_boards`]: empty once the game is over or
/// when the forced board is already decided.
pub fn candidate_boards(state: &GameState) -> Vec<usize> {
    state.playable_boards()
}

/// A move advisor with its own deterministic random stream.
///
/// Holds no game state, so one advisor can serve any number of matches as
/// long as calls are not concurrent.
#[derive(Debug, Clone)]
pub struct Advisor {
    rng: ChaCha8Rng,
}

impl Advisor {
    /// Creates an advisor whose random choices are reproducible from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates an advisor seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Proposes a legal move for `state.current_player()`.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoveError`] if the game is over or no candidate
    /// sub-board is playable.
    #[instrument(skip(self, state), fields(mover = %state.current_player()))]
    pub fn select_move(
        &mut self,
        state: &GameState,
        tier: Tier,
    ) -> Result<Move, NoLegalMoveError> {
        if state.is_terminated() {
            return Err(NoLegalMoveError::GameTerminated);
        }
        let candidates = candidate_boards(state);
        if candidates.is_empty() {
            return Err(NoLegalMoveError::NoPlayableBoard);
        }

        let mv = match tier {
            Tier::Random => random::select(state, &candidates, &mut self.rng),
            Tier::Heuristic => heuristic::select(state, &candidates, &mut self.rng),
            Tier::Minimax => minimax::select(state, &candidates, &mut self.rng),
        }
        .ok_or(NoLegalMoveError::NoPlayableBoard)?;

        debug!(%tier, %mv, "Advisor selected move");
        Ok(mv)
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Proposes a move using a freshly seeded advisor.
pub fn select_move(state: &GameState, tier: Tier) -> Result<Move, NoLegalMoveError> {
    Advisor::from_entropy().select_move(state, tier)
}
