//! Advisor-vs-advisor simulation.

use anyhow::Result;
use derive_getters::Getters;
use strictly_ultimate::{Advisor, GameState, GameStatus, Mark, Tier, engine};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games won by X.
    x_wins: usize,
    /// Games won by O.
    o_wins: usize,
    /// Games drawn.
    draws: usize,
    /// Moves played across all games.
    moves: usize,
}

impl Tally {
    fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
        self.moves += state.history().len();
    }

    /// Number of finished games.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X {} / O {} / draw {} ({} moves)",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws,
            self.moves
        )
    }
}

/// Plays one game to completion, each mark using its own tier.
pub fn play_game(
    advisor: &mut Advisor,
    first_player: Mark,
    x_tier: Tier,
    o_tier: Tier,
) -> Result<GameState> {
    let mut state = GameState::with_first_player(first_player);
    while !state.is_terminated() {
        let tier = match state.current_player() {
            Mark::X => x_tier,
            Mark::O => o_tier,
        };
        let mv = advisor.select_move(&state, tier)?;
        engine::apply(&mut state, mv)?;
    }
    debug!(status = %state.status(), moves = state.history().len(), "Game finished");
    Ok(state)
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(advisor))]
pub fn run(
    advisor: &mut Advisor,
    games: usize,
    first_player: Mark,
    x_tier: Tier,
    o_tier: Tier,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..games {
        let state = play_game(advisor, first_player, x_tier, o_tier)?;
        tally.record(&state);
    }
    info!(%tally, "Simulation complete");
    Ok(tally)
}
