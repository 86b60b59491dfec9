//! The authoritative per-match game state.

use super::action::{IllegalMoveError, Move};
use super::engine;
use super::types::{Mark, SubBoardOutcome, UltimateBoard};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which sub-board the next mover may play in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveBoard {
    /// Any undecided sub-board.
    #[default]
    Free,
    /// Only this sub-board (0-8).
    Forced(usize),
}

impl ActiveBoard {
    /// The forced index, if any.
    pub fn forced(self) -> Option<usize> {
        match self {
            ActiveBoard::Free => None,
            ActiveBoard::Forced(index) => Some(index),
        }
    }
}

/// Current status of the game, derived from the terminal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line on the macro board.
    Won(Mark),
    /// Every sub-board decided with no macro line.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "Player {} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state for one match.
///
/// Created empty, mutated only through [`engine::apply`], and frozen once
/// terminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: UltimateBoard,
    pub(crate) active: ActiveBoard,
    pub(crate) current_player: Mark,
    pub(crate) first_player: Mark,
    pub(crate) overall_winner: Option<Mark>,
    pub(crate) terminated: bool,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self::with_first_player(Mark::X)
    }

    /// Creates a new game with the given first mover.
    #[instrument]
    pub fn with_first_player(first_player: Mark) -> Self {
        Self {
            board: UltimateBoard::new(),
            active: ActiveBoard::Free,
            current_player: first_player,
            first_player,
            overall_winner: None,
            terminated: false,
            history: Vec::new(),
        }
    }

    /// Replays moves from a fresh game.
    ///
    /// Stops at the first illegal move and returns its rejection.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Mark, moves: &[Move]) -> Result<Self, IllegalMoveError> {
        let mut state = Self::with_first_player(first_player);
        for mv in moves {
            engine::apply(&mut state, *mv)?;
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &UltimateBoard {
        &self.board
    }

    /// Returns the sub-board constraint for the next move.
    pub fn active_board(&self) -> ActiveBoard {
        self.active
    }

    /// Returns the mark expected to move next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the mark that opened the game.
    pub fn first_player(&self) -> Mark {
        self.first_player
    }

    /// Returns the winner of the macro board, if any.
    pub fn overall_winner(&self) -> Option<Mark> {
        self.overall_winner
    }

    /// True once the game is won or fully drawn.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the last accepted move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Outcome of the sub-board at `index`.
    pub fn outcome(&self, index: usize) -> SubBoardOutcome {
        self.board.outcome(index)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.terminated, self.overall_winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(mark)) => GameStatus::Won(mark),
            (true, None) => GameStatus::Draw,
        }
    }

    /// Indices of sub-boards the next mover may play in.
    ///
    /// Empty once the game is terminated.
    pub fn playable_boards(&self) -> Vec<usize> {
        if self.terminated {
            return Vec::new();
        }
        match self.active {
            ActiveBoard::Forced(index) => {
                if self.board.outcome(index).is_decided() {
                    Vec::new()
                } else {
                    vec![index]
                }
            }
            ActiveBoard::Free => (0..9)
                .filter(|&i| !self.board.outcome(i).is_decided())
                .collect(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.status() {
            GameStatus::InProgress => {
                let target = match self.active {
                    ActiveBoard::Free => "any board".to_string(),
                    ActiveBoard::Forced(index) => format!("board {}", index),
                };
                write!(f, "{} to move on {}", self.current_player, target)
            }
            status => write!(f, "{}", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_open() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.active_board(), ActiveBoard::Free);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.playable_boards(), (0..9).collect::<Vec<_>>());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_first_player_o() {
        let state = GameState::with_first_player(Mark::O);
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.first_player(), Mark::O);
    }

    #[test]
    fn test_display_reports_turn() {
        let state = GameState::new();
        assert!(state.to_string().ends_with("X to move on any board"));
    }
}
