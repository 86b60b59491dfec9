//! First-class action types for ultimate tic-tac-toe.
//!
//! A move is a submitted intent, not a stored entity. It is validated against
//! a [`GameState`](crate::GameState) and then either applied or rejected.

use super::{Mark, Position};
use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a cell of a sub-board.
///
/// Coordinates are kept as raw integers so that out-of-range submissions can
/// be represented and rejected with a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// Target sub-board (0-8, row-major over the macro grid).
    pub sub_board: usize,
    /// Row within the sub-board (0-2).
    pub row: usize,
    /// Column within the sub-board (0-2).
    pub col: usize,
    /// The mover's mark.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(sub_board: usize, row: usize, col: usize, mark: Mark) -> Self {
        Self {
            sub_board,
            row,
            col,
            mark,
        }
    }

    /// Creates a move from a sub-board index and a cell position.
    pub fn at(sub_board: usize, cell: Position, mark: Mark) -> Self {
        Self::new(sub_board, cell.row(), cell.col(), mark)
    }

    /// Creates a move from global 9x9 coordinates.
    ///
    /// Returns `None` when either coordinate is outside 0-8.
    #[instrument]
    pub fn from_global(row: usize, col: usize, mark: Mark) -> Option<Self> {
        if row > 8 || col > 8 {
            return None;
        }
        Some(Self::new((row / 3) * 3 + col / 3, row % 3, col % 3, mark))
    }

    /// Global 9x9 coordinates of this move.
    pub fn to_global(&self) -> (usize, usize) {
        (
            (self.sub_board / 3) * 3 + self.row,
            (self.sub_board % 3) * 3 + self.col,
        )
    }

    /// The target cell, if the coordinates are in range.
    pub fn cell(&self) -> Option<Position> {
        Position::from_row_col(self.row, self.col)
    }

    /// Macro index the opponent is sent to (`row * 3 + col`).
    pub fn target(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> board {} ({}, {})",
            self.mark, self.sub_board, self.row, self.col
        )
    }
}

/// Which legality constraint a move failed.
///
/// The kebab-case code (`reason.to_string()`) is stable and meant for
/// transport layers to map onto their own responses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum IllegalMoveReason {
    /// Sub-board, row, or column outside its range.
    OutOfRangeIndex,
    /// The target cell already holds a mark.
    CellOccupied,
    /// The target sub-board is already won or drawn.
    BoardAlreadyDecided,
    /// The mover is forced to a different sub-board.
    WrongBoardForced,
    /// The game has already ended.
    GameAlreadyTerminated,
}

/// A move that the rules engine rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Illegal move {mv}: {reason}")]
pub struct IllegalMoveError {
    /// Which constraint failed.
    pub reason: IllegalMoveReason,
    /// The rejected move.
    pub mv: Move,
}

impl IllegalMoveError {
    /// Creates a new rejection.
    pub fn new(reason: IllegalMoveReason, mv: Move) -> Self {
        Self { reason, mv }
    }

    /// Returns the failed constraint.
    pub fn reason(&self) -> IllegalMoveReason {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_coordinates() {
        let mv = Move::from_global(4, 7, Mark::X).expect("in range");
        assert_eq!(mv, Move::new(5, 1, 1, Mark::X));
        assert_eq!(mv.to_global(), (4, 7));
        assert_eq!(Move::from_global(9, 0, Mark::O), None);
        assert_eq!(Move::from_global(0, 9, Mark::O), None);
    }

    #[test]
    fn test_target_uses_cell_coordinates() {
        assert_eq!(Move::new(0, 2, 1, Mark::X).target(), 7);
        assert_eq!(Move::at(3, Position::Center, Mark::O).target(), 4);
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(IllegalMoveReason::OutOfRangeIndex.to_string(), "out-of-range-index");
        assert_eq!(IllegalMoveReason::WrongBoardForced.to_string(), "wrong-board-forced");
        assert_eq!(
            "game-already-terminated".parse::<IllegalMoveReason>(),
            Ok(IllegalMoveReason::GameAlreadyTerminated)
        );
    }

    #[test]
    fn test_error_display_names_reason() {
        let err = IllegalMoveError::new(
            IllegalMoveReason::CellOccupied,
            Move::new(0, 0, 0, Mark::O),
        );
        assert!(err.to_string().contains("cell-occupied"));
    }
}
