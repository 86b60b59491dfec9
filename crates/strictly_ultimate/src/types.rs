//! Core domain types for ultimate tic-tac-toe.

use super::position::Position;
use super::rules;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X (moves first by default).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the nine inner 3x3 boards.
///
/// Cells are only written by the engine and never revert to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl SubBoard {
    /// Creates an empty sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a mark. Callers are responsible for checking emptiness.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Derived outcome of this sub-board.
    pub fn outcome(&self) -> SubBoardOutcome {
        rules::outcome_of(self)
    }
}

/// Outcome of a sub-board, always derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubBoardOutcome {
    /// Still playable.
    Undecided,
    /// Three in a line for this mark.
    Won(Mark),
    /// Full with no line.
    Drawn,
}

impl SubBoardOutcome {
    /// True once the sub-board is won or drawn.
    pub fn is_decided(self) -> bool {
        !matches!(self, SubBoardOutcome::Undecided)
    }

    /// The mark this outcome contributes to the macro board.
    pub fn as_mark(self) -> Option<Mark> {
        match self {
            SubBoardOutcome::Won(mark) => Some(mark),
            SubBoardOutcome::Undecided | SubBoardOutcome::Drawn => None,
        }
    }
}

/// The nine sub-boards, indexed 0-8 in row-major order over the macro grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UltimateBoard {
    boards: [SubBoard; 9],
}

impl UltimateBoard {
    /// Creates a board with nine empty sub-boards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sub-board at `index`, or `None` when out of range.
    pub fn sub_board(&self, index: usize) -> Option<&SubBoard> {
        self.boards.get(index)
    }

    pub(crate) fn sub_board_mut(&mut self, index: usize) -> &mut SubBoard {
        &mut self.boards[index]
    }

    /// All sub-boards in index order.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Outcome of the sub-board at `index`.
    ///
    /// Out-of-range indices read as undecided.
    pub fn outcome(&self, index: usize) -> SubBoardOutcome {
        self.sub_board(index)
            .map(SubBoard::outcome)
            .unwrap_or(SubBoardOutcome::Undecided)
    }

    /// Outcomes of every sub-board in index order.
    pub fn outcomes(&self) -> [SubBoardOutcome; 9] {
        std::array::from_fn(|i| self.boards[i].outcome())
    }

    /// Macro grid of sub-board winners. Drawn and undecided boards read as empty.
    pub fn macro_board(&self) -> SubBoard {
        let outcomes = self.outcomes();
        SubBoard {
            squares: std::array::from_fn(|i| match outcomes[i].as_mark() {
                Some(mark) => Square::Occupied(mark),
                None => Square::Empty,
            }),
        }
    }

    /// True when every sub-board is won or drawn.
    pub fn all_decided(&self) -> bool {
        self.outcomes().iter().all(|o| o.is_decided())
    }

    /// Number of occupied cells across all sub-boards.
    pub fn occupied_count(&self) -> usize {
        self.boards
            .iter()
            .flat_map(|b| b.squares().iter())
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Formats the board as a 9x9 grid.
    ///
    /// Empty cells print as `.`, decided sub-boards are not specially marked.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for global_row in 0..9 {
            if global_row > 0 && global_row % 3 == 0 {
                result.push_str("------+-------+------\n");
            }
            for global_col in 0..9 {
                if global_col > 0 && global_col % 3 == 0 {
                    result.push_str("| ");
                }
                let board = (global_row / 3) * 3 + global_col / 3;
                let cell = (global_row % 3) * 3 + global_col % 3;
                let symbol = match self.boards[board].squares[cell] {
                    Square::Empty => '.',
                    Square::Occupied(Mark::X) => 'X',
                    Square::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if global_col < 8 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        result
    }
}

impl std::fmt::Display for UltimateBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
