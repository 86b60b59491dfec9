//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over a single 3x3 grid. The same line test serves both a
//! sub-board and the derived macro board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_cell};

use super::types::{SubBoard, SubBoardOutcome};
use tracing::instrument;

/// Derives the outcome of a sub-board from its cells.
///
/// A completed line takes precedence over a full board.
#[instrument(level = "trace", skip(board))]
pub fn outcome_of(board: &SubBoard) -> SubBoardOutcome {
    if let Some(winner) = check_winner(board) {
        SubBoardOutcome::Won(winner)
    } else if is_full(board) {
        SubBoardOutcome::Drawn
    } else {
        SubBoardOutcome::Undecided
    }
}
