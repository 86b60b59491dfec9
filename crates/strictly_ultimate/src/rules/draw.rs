//! Fullness check for a 3x3 grid.

use super::super::{SubBoard, Square};
use tracing::instrument;

/// Checks if the grid is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &SubBoard) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
