//! Line detection for a 3x3 grid.

use super::super::{Mark, Position, SubBoard, Square};
use tracing::instrument;

/// The eight lines of a 3x3 grid: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the grid.
///
/// Returns `Some(mark)` if the mark has three in a line,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &SubBoard) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

/// Finds a cell that would complete a line for `mark`.
///
/// A line qualifies when it holds two of `mark` and one empty cell. Lines are
/// scanned in [`LINES`] order and the first qualifying cell is returned.
#[instrument(level = "trace", skip(board))]
pub fn winning_cell(board: &SubBoard, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(mark))
            .count();
        let empty: Vec<Position> = line
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        match (owned, empty.as_slice()) {
            (2, [cell]) => Some(*cell),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = SubBoard::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = SubBoard::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = SubBoard::new();
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = SubBoard::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_cell_in_row() {
        let mut board = SubBoard::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        assert_eq!(winning_cell(&board, Mark::X), Some(Position::TopRight));
        assert_eq!(winning_cell(&board, Mark::O), None);
    }

    #[test]
    fn test_winning_cell_blocked_line() {
        let mut board = SubBoard::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert_eq!(winning_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_winning_cell_diagonal_gap() {
        let mut board = SubBoard::new();
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        assert_eq!(winning_cell(&board, Mark::O), Some(Position::Center));
    }
}
