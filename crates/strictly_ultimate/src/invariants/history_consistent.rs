//! History consistency invariant: the board is exactly the recorded moves.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: occupied cells and move history agree.
///
/// Every recorded move's cell holds that move's mark, and no other cell is
/// occupied.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if state.board().occupied_count() != state.history().len() {
            return false;
        }
        state.history().iter().all(|mv| {
            match (state.board().sub_board(mv.sub_board), mv.cell()) {
                (Some(board), Some(cell)) => board.get(cell) == Square::Occupied(mv.mark),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Occupied cells match the move history"
    }
}
