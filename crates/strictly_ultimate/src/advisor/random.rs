//! Uniformly random play.

use super::super::{GameState, Move};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a candidate sub-board uniformly, then one of its empty cells uniformly.
pub(super) fn select<R: Rng>(
    state: &GameState,
    candidates: &[usize],
    rng: &mut R,
) -> Option<Move> {
    let &index = candidates.choose(rng)?;
    let board = state.board().sub_board(index)?;
    let &cell = board.empty_positions().choose(rng)?;
    Some(Move::at(index, cell, state.current_player()))
}
