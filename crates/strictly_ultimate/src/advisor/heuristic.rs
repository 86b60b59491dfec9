//! One-ply tactical play: win, block, center, corner.

use super::super::{GameState, Move, Position, rules};
use super::random;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Picks the first applicable rule, scanning candidates in the given order.
///
/// 1. A cell completing a line for the mover, on any candidate.
/// 2. A cell completing a line for the opponent (a block), on any candidate.
/// 3. The center of the first candidate where it is empty.
/// 4. A random open corner of the first candidate with one open.
/// 5. A random move.
pub(super) fn select<R: Rng>(
    state: &GameState,
    candidates: &[usize],
    rng: &mut R,
) -> Option<Move> {
    let mover = state.current_player();
    let boards = || {
        candidates
            .iter()
            .filter_map(|&i| state.board().sub_board(i).map(|board| (i, board)))
    };

    for mark in [mover, mover.opponent()] {
        if let Some((index, cell)) =
            boards().find_map(|(i, board)| rules::winning_cell(board, mark).map(|cell| (i, cell)))
        {
            trace!(board = index, %cell, %mark, "Completing line");
            return Some(Move::at(index, cell, mover));
        }
    }

    if let Some((index, _)) = boards().find(|(_, board)| board.is_empty(Position::Center)) {
        return Some(Move::at(index, Position::Center, mover));
    }

    for (index, board) in boards() {
        let open: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if let Some(&corner) = open.choose(rng) {
            return Some(Move::at(index, corner, mover));
        }
    }

    random::select(state, candidates, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    #[test]
    fn test_opening_takes_center_of_first_board() {
        let state = GameState::new();
        let mv = select(&state, &[0, 1, 2, 3, 4, 5, 6, 7, 8], &mut rng()).unwrap();
        assert_eq!(mv, Move::at(0, Position::Center, Mark::X));
    }

    #[test]
    fn test_win_on_later_board_beats_block_on_earlier() {
        let moves = [
            Move::new(4, 0, 0, Mark::X),
            Move::new(0, 1, 1, Mark::O),
            Move::new(4, 0, 1, Mark::X),
            Move::new(1, 2, 2, Mark::O),
            Move::new(8, 0, 0, Mark::X),
            Move::new(0, 0, 0, Mark::O),
        ];
        let state = GameState::replay(Mark::X, &moves).unwrap();
        // O threatens (2,2) on board 0, X threatens (0,2) on board 4.
        let mv = select(&state, &[0, 4], &mut rng()).unwrap();
        assert_eq!(mv, Move::new(4, 0, 2, Mark::X));

        let mv = select(&state, &[0], &mut rng()).unwrap();
        assert_eq!(mv, Move::new(0, 2, 2, Mark::X));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let moves = [
            Move::new(4, 1, 0, Mark::X),
            Move::new(3, 0, 0, Mark::O),
            Move::new(0, 1, 0, Mark::X),
            Move::new(3, 0, 1, Mark::O),
        ];
        let state = GameState::replay(Mark::X, &moves).unwrap();
        // O's (0,1) on board 3 threatens (0,2).
        let mv = select(&state, &[3], &mut rng()).unwrap();
        assert_eq!(mv, Move::new(3, 0, 2, Mark::X));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let state = GameState::replay(Mark::X, &[Move::new(2, 1, 1, Mark::X)]).unwrap();
        let mv = select(&state, &[4], &mut rng()).unwrap();
        assert_eq!(mv.sub_board, 4);
        assert_eq!(mv.cell(), Some(Position::Center));

        let state = GameState::replay(
            Mark::X,
            &[Move::new(2, 1, 1, Mark::X), Move::new(4, 1, 1, Mark::O)],
        )
        .unwrap();
        let mv = select(&state, &[4], &mut rng()).unwrap();
        assert_eq!(mv.sub_board, 4);
        assert!(Position::CORNERS.contains(&mv.cell().unwrap()));
    }
}
