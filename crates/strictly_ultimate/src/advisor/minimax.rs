//! Minimax restricted to a single sub-board.
//!
//! The search sees only the chosen 3x3 board. It ignores the macro board and
//! where each reply would send the opponent.

use super::super::{GameState, Mark, Move, Position, Square, SubBoard, rules};
use super::heuristic;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks a sub-board, then the cell with the best single-board minimax score.
///
/// Board choice: the forced board if any; else the first candidate with an
/// empty cell whose macro target is already decided; else the board the
/// heuristic tier would play on.
pub(super) fn select<R: Rng>(
    state: &GameState,
    candidates: &[usize],
    rng: &mut R,
) -> Option<Move> {
    let index = match state.active_board().forced() {
        Some(index) => index,
        None => match escape_board(state, candidates) {
            Some(index) => index,
            None => heuristic::select(state, candidates, rng)?.sub_board,
        },
    };
    let board = state.board().sub_board(index)?;
    let mover = state.current_player();

    let mut best: Option<(Position, i32)> = None;
    for cell in board.empty_positions() {
        let score = minimax_score(board, cell, mover);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((cell, score));
        }
    }
    let (cell, score) = best?;
    debug!(board = index, %cell, score, "Minimax choice");
    Some(Move::at(index, cell, mover))
}

/// First candidate where some empty cell would send the opponent to a decided board.
fn escape_board(state: &GameState, candidates: &[usize]) -> Option<usize> {
    candidates.iter().copied().find(|&index| {
        state.board().sub_board(index).is_some_and(|board| {
            board
                .empty_positions()
                .iter()
                .any(|cell| state.outcome(cell.to_index()).is_decided())
        })
    })
}

/// Scores `mover` playing `cell` on `board`, with the opponent replying optimally.
///
/// A mover win at depth `d` scores `10 - d`, an opponent win `d - 10`, and a
/// full board with no line `0`. Depth counts replies after `cell`.
#[instrument(level = "trace", skip(board))]
pub fn minimax_score(board: &SubBoard, cell: Position, mover: Mark) -> i32 {
    let mut scratch = board.clone();
    scratch.set(cell, Square::Occupied(mover));
    minimax(&mut scratch, 0, false, mover)
}

fn minimax(board: &mut SubBoard, depth: i32, maximizing: bool, mover: Mark) -> i32 {
    match rules::check_winner(board) {
        Some(winner) if winner == mover => return 10 - depth,
        Some(_) => return depth - 10,
        None if rules::is_full(board) => return 0,
        None => {}
    }

    let mark = if maximizing { mover } else { mover.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mark));
        let score = minimax(board, depth + 1, !maximizing, mover);
        board.set(pos, Square::Empty);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Counts spans opened while only INFO and above are enabled.
    struct InfoSpanCounter(Arc<AtomicUsize>);

    impl Subscriber for InfoSpanCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() <= Level::INFO
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(self.0.fetch_add(1, Ordering::SeqCst) as u64 + 1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, _event: &Event<'_>) {}

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    fn board_of(cells: &[(Position, Mark)]) -> SubBoard {
        let mut board = SubBoard::new();
        for &(pos, mark) in cells {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let board = board_of(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
        ]);
        assert_eq!(minimax_score(&board, Position::TopRight, Mark::X), 10);
    }

    #[test]
    fn test_missed_block_loses() {
        let board = board_of(&[
            (Position::TopLeft, Mark::O),
            (Position::TopCenter, Mark::O),
            (Position::BottomRight, Mark::X),
        ]);
        // O completes the row on the first reply.
        assert_eq!(minimax_score(&board, Position::Center, Mark::X), -9);
        assert!(minimax_score(&board, Position::TopRight, Mark::X) > -9);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let board = SubBoard::new();
        assert_eq!(minimax_score(&board, Position::Center, Mark::O), 0);
        assert_eq!(minimax_score(&board, Position::TopLeft, Mark::O), 0);
    }

    #[test]
    fn test_forced_board_is_used() {
        let moves = [
            Move::new(4, 1, 0, Mark::X),
            Move::new(3, 0, 0, Mark::O),
            Move::new(0, 1, 0, Mark::X),
            Move::new(3, 0, 1, Mark::O),
            Move::new(1, 0, 0, Mark::X),
            Move::new(0, 1, 1, Mark::O),
            Move::new(4, 0, 0, Mark::X),
        ];
        let state = GameState::replay(Mark::X, &moves).unwrap();
        // O to move, sent back to board 0.
        assert_eq!(state.active_board().forced(), Some(0));
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mv = select(&state, &[0], &mut rng).unwrap();
        assert_eq!(mv.sub_board, 0);
        assert_eq!(mv.mark, Mark::O);
    }

    #[test]
    fn test_search_opens_no_spans_at_info() {
        let spans = Arc::new(AtomicUsize::new(0));
        let board = board_of(&[(Position::Center, Mark::X)]);
        let score = tracing::subscriber::with_default(InfoSpanCounter(spans.clone()), || {
            minimax_score(&board, Position::TopLeft, Mark::O)
        });
        assert_eq!(score, 0);
        assert_eq!(spans.load(Ordering::SeqCst), 0);
    }
}
