//! The rules engine: the single authority for legality and state transition.

use super::action::{IllegalMoveError, IllegalMoveReason, Move};
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::state::{ActiveBoard, GameState};
use super::types::{Square, SubBoard, SubBoardOutcome};
use tracing::{debug, info, instrument, warn};

/// Checks every legality constraint, reporting the first that fails.
///
/// Constraints are checked in this order: game not over, coordinates in
/// range, cell empty, sub-board undecided, forced sub-board respected.
#[instrument(skip(state))]
pub fn check(state: &GameState, mv: &Move) -> Result<(), IllegalMoveError> {
    MoveContract::pre(state, mv)
}

/// Pure legality predicate.
pub fn is_legal(state: &GameState, mv: &Move) -> bool {
    check(state, mv).is_ok()
}

/// Derives a sub-board's outcome from its cells.
pub fn outcome_of(board: &SubBoard) -> SubBoardOutcome {
    rules::outcome_of(board)
}

/// Applies a move to the state.
///
/// On rejection the state is left untouched. On success the mark is placed,
/// outcomes and termination are re-derived, the next active sub-board is
/// set, and the current player flips (even when the move ends the game).
#[instrument(skip(state), fields(mover = %mv.mark))]
pub fn apply(state: &mut GameState, mv: Move) -> Result<(), IllegalMoveError> {
    if let Err(err) = MoveContract::pre(state, &mv) {
        warn!(reason = %err.reason(), "Move rejected");
        return Err(err);
    }
    let Some(cell) = mv.cell() else {
        return Err(IllegalMoveError::new(IllegalMoveReason::OutOfRangeIndex, mv));
    };

    let next = transition(state, mv, cell);

    #[cfg(debug_assertions)]
    {
        let post = MoveContract::post(state, &next);
        debug_assert!(post.is_ok(), "Postcondition failed after {}: {:?}", mv, post);
    }

    *state = next;
    Ok(())
}

/// Computes the successor state of a legal move.
fn transition(state: &GameState, mv: Move, cell: Position) -> GameState {
    let mut next = state.clone();

    next.board
        .sub_board_mut(mv.sub_board)
        .set(cell, Square::Occupied(mv.mark));
    next.history.push(mv);

    let outcome = next.board.outcome(mv.sub_board);
    if outcome.is_decided() {
        debug!(board = mv.sub_board, ?outcome, "Sub-board decided");
    }

    // Winner before full draw, so a line on the final board still wins.
    if let Some(winner) = rules::check_winner(&next.board.macro_board()) {
        info!(%winner, "Game won");
        next.overall_winner = Some(winner);
        next.terminated = true;
    } else if next.board.all_decided() {
        info!("Game drawn");
        next.terminated = true;
    }

    let target = mv.target();
    next.active = if next.board.outcome(target).is_decided() {
        ActiveBoard::Free
    } else {
        ActiveBoard::Forced(target)
    };

    next.current_player = next.current_player.opponent();

    debug!(active = ?next.active, next_player = %next.current_player, "Move applied");
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_apply_forces_target_board() {
        let mut state = GameState::new();
        apply(&mut state, Move::new(0, 2, 1, Mark::X)).unwrap();
        assert_eq!(state.active_board(), ActiveBoard::Forced(7));
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(
            state.board().sub_board(0).unwrap().get(Position::BottomCenter),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut state = GameState::new();
        apply(&mut state, Move::new(0, 0, 0, Mark::X)).unwrap();
        let before = state.clone();
        let err = apply(&mut state, Move::new(5, 0, 0, Mark::O)).unwrap_err();
        assert_eq!(err.reason(), IllegalMoveReason::WrongBoardForced);
        assert_eq!(state, before);
    }

    #[test]
    fn test_mark_is_taken_from_move() {
        let mut state = GameState::new();
        apply(&mut state, Move::new(1, 1, 1, Mark::O)).unwrap();
        assert_eq!(
            state.board().sub_board(1).unwrap().get(Position::Center),
            Square::Occupied(Mark::O)
        );
        assert_eq!(state.current_player(), Mark::O);
    }

    #[test]
    fn test_is_legal_matches_check() {
        let state = GameState::new();
        assert!(is_legal(&state, &Move::new(8, 2, 2, Mark::X)));
        assert!(!is_legal(&state, &Move::new(8, 2, 3, Mark::X)));
    }
}
