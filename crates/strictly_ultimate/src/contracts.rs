//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{IllegalMoveError, IllegalMoveReason, Move};
use super::invariants::{InvariantSet, InvariantViolation, UltimateInvariants};
use super::state::{ActiveBoard, GameState};
use super::types::Square;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not terminated.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is over.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.is_terminated() {
            Err(IllegalMoveError::new(
                IllegalMoveReason::GameAlreadyTerminated,
                *mv,
            ))
        } else {
            Ok(())
        }
    }
}

/// Precondition: sub-board is 0-8, row and column are 0-2.
pub struct InRange;

impl InRange {
    /// Rejects coordinates outside the 9x3x3 grid.
    #[instrument]
    pub fn check(mv: &Move) -> Result<(), IllegalMoveError> {
        if mv.sub_board > 8 || mv.cell().is_none() {
            Err(IllegalMoveError::new(IllegalMoveReason::OutOfRangeIndex, *mv))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellEmpty;

impl CellEmpty {
    /// Rejects a move onto an occupied cell.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        let empty = match (state.board().sub_board(mv.sub_board), mv.cell()) {
            (Some(board), Some(cell)) => board.is_empty(cell),
            _ => false,
        };
        if empty {
            Ok(())
        } else {
            Err(IllegalMoveError::new(IllegalMoveReason::CellOccupied, *mv))
        }
    }
}

/// Precondition: the target sub-board is neither won nor drawn.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Rejects a move into a won or drawn sub-board.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        if state.outcome(mv.sub_board).is_decided() {
            Err(IllegalMoveError::new(
                IllegalMoveReason::BoardAlreadyDecided,
                *mv,
            ))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a forced sub-board is respected.
pub struct ForcedBoard;

impl ForcedBoard {
    /// Rejects a move outside the forced sub-board.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        match state.active_board() {
            ActiveBoard::Forced(index) if index != mv.sub_board => Err(IllegalMoveError::new(
                IllegalMoveReason::WrongBoardForced,
                *mv,
            )),
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in reason order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mv: &Move, state: &GameState) -> Result<(), IllegalMoveError> {
        GameNotOver::check(mv, state)?;
        InRange::check(mv)?;
        CellEmpty::check(mv, state)?;
        BoardUndecided::check(mv, state)?;
        ForcedBoard::check(mv, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Checks
// ─────────────────────────────────────────────────────────────

/// Transition check: exactly one empty cell became occupied and nothing else changed.
pub struct BoardMonotonic;

impl BoardMonotonic {
    /// True if the transition filled exactly one cell and logged it.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut placed = 0;
        for (old, new) in before
            .board()
            .sub_boards()
            .iter()
            .zip(after.board().sub_boards().iter())
        {
            for (o, n) in old.squares().iter().zip(new.squares().iter()) {
                match (o, n) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => placed += 1,
                    _ => {
                        warn!("Occupied cell changed");
                        return false;
                    }
                }
            }
        }
        let valid = placed == 1 && after.history().len() == before.history().len() + 1;
        if !valid {
            warn!(placed, "Board monotonicity violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Coordinates are in range
/// - Cell is empty
/// - Sub-board is undecided
/// - Forced sub-board is respected
///
/// Postconditions:
/// - Exactly one cell was filled
/// - Every [`UltimateInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), IllegalMoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match UltimateInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !BoardMonotonic::holds(before, after) {
            violations.push(InvariantViolation::new(
                "Exactly one empty cell is filled per move",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, engine};

    #[test]
    fn test_precondition_empty_board() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Move::new(4, 1, 1, Mark::X)).is_ok());
    }

    #[test]
    fn test_precondition_order_terminated_first() {
        let mut state = GameState::new();
        state.terminated = true;
        let err = MoveContract::pre(&state, &Move::new(42, 7, 7, Mark::X)).unwrap_err();
        assert_eq!(err.reason(), IllegalMoveReason::GameAlreadyTerminated);
    }

    #[test]
    fn test_precondition_out_of_range() {
        let state = GameState::new();
        for mv in [
            Move::new(9, 0, 0, Mark::X),
            Move::new(0, 3, 0, Mark::X),
            Move::new(0, 0, 3, Mark::X),
        ] {
            let err = MoveContract::pre(&state, &mv).unwrap_err();
            assert_eq!(err.reason(), IllegalMoveReason::OutOfRangeIndex);
        }
    }

    #[test]
    fn test_precondition_wrong_board() {
        let mut state = GameState::new();
        engine::apply(&mut state, Move::new(0, 0, 2, Mark::X)).unwrap();
        let err = MoveContract::pre(&state, &Move::new(3, 0, 0, Mark::O)).unwrap_err();
        assert_eq!(err.reason(), IllegalMoveReason::WrongBoardForced);
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut after = before.clone();
        engine::apply(&mut after, Move::new(4, 1, 1, Mark::X)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        engine::apply(&mut after, Move::new(4, 1, 1, Mark::X)).unwrap();
        after
            .board
            .sub_board_mut(0)
            .set(crate::Position::TopLeft, Square::Occupied(Mark::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
