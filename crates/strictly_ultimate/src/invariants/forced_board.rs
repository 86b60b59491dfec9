//! Forced board invariant: the active sub-board follows the last move.

use super::super::{ActiveBoard, GameState};
use super::Invariant;

/// Invariant: `active` is derived from the last move's cell.
///
/// With no moves the choice is free. Otherwise the last move's target index
/// is forced when that sub-board is undecided, and free when it is decided.
pub struct ForcedBoardInvariant;

impl Invariant<GameState> for ForcedBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = match state.last_move() {
            None => ActiveBoard::Free,
            Some(mv) if state.outcome(mv.target()).is_decided() => ActiveBoard::Free,
            Some(mv) => ActiveBoard::Forced(mv.target()),
        };
        state.active_board() == expected
    }

    fn description() -> &'static str {
        "Active sub-board is the last move's target unless that board is decided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move};

    #[test]
    fn test_new_game_is_free() {
        assert!(ForcedBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_wrong_forced_index_violates() {
        let mut state = GameState::replay(Mark::X, &[Move::new(3, 0, 1, Mark::X)]).unwrap();
        assert_eq!(state.active_board(), ActiveBoard::Forced(1));
        state.active = ActiveBoard::Forced(3);
        assert!(!ForcedBoardInvariant::holds(&state));
    }
}
