//! Termination invariant: exactly one terminal condition, consistent with the boards.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: the terminal flags agree with the board.
///
/// `overall_winner` equals the macro board's line winner, and the game is
/// terminated exactly when there is a winner or every sub-board is decided.
pub struct TerminationInvariant;

impl Invariant<GameState> for TerminationInvariant {
    fn holds(state: &GameState) -> bool {
        let winner = rules::check_winner(&state.board().macro_board());
        if state.overall_winner() != winner {
            return false;
        }
        state.is_terminated() == (winner.is_some() || state.board().all_decided())
    }

    fn description() -> &'static str {
        "Terminated exactly when the macro board is won or every sub-board is decided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_new_game_holds() {
        assert!(TerminationInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_phantom_winner_violates() {
        let mut state = GameState::new();
        state.overall_winner = Some(Mark::O);
        state.terminated = true;
        assert!(!TerminationInvariant::holds(&state));
    }

    #[test]
    fn test_premature_termination_violates() {
        let mut state = GameState::new();
        state.terminated = true;
        assert!(!TerminationInvariant::holds(&state));
    }
}
