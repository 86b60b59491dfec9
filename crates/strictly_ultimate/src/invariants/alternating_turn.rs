//! Alternating turn invariant: the player to move follows from the move count.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_player` flips after every accepted move.
///
/// After an even number of moves the first player is to move, after an odd
/// number the opponent is.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.history().len() % 2 == 0 {
            state.first_player()
        } else {
            state.first_player().opponent()
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player alternates after every move"
    }
}
