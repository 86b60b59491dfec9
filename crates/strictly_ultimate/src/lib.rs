//! Strictly Ultimate - rules engine and move advisor for ultimate tic-tac-toe
//!
//! Nine 3x3 sub-boards form a 3x3 macro grid. The cell a player picks inside
//! a sub-board names the sub-board the opponent must play next.
//!
//! # Architecture
//!
//! - **Engine**: the single authority for legality and state transition
//! - **Contracts / Invariants**: pre- and postconditions around every move
//! - **Advisor**: random, heuristic, and minimax synthetic players
//!
//! Callers own one [`GameState`] per match and route every move, human or
//! advised, through [`engine::apply`].
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{ActiveBoard, Advisor, GameState, Mark, Move, Tier, engine};
//!
//! let mut state = GameState::new();
//! engine::apply(&mut state, Move::new(4, 0, 2, Mark::X))?;
//! assert_eq!(state.active_board(), ActiveBoard::Forced(2));
//!
//! let reply = Advisor::new(42).select_move(&state, Tier::Heuristic)?;
//! engine::apply(&mut state, reply)?;
//! assert_eq!(state.current_player(), Mark::X);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod advisor;
pub mod contracts;
pub mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{IllegalMoveError, IllegalMoveReason, Move};
pub use advisor::{Advisor, NoLegalMoveError, Tier, candidate_boards, select_move};
pub use engine::{apply, check, is_legal, outcome_of};
pub use position::Position;
pub use state::{ActiveBoard, GameState, GameStatus};
pub use types::{Mark, Square, SubBoard, SubBoardOutcome, UltimateBoard};
