//! Interactive play over a line-based stream: a human against the advisor,
//! or two humans sharing one terminal.

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_ultimate::{Advisor, GameState, GameStatus, Mark, Move, Tier, engine};
use tracing::{debug, instrument};

/// Which marks are entered at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Seat {
    /// Human plays X, the advisor plays O.
    X,
    /// Human plays O, the advisor plays X.
    O,
    /// Hot seat: both marks are entered by hand.
    Both,
}

impl Seat {
    /// True if `mark` is entered by a human.
    pub fn controls(self, mark: Mark) -> bool {
        match self {
            Seat::X => mark == Mark::X,
            Seat::O => mark == Mark::O,
            Seat::Both => true,
        }
    }
}

/// Parses a human move.
///
/// Accepts `BOARD ROW COL` (sub-board 0-8, row and column 0-2) or
/// `g ROW COL` in global 9x9 coordinates. Range checking is left to the
/// engine so that out-of-range input gets its reason code.
pub fn parse_move(line: &str, mark: Mark) -> Option<Move> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["g", row, col] => Move::from_global(row.parse().ok()?, col.parse().ok()?, mark),
        [board, row, col] => Some(Move::new(
            board.parse().ok()?,
            row.parse().ok()?,
            col.parse().ok()?,
            mark,
        )),
        _ => None,
    }
}

/// Runs one game until it ends, input runs out, or a player types `quit`.
#[instrument(skip(input, output, advisor, state))]
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    advisor: &mut Advisor,
    mut state: GameState,
    human: Seat,
    tier: Tier,
) -> Result<GameState> {
    match human {
        Seat::Both => writeln!(output, "Hot seat: X and O both move from this terminal.")?,
        seat => writeln!(output, "You are {}.", seat.to_string().to_uppercase())?,
    }
    writeln!(output, "Enter `board row col`, `g row col`, or `quit`.")?;

    while !state.is_terminated() {
        if !human.controls(state.current_player()) {
            let mv = advisor.select_move(&state, tier)?;
            engine::apply(&mut state, mv)?;
            let (row, col) = mv.to_global();
            writeln!(output, "Advisor plays {} [g {} {}]", mv, row, col)?;
            continue;
        }

        writeln!(output, "\n{}", state)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(mv) = parse_move(line, state.current_player()) else {
            writeln!(output, "Could not parse `{}`", line)?;
            continue;
        };
        if let Err(err) = engine::apply(&mut state, mv) {
            writeln!(output, "Rejected: {}", err.reason())?;
        }
    }

    writeln!(output, "\n{}", state)?;
    match state.status() {
        GameStatus::Won(mark) if human == Seat::Both => writeln!(output, "{} wins!", mark)?,
        GameStatus::Won(mark) if human.controls(mark) => writeln!(output, "You win!")?,
        GameStatus::Won(_) => writeln!(output, "The advisor wins.")?,
        GameStatus::Draw => writeln!(output, "Draw.")?,
        GameStatus::InProgress => writeln!(output, "Game abandoned.")?,
    }
    Ok(state)
}
