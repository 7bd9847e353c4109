//! Line-oriented front end: prints the board, reads a column per line.

use std::io::{self, BufRead, Write};

use crate::game::render::{column_header, render_board};
use crate::game::{GameOutcome, GameState, Tokens};

/// Play one game over `input`/`output` until it ends, the input runs out or
/// the user types `q`. Returns the outcome if the game finished.
pub fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    tokens: &Tokens,
    input: R,
    mut output: W,
) -> io::Result<Option<GameOutcome>> {
    let mut lines = input.lines();

    while let Some(player) = state.current_player() {
        writeln!(output, "{}", column_header(state))?;
        writeln!(output, "{}", render_board(state, tokens))?;
        write!(output, "{player} turn: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(None);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let column = match line.parse::<isize>() {
            Ok(column) => column,
            Err(_) => {
                writeln!(output, "'{line}' is not a column number")?;
                continue;
            }
        };
        if let Err(err) = state.play(column) {
            writeln!(output, "{err}")?;
        }
    }

    writeln!(output, "{}", render_board(state, tokens))?;
    let outcome = state.winner();
    match outcome {
        Some(GameOutcome::Winner(player)) => writeln!(output, "{player} wins!")?,
        Some(GameOutcome::Tie) => writeln!(output, "Tie!")?,
        None => {}
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dimensions, Player};
    use std::io::Cursor;

    fn play(state: &mut GameState, input: &str) -> (Option<GameOutcome>, String) {
        let tokens = Tokens {
            empty: '.',
            ..Tokens::default()
        };
        let mut out = Vec::new();
        let outcome = run(state, &tokens, Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_plays_until_win() {
        let mut state = GameState::default();
        let (outcome, out) = play(&mut state, "0\n1\n0\n1\n0\n1\n0\n");

        assert_eq!(outcome, Some(GameOutcome::Winner(Player::One)));
        assert!(out.starts_with("0123456\n"));
        assert!(out.contains("Player 2 turn: "));
        assert!(out.ends_with("X......\nXo.....\nXo.....\nXo.....\nPlayer 1 wins!\n"));
    }

    #[test]
    fn test_reports_bad_input_and_keeps_going() {
        let mut state = GameState::new(Dimensions::new(4, 4));
        let (outcome, out) = play(&mut state, "abc\n9\n-1\n0\nq\n");

        assert_eq!(outcome, None);
        assert!(out.contains("'abc' is not a column number"));
        assert!(out.contains("column 9 is out of range (0..4)"));
        assert!(out.contains("column -1 is out of range (0..4)"));
        assert_eq!(state.play_history().len(), 1);
    }

    #[test]
    fn test_reports_full_column() {
        let mut state = GameState::new(Dimensions::new(4, 2));
        let (_, out) = play(&mut state, "1\n1\n1\n");
        assert!(out.contains("column 1 is full"));
    }

    #[test]
    fn test_tie() {
        let mut state = GameState::new(Dimensions::new(5, 4));
        let moves = "0\n0\n0\n0\n1\n1\n1\n1\n2\n2\n2\n2\n4\n3\n3\n3\n3\n4\n4\n4\n";
        let (outcome, out) = play(&mut state, moves);
        assert_eq!(outcome, Some(GameOutcome::Tie));
        assert!(out.ends_with("Tie!\n"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let mut state = GameState::default();
        let (outcome, _) = play(&mut state, "3\n");
        assert_eq!(outcome, None);
        assert_eq!(state.play_history().len(), 1);
    }
}
