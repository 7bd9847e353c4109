//! Plain-text views of a game, for terminals and logs.

use serde::{Deserialize, Serialize};

use super::board::{Cell, Position, MAX_DIMENSION};
use super::state::GameState;

/// One symbol per kind of cell. Winning cells get their owner's `win_*`
/// symbol instead of the regular one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tokens {
    pub empty: char,
    pub player_one: char,
    pub player_two: char,
    pub win_player_one: char,
    pub win_player_two: char,
}

impl Tokens {
    pub fn as_array(&self) -> [char; 5] {
        [
            self.empty,
            self.player_one,
            self.player_two,
            self.win_player_one,
            self.win_player_two,
        ]
    }

    fn symbol(&self, cell: Cell, winning: bool) -> char {
        match (cell, winning) {
            (Cell::Empty, _) => self.empty,
            (Cell::PlayerOne, false) => self.player_one,
            (Cell::PlayerTwo, false) => self.player_two,
            (Cell::PlayerOne, true) => self.win_player_one,
            (Cell::PlayerTwo, true) => self.win_player_two,
        }
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Tokens {
            empty: ' ',
            player_one: 'x',
            player_two: 'o',
            win_player_one: 'X',
            win_player_two: 'O',
        }
    }
}

/// Render the board one line per row, top row first, with no trailing
/// newline.
pub fn render_board(state: &GameState, tokens: &Tokens) -> String {
    let win_set = state.win_set();
    state
        .board()
        .row_major()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, &cell)| {
                    tokens.symbol(cell, win_set.contains(&Position::new(row, column)))
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Column indices as a header line, one base-36 digit per column. Board
/// construction caps columns at [`MAX_DIMENSION`], so every label is unique.
pub fn column_header(state: &GameState) -> String {
    (0..state.dimensions().columns)
        .map(|col| {
            u32::try_from(col)
                .ok()
                .and_then(|digit| char::from_digit(digit, 36))
                .unwrap_or('?')
        })
        .collect()
}

/// Replay view: each cell holds the 1-based number of the move that filled
/// it, or 0 if it is still empty.
pub fn numbered_board(state: &GameState) -> Vec<Vec<usize>> {
    let dims = state.dimensions();
    let mut grid = vec![vec![0; dims.columns]; dims.rows];
    for (i, pos) in state.play_history().iter().enumerate() {
        grid[pos.row][pos.column] = i + 1;
    }
    grid
}
