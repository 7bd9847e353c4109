//! Core Connect Four game logic: board representation, player types, the
//! game state machine and incremental win detection.

mod board;
mod player;
pub mod render;
mod state;
mod win;

pub use board::{Board, Cell, Dimensions, Position, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
pub use player::{GameOutcome, Player, Turn};
pub use render::Tokens;
pub use state::GameState;
pub use win::{find_winning_cells, WinSet, WIN_LENGTH};
