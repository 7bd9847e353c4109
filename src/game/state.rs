use super::board::{Board, Cell, Dimensions, Position};
use super::player::{GameOutcome, Player, Turn};
use super::win::{find_winning_cells, WinSet};
use crate::error::{BoardError, PlayError};

/// The game state machine: board, turn, play history and winning cells.
///
/// All mutation goes through [`GameState::play`] and [`GameState::reset`].
/// There is no internal locking; an embedding application that shares a
/// `GameState` across threads must serialize calls itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Turn,
    win_set: WinSet,
    history: Vec<Position>,
}

impl GameState {
    /// Create an empty game with Player 1 to move.
    ///
    /// # Panics
    ///
    /// Panics on dimensions [`GameState::try_new`] would reject.
    pub fn new(dimensions: Dimensions) -> Self {
        Self::from_board(Board::new(dimensions))
    }

    pub fn try_new(dimensions: Dimensions) -> Result<Self, BoardError> {
        Board::try_new(dimensions).map(Self::from_board)
    }

    fn from_board(board: Board) -> Self {
        GameState {
            board,
            turn: Turn::Player(Player::One),
            win_set: WinSet::new(),
            history: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One vector per column, left to right, each read bottom to top.
    pub fn column_major_board(&self) -> Vec<Vec<Cell>> {
        self.board.column_major()
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else {
            self.turn.player()
        }
    }

    /// Every cell of every completed line so far. Empty while the game runs.
    pub fn win_set(&self) -> &WinSet {
        &self.win_set
    }

    /// Landing positions of every accepted move, oldest first.
    pub fn play_history(&self) -> &[Position] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        !self.win_set.is_empty() || self.turn == Turn::Tie
    }

    /// `None` while the game is still running.
    pub fn winner(&self) -> Option<GameOutcome> {
        match self.turn {
            Turn::Tie => Some(GameOutcome::Tie),
            Turn::Player(player) if !self.win_set.is_empty() => Some(GameOutcome::Winner(player)),
            Turn::Player(_) => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        (0..self.board.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `column` and return the full
    /// set of winning cells.
    ///
    /// The returned set is empty unless this move won the game. After a win
    /// the turn stays on the winning player; after the last free cell is
    /// filled without a win the turn becomes [`Turn::Tie`].
    pub fn play(&mut self, column: isize) -> Result<WinSet, PlayError> {
        let player = match self.turn {
            Turn::Player(player) if self.win_set.is_empty() => player,
            Turn::Player(player) => {
                return Err(PlayError::GameOver {
                    outcome: GameOutcome::Winner(player),
                })
            }
            Turn::Tie => {
                return Err(PlayError::GameOver {
                    outcome: GameOutcome::Tie,
                })
            }
        };

        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < self.board.columns())
            .ok_or(PlayError::InvalidColumn {
                column,
                columns: self.board.columns(),
            })?;

        let landing = self.board.drop_piece(col, player.to_cell())?;
        self.history.push(landing);
        log::debug!(
            "move {}: {} -> column {} row {}",
            self.history.len(),
            player,
            landing.column,
            landing.row
        );

        self.win_set.extend(find_winning_cells(&self.board, landing, player));

        if !self.win_set.is_empty() {
            log::info!(
                "{} wins after {} moves ({} winning cells)",
                player,
                self.history.len(),
                self.win_set.len()
            );
        } else if self.board.is_full() {
            log::info!("board full after {} moves: tie", self.history.len());
            self.turn = Turn::Tie;
        } else {
            self.turn = Turn::Player(player.other());
        }

        Ok(self.win_set.clone())
    }

    /// Return to an empty board of the same dimensions with Player 1 to move.
    pub fn reset(&mut self) {
        log::debug!("reset {}x{} board", self.board.columns(), self.board.rows());
        *self = GameState::new(self.board.dimensions());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
