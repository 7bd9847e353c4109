use crate::error::PlayError;
use crate::game::{Dimensions, GameOutcome, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(dimensions: Dimensions) -> Self {
        App {
            game_state: GameState::new(dimensions),
            selected_column: dimensions.columns / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_selection(false),
            KeyCode::Right => self.move_selection(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.dimensions().columns / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Move the selection to the nearest column that still accepts a token,
    /// skipping full ones. Stays put if there is none in that direction.
    fn move_selection(&mut self, right: bool) {
        let legal = self.game_state.legal_columns();
        let next = if right {
            legal.into_iter().find(|&col| col > self.selected_column)
        } else {
            legal.into_iter().rev().find(|&col| col < self.selected_column)
        };
        if let Some(col) = next {
            self.selected_column = col;
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.play(self.selected_column as isize) {
            Ok(_) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.winner() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Tie => "It's a tie!".to_string(),
                    });
                }
            }
            Err(PlayError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(PlayError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(PlayError::GameOver { .. }) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
