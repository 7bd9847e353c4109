use std::path::PathBuf;

use crate::game::GameOutcome;

/// Errors returned when a move is rejected. A rejected move never changes
/// the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("game is over: {outcome}")]
    GameOver { outcome: GameOutcome },

    #[error("column {column} is out of range (0..{columns})")]
    InvalidColumn { column: isize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors from building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(
        "invalid board dimensions {columns}x{rows} (each must be in 1..={max})",
        max = crate::game::MAX_DIMENSION
    )]
    InvalidDimensions { columns: usize, rows: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
