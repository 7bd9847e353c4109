//! # Connect Four
//!
//! A Connect Four rules engine: gravity-drop board, turn tracking, and
//! incremental win detection that reports every cell of every line completed
//! by the last move.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, state machine, win detection
//! - [`ui`] — Terminal UI and plain text loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
