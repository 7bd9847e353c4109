//! Front ends that own the input loop and drive a [`GameState`]: an
//! interactive terminal UI and a plain line-oriented text loop.
//!
//! [`GameState`]: crate::game::GameState

mod app;
mod game_view;
pub mod text;

pub use app::App;
