//! GUI module for the four-in-a-row game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FourLineApp;
pub use game_state::{GameMode, GameResult, GameState};
