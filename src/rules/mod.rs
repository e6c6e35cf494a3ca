//! Game rules for four-in-a-row on a 5x6 board
//!
//! This module implements:
//! - Win and tie detection (four in a row in any of four directions)
//! - Move generation (empty cells adjacent to an existing mark)

pub mod moves;
pub mod win;

/// Line directions in scan order: horizontal, vertical, diagonal up-right,
/// diagonal down-right. Each line is walked from its start cell only.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (-1, 1), // Diagonal NE
    (1, 1),  // Diagonal SE
];

/// Number of marks in a row needed to win
pub const WIN_LENGTH: usize = 4;

// Re-exports for convenient access
pub use moves::{is_valid_move, legal_moves};
pub use win::{check_outcome, find_four_line, has_four_in_row, Outcome};
