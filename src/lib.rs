//! Four-in-a-row AI engine for a 5x6 board
//!
//! Two players, X and O, take turns placing marks next to existing marks.
//! Four in a row horizontally, vertically or diagonally wins; a full board
//! without a winner is a tie. The game starts with X at (2,3) and O at
//! (2,2), 0-indexed.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win/tie detection and move generation
//! - [`eval`]: Pattern-counting heuristic
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine facade with timing
//! - [`game`]: Engine-vs-engine match loop
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use fourline::{choose_move, Board, Stone};
//!
//! let mut board = Board::initial();
//!
//! let (best, nodes) = choose_move(&board, 2, Stone::X);
//! if let Some(pos) = best {
//!     board = board.apply_move(pos, Stone::X);
//!     println!("X plays at ({}, {}) after {} nodes", pos.row, pos.col, nodes);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, COLS, ROWS};
pub use config::MatchConfig;
pub use engine::{AIEngine, MoveResult};
pub use eval::{evaluate, evaluate_board, Score};
pub use game::{Match, TurnRecord};
pub use rules::{check_outcome, legal_moves, Outcome};
pub use search::{choose_move, SearchResult, Searcher};
