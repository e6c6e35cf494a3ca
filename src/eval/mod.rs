//! Position evaluation
//!
//! - [`patterns`]: pattern weights and census types
//! - [`heuristic`]: the board scorer used at search leaves

pub mod heuristic;
pub mod patterns;

/// Evaluation score. Real-valued so a decided game can score ±infinity.
pub type Score = f64;

pub use heuristic::{count_patterns, evaluate, evaluate_board};
pub use patterns::{PatternCounts, PatternKind, PatternScore};
