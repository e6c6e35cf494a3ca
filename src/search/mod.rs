//! Search module
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{choose_move, ordered_moves, SearchResult, SearchStats, Searcher};
