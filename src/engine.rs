//! Main AI engine wrapping the searcher
//!
//! The engine owns a [`Searcher`], a search depth and a thread count. Each
//! request runs one depth-limited alpha-beta search and reports the chosen
//! move with its score, node count and wall-clock time.
//!
//! # Example
//!
//! ```
//! use fourline::{AIEngine, Board, Stone};
//!
//! let mut engine = AIEngine::new(2);
//! let board = Board::initial();
//!
//! let result = engine.get_move_with_stats(&board, Stone::X);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms());
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::Score;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move from the mover's perspective
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
}

impl MoveResult {
    /// Create a result from a finished search
    #[inline]
    fn from_search(result: SearchResult, elapsed: Duration) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            elapsed,
        }
    }

    /// Search time in whole milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// AI engine for one player.
///
/// # Example
///
/// ```
/// use fourline::{AIEngine, Board, Stone};
///
/// let mut engine = AIEngine::with_config(4, 2);
/// let board = Board::initial();
/// if let Some(best_move) = engine.get_move(&board, Stone::O) {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
    /// Search depth in plies
    depth: u8,
    /// Worker threads for the root split (1 = sequential)
    threads: usize,
}

impl AIEngine {
    /// Create a sequential engine searching `depth` plies.
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self::with_config(depth, 1)
    }

    /// Create an engine with an explicit thread count.
    #[must_use]
    pub fn with_config(depth: u8, threads: usize) -> Self {
        Self {
            searcher: Searcher::new(),
            depth,
            threads: threads.max(1),
        }
    }

    /// Get the best move for the given position, or `None` if there is none.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Search the position and return the move with its statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        let result = if self.threads > 1 {
            self.searcher
                .search_parallel(board, color, self.depth, self.threads)
        } else {
            self.searcher.search(board, color, self.depth)
        };

        let elapsed = start.elapsed();
        debug!(
            "engine {:?}: {:?} after {} nodes in {:?}",
            color, result.best_move, result.nodes, elapsed
        );
        MoveResult::from_search(result, elapsed)
    }

    /// Set search depth
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Get current search depth
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Get worker thread count
    #[must_use]
    pub fn threads(&self) -> usize {
        self.threads
    }
}
