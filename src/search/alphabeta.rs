//! Minimax search with alpha-beta pruning
//!
//! The player asked to move is the maximizer at the root; roles and the
//! player placing a mark alternate at every ply. Leaves are scored with the
//! pattern heuristic from the root player's perspective.
//!
//! # Features
//!
//! - Fixed move order: candidates sorted by (column, row) ascending
//! - Strict-improvement best move, so the first of equal moves wins
//! - Pruning can be switched off to get the plain minimax result
//! - Root-parallel search on scoped threads with a shared node counter
//!
//! # Example
//!
//! ```
//! use fourline::board::{Board, Stone};
//! use fourline::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::initial();
//!
//! let result = searcher.search(&board, Stone::X, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, Score};
use crate::rules::{check_outcome, legal_moves};

/// Infinity score for alpha-beta bounds
const INF: Score = Score::INFINITY;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total cutoffs (beta <= alpha)
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Nodes evaluated by the heuristic
    pub leaves: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }

    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.cutoffs += other.cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
        self.leaves += other.leaves;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` for a leaf root (depth 0, terminal, no moves)
    pub best_move: Option<Pos>,
    /// Score of the best move from the searching player's perspective
    pub score: Score,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Legal moves for `color`, sorted by (column, row).
///
/// This order decides which of several equal-scoring moves is returned.
pub fn ordered_moves(board: &Board, color: Stone) -> Vec<Pos> {
    let mut moves = legal_moves(board, color);
    moves.sort_by_key(|pos| (pos.col, pos.row));
    moves
}

/// Depth-limited minimax searcher.
///
/// Holds no state between searches apart from its configuration; the node
/// counter and statistics are reset by every call to [`Searcher::search`].
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Player whose perspective leaves are scored from
    root: Stone,
    nodes: u64,
    pruning: bool,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a searcher with alpha-beta pruning enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Stone::X,
            nodes: 0,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher that explores the full minimax tree.
    #[must_use]
    pub fn without_pruning() -> Self {
        Self {
            pruning: false,
            ..Self::new()
        }
    }

    /// Search `depth` plies for the best move of `color`.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone, depth: u8) -> SearchResult {
        self.root = color;
        self.nodes = 0;
        self.stats = SearchStats::default();

        let (best_move, score) = self.minimax(board, depth, true, color, -INF, INF);

        debug!(
            "search {:?} depth {}: move {:?} score {} nodes {} cutoffs {}",
            color, depth, best_move, score, self.nodes, self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Search with the root moves split across `threads` scoped workers.
    ///
    /// Every root move is searched with a full window on its own board copy,
    /// so the move and score match [`Searcher::search`]; the node count is
    /// usually higher because siblings cannot share bounds.
    #[must_use]
    pub fn search_parallel(
        &mut self,
        board: &Board,
        color: Stone,
        depth: u8,
        threads: usize,
    ) -> SearchResult {
        let moves = ordered_moves(board, color);
        let threads = threads.max(1).min(moves.len());
        if threads <= 1 || depth == 0 || check_outcome(board).is_some() {
            return self.search(board, color, depth);
        }

        self.root = color;
        self.stats = SearchStats::default();

        // Root node counted up front, workers add their subtrees
        let nodes = AtomicU64::new(1);
        let pruning = self.pruning;

        let mut scored: Vec<(usize, Score)> = Vec::with_capacity(moves.len());
        let mut merged = SearchStats::default();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|worker_id| {
                    let moves = &moves;
                    let nodes = &nodes;
                    scope.spawn(move || {
                        let mut worker = Searcher {
                            root: color,
                            nodes: 0,
                            pruning,
                            stats: SearchStats::default(),
                        };
                        let mut results = Vec::new();
                        for (idx, &mov) in moves.iter().enumerate().skip(worker_id).step_by(threads) {
                            let child = board.apply_move(mov, color);
                            let before = worker.nodes;
                            let (_, score) =
                                worker.minimax(&child, depth - 1, false, color.opponent(), -INF, INF);
                            nodes.fetch_add(worker.nodes - before, Ordering::Relaxed);
                            results.push((idx, score));
                        }
                        (results, worker.stats)
                    })
                })
                .collect();

            for (worker_id, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok((results, stats)) => {
                        scored.extend(results);
                        merged.merge(&stats);
                    }
                    Err(_) => warn!(
                        "search worker {} panicked, its root moves are skipped",
                        worker_id
                    ),
                }
            }
        });

        // Same tie-break as the sequential search: first strict improvement
        // in (column, row) order.
        scored.sort_by_key(|&(idx, _)| idx);
        let mut best_move = None;
        let mut best_score = -INF;
        for (idx, score) in scored {
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(moves[idx]);
            }
        }

        self.nodes = nodes.load(Ordering::Relaxed);
        self.stats = merged;

        debug!(
            "parallel search {:?} depth {} on {} threads: move {:?} score {} nodes {}",
            color, depth, threads, best_move, best_score, self.nodes
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Score a leaf from the root player's perspective
    #[inline]
    fn leaf(&mut self, board: &Board) -> (Option<Pos>, Score) {
        self.stats.leaves += 1;
        (None, evaluate(board, self.root))
    }

    /// Recursive minimax with alpha-beta bounds.
    ///
    /// `to_move` places the next mark; `maximizing` is true on the root
    /// player's plies.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        to_move: Stone,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<Pos>, Score) {
        self.nodes += 1;

        if depth == 0 || check_outcome(board).is_some() {
            return self.leaf(board);
        }

        let moves = ordered_moves(board, to_move);
        if moves.is_empty() {
            return self.leaf(board);
        }

        let mut best_move = None;
        let mut best_score = if maximizing { -INF } else { INF };

        for (i, &mov) in moves.iter().enumerate() {
            let child = board.apply_move(mov, to_move);
            let (_, score) =
                self.minimax(&child, depth - 1, !maximizing, to_move.opponent(), alpha, beta);

            // Strict improvement only; the first move is always kept so a
            // lost position still yields a move.
            if maximizing {
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_move, best_score)
    }
}

/// Choose a move for `player` searching `depth` plies.
///
/// Returns the move (or `None` when the board offers none) and the number
/// of nodes the search visited.
#[must_use]
pub fn choose_move(board: &Board, depth: u8, player: Stone) -> (Option<Pos>, u64) {
    let result = Searcher::new().search(board, player, depth);
    (result.best_move, result.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_moves_column_major() {
        let moves = ordered_moves(&Board::initial(), Stone::X);
        assert_eq!(moves.first(), Some(&Pos::new(1, 1)));
        assert_eq!(moves[1], Pos::new(2, 1));
        assert_eq!(moves.last(), Some(&Pos::new(3, 4)));
        for pair in moves.windows(2) {
            assert!((pair[0].col, pair[0].row) < (pair[1].col, pair[1].row));
        }
    }

    #[test]
    fn test_depth_zero_evaluates_immediately() {
        let board = Board::from_rows(["      ", "      ", " XXX  ", "  O   ", "      "]);
        let result = Searcher::new().search(&board, Stone::X, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.score, evaluate(&board, Stone::X));
    }

    #[test]
    fn test_terminal_board_is_leaf() {
        let board = Board::from_rows(["XXXX  ", "OOO   ", "      ", "      ", "      "]);
        let result = Searcher::new().search(&board, Stone::O, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.score, Score::NEG_INFINITY);
    }

    #[test]
    fn test_no_legal_moves_is_leaf() {
        let (best, nodes) = choose_move(&Board::new(), 3, Stone::X);
        assert_eq!(best, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_initial_board_depth_one() {
        let board = Board::initial();
        let result = Searcher::new().search(&board, Stone::X, 1);

        // Root plus one node per legal move; nothing can be pruned at depth 1
        // until a score reaches +infinity.
        assert_eq!(result.nodes, 1 + 10);

        let moves = ordered_moves(&board, Stone::X);
        let mut expected = None;
        let mut expected_score = -INF;
        for mov in moves {
            let score = evaluate(&board.apply_move(mov, Stone::X), Stone::X);
            if expected.is_none() || score > expected_score {
                expected = Some(mov);
                expected_score = score;
            }
        }
        assert_eq!(result.best_move, expected);
        assert_eq!(result.score, expected_score);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let board = Board::from_rows(["      ", "      ", "      ", " OO   ", " XXX  "]);
        let result = Searcher::new().search(&board, Stone::X, 2);
        // (4,0) and (4,4) both win; column order prefers (4,0)
        assert_eq!(result.best_move, Some(Pos::new(4, 0)));
        assert_eq!(result.score, Score::INFINITY);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let board = Board::from_rows(["      ", "      ", "   X  ", "   X  ", "OOO   "]);
        let result = Searcher::new().search(&board, Stone::X, 2);
        assert_eq!(result.best_move, Some(Pos::new(4, 3)));
        assert!(result.score.is_finite());
    }

    #[test]
    fn test_o_is_maximizer_in_own_search() {
        let board = Board::from_rows(["      ", "   X  ", "   X  ", "  XO  ", "OOO X "]);
        let result = Searcher::new().search(&board, Stone::O, 1);
        assert_eq!(result.best_move, Some(Pos::new(4, 3)));
        assert_eq!(result.score, Score::INFINITY);
    }

    #[test]
    fn test_lost_position_still_returns_move() {
        // O has two separate completions; X cannot stop both.
        let board = Board::from_rows(["      ", "X     ", "X     ", " X    ", " OOO  "]);
        let result = Searcher::new().search(&board, Stone::X, 2);
        assert!(result.best_move.is_some());
        assert_eq!(result.score, Score::NEG_INFINITY);
    }

    #[test]
    fn test_lost_position_keeps_first_ordered_move() {
        let board = Board::from_rows(["      ", "X     ", "X     ", " X    ", " OOO  "]);
        let first = ordered_moves(&board, Stone::X)[0];
        assert_eq!(first, Pos::new(0, 0));

        for mut searcher in [Searcher::new(), Searcher::without_pruning()] {
            let result = searcher.search(&board, Stone::X, 2);
            assert_eq!(result.best_move, Some(first));
            assert_eq!(result.score, Score::NEG_INFINITY);
        }

        let (best, nodes) = choose_move(&board, 2, Stone::X);
        assert_eq!(best, Some(first));
        assert!(nodes > 1);
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        let boards = [
            Board::initial(),
            Board::from_rows(["      ", "  X   ", " OXO  ", "  X   ", "      "]),
            Board::from_rows(["      ", " O X  ", "  XO  ", " XO   ", "      "]),
        ];
        for board in boards {
            for color in [Stone::X, Stone::O] {
                for depth in 1..=3 {
                    let pruned = Searcher::new().search(&board, color, depth);
                    let full = Searcher::without_pruning().search(&board, color, depth);
                    assert_eq!(pruned.best_move, full.best_move);
                    assert_eq!(pruned.score, full.score);
                    assert!(pruned.nodes <= full.nodes);
                    assert_eq!(full.stats.cutoffs, 0);
                }
            }
        }
    }

    #[test]
    fn test_search_deterministic() {
        let board = Board::from_rows(["      ", "  X   ", " OXO  ", "      ", "      "]);
        let first = choose_move(&board, 3, Stone::O);
        for _ in 0..3 {
            assert_eq!(choose_move(&board, 3, Stone::O), first);
        }
    }

    #[test]
    fn test_search_does_not_modify_board() {
        let board = Board::initial();
        let copy = board;
        let _ = choose_move(&board, 3, Stone::X);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let board = Board::from_rows(["      ", "  X   ", " OXO  ", "  X   ", "      "]);
        for threads in [2, 4] {
            let sequential = Searcher::new().search(&board, Stone::O, 3);
            let parallel = Searcher::new().search_parallel(&board, Stone::O, 3, threads);
            assert_eq!(parallel.best_move, sequential.best_move);
            assert_eq!(parallel.score, sequential.score);
            assert!(parallel.nodes > 1);
        }
    }

    #[test]
    fn test_parallel_single_thread_falls_back() {
        let board = Board::initial();
        let sequential = Searcher::new().search(&board, Stone::X, 2);
        let parallel = Searcher::new().search_parallel(&board, Stone::X, 2, 1);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_first_move_rate() {
        let stats = SearchStats {
            cutoffs: 4,
            first_move_cutoffs: 3,
            leaves: 0,
        };
        assert_eq!(stats.first_move_rate(), 75.0);
        assert_eq!(SearchStats::default().first_move_rate(), 0.0);
    }
}
