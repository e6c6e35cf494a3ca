//! Move generation
//!
//! A move is legal when the target cell is empty and at least one of its
//! eight neighbours holds a mark of either player.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

/// The eight neighbour offsets
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Check if the cell at `pos` touches any existing mark
#[inline]
fn is_adjacent_to_stone(board: &Board, pos: Pos) -> bool {
    NEIGHBORS.iter().any(|&(dr, dc)| {
        pos.offset(dr, dc).is_some_and(|n| !board.is_empty(n))
    })
}

/// Check whether `pos` is a legal move.
///
/// `stone` is accepted for symmetry with the rest of the rules API; legality
/// does not depend on who is moving.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos, _stone: Stone) -> bool {
    board.is_empty(pos) && is_adjacent_to_stone(board, pos)
}

/// Generate all legal moves in row-major order.
///
/// Returns an empty vector when no empty cell borders a mark (full board,
/// or a board with no marks at all).
#[must_use]
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_valid_move(board, pos, stone))
        .collect()
}
