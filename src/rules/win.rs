//! Win condition checking
//!
//! A player wins with four marks in a row horizontally, vertically or along
//! either diagonal. The game is tied once the board is full with no winner.

use crate::board::{Board, Pos, Stone, COLS, ROWS};

use super::{LINE_DIRECTIONS, WIN_LENGTH};

/// Final state of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given player completed four in a row
    Winner(Stone),
    /// Board full, nobody won
    Tie,
}

/// Cells of the run of `N` starting at `start` along `(dr, dc)`,
/// or `None` if the run leaves the board.
#[inline]
fn run_cells<const N: usize>(start: Pos, dr: i32, dc: i32) -> Option<[Pos; N]> {
    let mut cells = [start; N];
    for (i, cell) in cells.iter_mut().enumerate().skip(1) {
        *cell = start.offset(dr * i as i32, dc * i as i32)?;
    }
    Some(cells)
}

/// Find the first four-in-a-row on the board.
///
/// Scan is row-major over start cells; at each start the directions are
/// tried in `LINE_DIRECTIONS` order. Returns the owner and the four cells.
pub fn find_four_line(board: &Board) -> Option<(Stone, [Pos; WIN_LENGTH])> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let start = Pos::new(row as u8, col as u8);
            let stone = board.get(start);
            if stone == Stone::Empty {
                continue;
            }

            for &(dr, dc) in &LINE_DIRECTIONS {
                let Some(line) = run_cells::<WIN_LENGTH>(start, dr, dc) else {
                    continue;
                };
                if line.iter().all(|&p| board.get(p) == stone) {
                    return Some((stone, line));
                }
            }
        }
    }
    None
}

/// Check if `stone` has four in a row anywhere on the board
pub fn has_four_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };

    stones.iter_ones().any(|start| {
        LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
            run_cells::<WIN_LENGTH>(start, dr, dc)
                .is_some_and(|line| line.iter().all(|&p| board.get(p) == stone))
        })
    })
}

/// Check whether the game is over.
///
/// Returns `Some(Outcome::Winner(_))` for a four-in-a-row, `Some(Outcome::Tie)`
/// for a full board without one, `None` while the game continues.
/// The win check runs first, so a full board with a four reports the winner.
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    if let Some((winner, _)) = find_four_line(board) {
        return Some(Outcome::Winner(winner));
    }
    if board.is_full() {
        return Some(Outcome::Tie);
    }
    None
}
