//! Heuristic evaluation function for board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! A decided board scores ±infinity; any other board is scored by counting
//! open-ended runs of two and three marks for both sides.

use crate::board::{Board, Pos, Stone, COLS, ROWS};
use crate::rules::{has_four_in_row, LINE_DIRECTIONS};

use super::patterns::{PatternCounts, PatternKind, PatternScore};
use super::Score;

/// Run lengths that contribute to the score
const RUN_LENGTHS: [usize; 2] = [2, 3];

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - `+infinity` means `color` already has four in a row
/// - `-infinity` means the opponent does
/// - otherwise own pattern rewards minus opponent pattern penalties
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> Score {
    let opponent = color.opponent();

    if has_four_in_row(board, color) {
        return PatternScore::WIN;
    }
    if has_four_in_row(board, opponent) {
        return -PatternScore::WIN;
    }

    let mine = count_patterns(board, color);
    let theirs = count_patterns(board, opponent);

    mine.own_score() - theirs.opponent_score()
}

/// Evaluate the board with the global sign convention: higher favours X.
#[must_use]
pub fn evaluate_board(board: &Board) -> Score {
    evaluate(board, Stone::X)
}

/// Count every qualifying run of 2 and 3 marks for `color`.
///
/// Every start cell, direction and length is checked independently, so
/// overlapping runs (the two pairs inside a three, for example) are all
/// counted.
pub fn count_patterns(board: &Board, color: Stone) -> PatternCounts {
    let mut counts = PatternCounts::default();

    for row in 0..ROWS {
        for col in 0..COLS {
            let start = Pos::new(row as u8, col as u8);
            if board.get(start) != color {
                continue;
            }
            for &(dr, dc) in &LINE_DIRECTIONS {
                for len in RUN_LENGTHS {
                    if let Some(kind) = classify_run(board, start, dr, dc, len, color) {
                        counts.add(kind);
                    }
                }
            }
        }
    }

    counts
}

/// Classify the run of `len` cells starting at `start` along `(dr, dc)`.
///
/// The run qualifies only if every cell holds `color`. Its ends are the
/// cell just before `start` and the cell just after the last mark; each is
/// open when on the board and empty.
fn classify_run(
    board: &Board,
    start: Pos,
    dr: i32,
    dc: i32,
    len: usize,
    color: Stone,
) -> Option<PatternKind> {
    let len_i = len as i32;
    for i in 0..len_i {
        let cell = start.offset(dr * i, dc * i)?;
        if board.get(cell) != color {
            return None;
        }
    }

    let is_open = |cell: Option<Pos>| cell.is_some_and(|p| board.is_empty(p));
    let before = is_open(start.offset(-dr, -dc));
    let after = is_open(start.offset(dr * len_i, dc * len_i));

    PatternKind::classify(len, u8::from(before) + u8::from(after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new(), Stone::X), 0.0);
        assert_eq!(evaluate(&Board::new(), Stone::O), 0.0);
    }

    #[test]
    fn test_evaluate_initial_board() {
        // Two lone marks form no runs
        assert_eq!(evaluate_board(&Board::initial()), 0.0);
    }

    #[test]
    fn test_evaluate_winning_position() {
        let board = Board::from_rows(["XXXX  ", "OOO   ", "      ", "      ", "      "]);
        assert_eq!(evaluate(&board, Stone::X), Score::INFINITY);
        assert_eq!(evaluate(&board, Stone::O), Score::NEG_INFINITY);
        assert_eq!(evaluate_board(&board), Score::INFINITY);
    }

    #[test]
    fn test_evaluate_losing_position() {
        let board = Board::from_rows(["      ", "  O   ", "  O   ", "  O  X", "  O  X"]);
        assert_eq!(evaluate_board(&board), Score::NEG_INFINITY);
    }

    #[test]
    fn test_open_three_horizontal() {
        let board = Board::from_rows(["      ", "      ", " XXX  ", "      ", "      "]);
        let counts = count_patterns(&board, Stone::X);
        assert_eq!(counts.open_three, 1);
        assert_eq!(counts.closed_three, 0);
        // The two inner pairs each border the third mark on one side
        assert_eq!(counts.closed_two, 2);
        assert_eq!(counts.open_two, 0);
        assert_eq!(evaluate(&board, Stone::X), 210.0);
    }

    #[test]
    fn test_open_three_adds_at_least_200() {
        let without = Board::from_rows(["      ", "O     ", "      ", "      ", "      "]);
        let with = Board::from_rows(["      ", "O     ", " XXX  ", "      ", "      "]);
        let gain = evaluate(&with, Stone::X) - evaluate(&without, Stone::X);
        assert!(gain >= 200.0, "gain was {}", gain);
    }

    #[test]
    fn test_three_against_edge() {
        let board = Board::from_rows(["      ", "      ", "XXX   ", "      ", "      "]);
        let counts = count_patterns(&board, Stone::X);
        assert_eq!(counts.closed_three, 1);
        assert_eq!(counts.open_three, 0);
        // Edge pair has no open end at all; inner pair has one
        assert_eq!(counts.closed_two, 1);
        assert_eq!(evaluate(&board, Stone::X), 155.0);
    }

    #[test]
    fn test_fully_blocked_three_scores_nothing() {
        let board = Board::from_rows(["      ", "      ", "OXXXO ", "      ", "      "]);
        let counts = count_patterns(&board, Stone::X);
        assert_eq!(counts.open_three, 0);
        assert_eq!(counts.closed_three, 0);
    }

    #[test]
    fn test_open_two_vertical() {
        let board = Board::from_rows(["      ", "   O  ", "   O  ", "      ", "      "]);
        let counts = count_patterns(&board, Stone::O);
        assert_eq!(counts.open_two, 1);
        assert_eq!(evaluate(&board, Stone::O), 20.0);
        assert_eq!(evaluate(&board, Stone::X), -15.0);
    }

    #[test]
    fn test_diagonal_pattern() {
        let board = Board::from_rows(["      ", " X    ", "  X   ", "   X  ", "      "]);
        let counts = count_patterns(&board, Stone::X);
        assert_eq!(counts.open_three, 1);
        assert_eq!(counts.closed_two, 2);
    }

    #[test]
    fn test_anti_diagonal_pattern() {
        let board = Board::from_rows(["      ", "   O  ", "  O   ", " O    ", "      "]);
        let counts = count_patterns(&board, Stone::O);
        assert_eq!(counts.open_three, 1);
    }

    #[test]
    fn test_evaluate_perspective_asymmetric() {
        let board = Board::from_rows(["      ", "      ", " XXX  ", "      ", "      "]);
        assert_eq!(evaluate(&board, Stone::X), 210.0);
        // Seen from O the same three costs 80 + 2 * 2
        assert_eq!(evaluate(&board, Stone::O), -84.0);
    }

    #[test]
    fn test_evaluate_deterministic() {
        let board = Board::from_rows(["  X   ", " OXO  ", " XOX  ", "  O   ", "      "]);
        let first = evaluate(&board, Stone::O);
        for _ in 0..10 {
            assert_eq!(evaluate(&board, Stone::O), first);
        }
    }
}
