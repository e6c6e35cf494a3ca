//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone, COLS, ROWS};

/// Starting cell for X (row 3, column 4 in 1-based numbering)
pub const X_START: Pos = Pos { row: 2, col: 3 };
/// Starting cell for O (row 3, column 3 in 1-based numbering)
pub const O_START: Pos = Pos { row: 2, col: 2 };

/// Game board: one bitboard per player.
///
/// The board is `Copy`; search applies hypothetical moves to copies and
/// never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks bitboard
    pub x: Bitboard,
    /// O marks bitboard
    pub o: Bitboard,
}

impl Board {
    /// Create a board with every cell empty
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Create the game's starting position: X and O on the two centre cells.
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.place_stone(X_START, Stone::X);
        board.place_stone(O_START, Stone::O);
        board
    }

    #[inline]
    pub fn rows(&self) -> usize {
        ROWS
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.x.get(pos) {
            Stone::X
        } else if self.o.get(pos) {
            Stone::O
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a stone in place. Returns `false` and leaves the board
    /// untouched if the cell is already occupied.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        match stone {
            Stone::X => self.x.set(pos),
            Stone::O => self.o.set(pos),
            Stone::Empty => return false,
        }
        true
    }

    /// Return a copy of this board with `stone` placed at `pos`.
    /// Placing on an occupied cell yields an identical board.
    #[must_use]
    pub fn apply_move(&self, pos: Pos, stone: Stone) -> Board {
        let mut next = *self;
        next.place_stone(pos, stone);
        next
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::X => Some(&self.x),
            Stone::O => Some(&self.o),
            Stone::Empty => None,
        }
    }

    /// Bitboard of every occupied cell
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(self.o)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Build a board from text rows, one string per row.
    /// 'X' and 'O' place marks, any other character leaves the cell empty.
    pub fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(COLS).enumerate() {
                let stone = match ch {
                    'X' => Stone::X,
                    'O' => Stone::O,
                    _ => continue,
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        board
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..ROWS * COLS).map(move |idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }
}
