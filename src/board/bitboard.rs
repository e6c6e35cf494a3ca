//! Bitboard implementation for fast occupancy checks

use super::{Pos, TOTAL_CELLS};

/// Mask covering every cell on the board
const FULL_MASK: u32 = (1u32 << TOTAL_CELLS) - 1;

/// Bitboard representation of one player's marks.
/// A single u32 holds all 30 cells, bit index = `Pos::to_index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u32,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u32 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if every cell is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits & FULL_MASK == FULL_MASK
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u32,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        Some(Pos::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(4, 5);
        assert!(!bb.get(pos));
        assert_eq!(bb.count(), 0);
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(3, 1));
        bb.set(Pos::new(0, 4));
        bb.set(Pos::new(2, 2));
        let cells: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(cells, vec![Pos::new(0, 4), Pos::new(2, 2), Pos::new(3, 1)]);
    }

    #[test]
    fn test_is_full() {
        let mut bb = Bitboard::new();
        for idx in 0..TOTAL_CELLS {
            assert!(!bb.is_full());
            bb.set(Pos::from_index(idx));
        }
        assert!(bb.is_full());
    }
}
