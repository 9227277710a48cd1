//! Bitboard representation
//!
//! Provides efficient bit-level operations for board state representation

use crate::types::Square;

/// Bitboard (64 squares)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard
    pub const EMPTY: Self = Bitboard(0);

    /// All squares set
    pub const ALL: Self = Bitboard(u64::MAX);

    /// Create bitboard with single square set
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        debug_assert!(sq.0 < 64);
        Bitboard(1u64 << sq.0)
    }

    /// Set bit at square
    #[inline]
    pub fn set(&mut self, sq: Square) {
        debug_assert!(sq.0 < 64);
        self.0 |= 1u64 << sq.0;
    }

    /// Clear bit at square
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        debug_assert!(sq.0 < 64);
        self.0 &= !(1u64 << sq.0);
    }

    /// Test bit at square
    #[inline]
    pub const fn test(&self, sq: Square) -> bool {
        debug_assert!(sq.0 < 64);
        (self.0 >> sq.0) & 1 != 0
    }

    /// Pop least significant bit
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let lsb = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1; // Clear LSB
        Some(Square(lsb))
    }

    /// Get least significant bit without popping
    #[inline]
    pub const fn lsb(&self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        Some(Square(self.0.trailing_zeros() as u8))
    }

    /// Count set bits
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Check if empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_not_empty(&self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/// Iterator popping squares from the least significant bit upward.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitboard_operations() {
        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());

        let sq = Square::parse("e4").unwrap();
        bb.set(sq);
        assert!(bb.test(sq));
        assert_eq!(bb.count(), 1);

        bb.clear(sq);
        assert!(!bb.test(sq));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_bitboard_pop_lsb() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::parse("a1").unwrap());
        bb.set(Square::parse("e4").unwrap());
        bb.set(Square::parse("h8").unwrap());

        assert_eq!(bb.pop_lsb(), Square::parse("a1"));
        assert_eq!(bb.pop_lsb(), Square::parse("e4"));
        assert_eq!(bb.pop_lsb(), Square::parse("h8"));
        assert_eq!(bb.pop_lsb(), None);
    }

    #[test]
    fn test_bitboard_iter_matches_count() {
        let bb = Bitboard(0x8100_0000_0000_0081);
        let squares: Vec<Square> = bb.iter().collect();
        assert_eq!(squares.len(), bb.count() as usize);
        assert_eq!(squares, vec![Square(0), Square(7), Square(56), Square(63)]);
    }
}
