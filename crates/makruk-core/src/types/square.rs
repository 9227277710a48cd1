//! マス（Square）

use serde::{Deserialize, Serialize};

/// File index 0..8 (a..h).
pub type File = u8;
/// Rank index 0..8 (1..8).
pub type Rank = u8;

/// Board square, a1 = 0 .. h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square(pub u8);

impl Square {
    /// マスの数
    pub const NUM: usize = 64;

    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Build from signed coordinates, `None` when off the board.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> File {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.0 / 8
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Square offset by (df, dr), `None` when it leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Self> {
        Square::from_coords(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Parse algebraic notation such as `e3`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 { Some(Square::new(file, rank)) } else { None }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}
