//! Zobrist hashing for position identification
//!
//! Provides fast incremental hash computation for the transposition table
//! and repetition detection

use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::Board;
use crate::types::{Color, Move, PieceType, Square};

/// Zobrist hash tables
pub struct ZobristTable {
    /// Hash values for pieces on squares \[color\]\[piece_type\]\[square\]
    pub piece_square: [[[u64; Square::NUM]; PieceType::NUM]; Color::NUM],

    /// Hash value for side to move (Black)
    pub side_to_move: u64,
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristTable {
    /// Create new Zobrist table with random values
    pub fn new() -> Self {
        // Use fixed seed for reproducibility
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x4D41_4B52_554B_2023);

        let mut table = ZobristTable {
            piece_square: [[[0; Square::NUM]; PieceType::NUM]; Color::NUM],
            side_to_move: rng.random(),
        };

        for color in 0..Color::NUM {
            for pt in 0..PieceType::NUM {
                for sq in 0..Square::NUM {
                    table.piece_square[color][pt][sq] = rng.random();
                }
            }
        }

        table
    }

    /// Get hash value for a piece on a square
    #[inline]
    pub fn psq(&self, color: Color, pt: PieceType, sq: Square) -> u64 {
        self.piece_square[color.index()][pt.index()][sq.index()]
    }

    /// Get hash value for side to move
    #[inline]
    pub fn side(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.side_to_move,
        }
    }
}

// Global Zobrist table instance
lazy_static! {
    pub static ref ZOBRIST: ZobristTable = ZobristTable::new();
}

/// Compute the hash from scratch. O(pieces).
pub fn compute_hash(board: &Board, side_to_move: Color) -> u64 {
    let mut hash = 0u64;

    for color in Color::ALL {
        for pt in PieceType::ALL {
            for sq in board.pieces(color, pt) {
                hash ^= ZOBRIST.psq(color, pt, sq);
            }
        }
    }

    hash ^ ZOBRIST.side(side_to_move)
}

/// Incremental O(1) update for `mv`. Matches `compute_hash` of the resulting position.
#[inline]
pub fn update_hash_for_move(hash: u64, mv: &Move) -> u64 {
    let mut hash = hash;

    // Remove moving piece from source
    hash ^= ZOBRIST.psq(mv.color, mv.piece, mv.from);

    // Remove captured piece if any
    if let Some(captured) = mv.captured {
        hash ^= ZOBRIST.psq(mv.color.opponent(), captured, mv.to);
    }

    // Place the (possibly promoted) piece on the destination
    hash ^= ZOBRIST.psq(mv.color, mv.landing_piece(), mv.to);

    hash ^ ZOBRIST.side_to_move
}
