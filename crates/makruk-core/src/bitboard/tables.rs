//! Attack tables and piece movement patterns
//!
//! Pre-computed attack patterns for the step pieces. Tables are built once on
//! first access and depend only on the square index.

use lazy_static::lazy_static;

use super::Bitboard;
use crate::types::{Color, Square};

const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);

const KNIGHT_DELTAS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];

const KING_DELTAS: [(i8, i8); 8] =
    [(0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1)];

const DIAGONAL_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Pre-computed attack tables
struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    /// Met and PromotedPawn share this table
    diagonal: [Bitboard; 64],
    /// \[color\]\[square\]
    khon: [[Bitboard; 64]; 2],
    /// \[color\]\[square\] forward diagonals
    pawn_attacks: [[Bitboard; 64]; 2],
    /// \[color\]\[square\] single forward step
    pawn_pushes: [[Bitboard; 64]; 2],
    /// \[color\]
    promotion_zone: [Bitboard; 2],
}

fn step_mask(sq: Square, deltas: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    for &(df, dr) in deltas {
        if let Some(to) = sq.offset(df, dr) {
            bb.set(to);
        }
    }
    bb
}

impl AttackTables {
    fn new() -> Self {
        let mut tables = AttackTables {
            knight: [Bitboard::EMPTY; 64],
            king: [Bitboard::EMPTY; 64],
            diagonal: [Bitboard::EMPTY; 64],
            khon: [[Bitboard::EMPTY; 64]; 2],
            pawn_attacks: [[Bitboard::EMPTY; 64]; 2],
            pawn_pushes: [[Bitboard::EMPTY; 64]; 2],
            promotion_zone: [Bitboard::EMPTY; 2],
        };

        for sq in Square::all() {
            let i = sq.index();
            tables.knight[i] = step_mask(sq, &KNIGHT_DELTAS);
            tables.king[i] = step_mask(sq, &KING_DELTAS);
            tables.diagonal[i] = step_mask(sq, &DIAGONAL_DELTAS);

            for color in Color::ALL {
                let fwd = color.forward();
                let c = color.index();
                let push = step_mask(sq, &[(0, fwd)]);
                tables.pawn_pushes[c][i] = push;
                tables.pawn_attacks[c][i] = step_mask(sq, &[(-1, fwd), (1, fwd)]);
                tables.khon[c][i] = tables.diagonal[i] | push;
            }
        }

        // White promotes on ranks 6-8, Black on ranks 3-1
        tables.promotion_zone[Color::White.index()] = Bitboard(RANK_1.0 << 40 | RANK_1.0 << 48 | RANK_1.0 << 56);
        tables.promotion_zone[Color::Black.index()] = Bitboard(RANK_1.0 | RANK_1.0 << 8 | RANK_1.0 << 16);

        tables
    }
}

lazy_static! {
    static ref ATTACKS: AttackTables = AttackTables::new();
}

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    ATTACKS.knight[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    ATTACKS.king[sq.index()]
}

/// One-step diagonal moves (Met, PromotedPawn).
#[inline]
pub fn diagonal_attacks(sq: Square) -> Bitboard {
    ATTACKS.diagonal[sq.index()]
}

#[inline]
pub fn khon_attacks(color: Color, sq: Square) -> Bitboard {
    ATTACKS.khon[color.index()][sq.index()]
}

/// Capture targets of a pawn of `color` standing on `sq`.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    ATTACKS.pawn_attacks[color.index()][sq.index()]
}

/// Quiet push target of a pawn of `color` standing on `sq`.
#[inline]
pub fn pawn_pushes(color: Color, sq: Square) -> Bitboard {
    ATTACKS.pawn_pushes[color.index()][sq.index()]
}

/// Far three ranks for `color`.
#[inline]
pub fn promotion_zone(color: Color) -> Bitboard {
    ATTACKS.promotion_zone[color.index()]
}
