//! 遠方駒（Ruea）の利きをレイ走査で計算する
//!
//! Magic tables are not used; each call walks the four orthogonal rays from
//! the source square and stops at the first occupied square (inclusive).

use super::Bitboard;
use crate::types::Square;

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[cfg(test)]
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[inline]
fn ray_attacks(sq: Square, occupied: Bitboard, dirs: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(df, dr) in dirs {
        let mut cur = sq;
        while let Some(next) = cur.offset(df, dr) {
            attacks.set(next);
            if occupied.test(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

/// Rook attacks from `sq` given the occupancy `occupied`.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ORTHOGONALS)
}

/// Long diagonal rays. Makruk has no such piece; kept for tests only.
#[cfg(test)]
pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &DIAGONALS)
}

#[cfg(test)]
pub(crate) fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}
