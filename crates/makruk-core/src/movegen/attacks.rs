//! Square attack detection

use crate::bitboard::{
    Bitboard, diagonal_attacks, khon_attacks, king_attacks, knight_attacks, pawn_attacks,
    rook_attacks,
};
use crate::board::Board;
use crate::types::{Color, PieceType, Square};

/// All pieces of `by` attacking `sq`.
///
/// Step pieces are found by looking up the attack pattern of the opposite
/// color from the target square, which is the reverse of `by`'s pattern.
pub fn attackers_to(board: &Board, sq: Square, by: Color) -> Bitboard {
    let defender = by.opponent();
    let pieces = |pt| board.pieces(by, pt);

    (pawn_attacks(defender, sq) & pieces(PieceType::Pawn))
        | (knight_attacks(sq) & pieces(PieceType::Knight))
        | (khon_attacks(defender, sq) & pieces(PieceType::Khon))
        | (diagonal_attacks(sq) & (pieces(PieceType::Met) | pieces(PieceType::PromotedPawn)))
        | (king_attacks(sq) & pieces(PieceType::King))
        | (rook_attacks(sq, board.occupied()) & pieces(PieceType::Rook))
}

/// Whether any piece of `by` attacks `sq`.
#[inline]
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attackers_to(board, sq, by).is_not_empty()
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}
