//! Pseudo-legal and legal move generation

use super::attacks::is_in_check;
use crate::bitboard::{
    Bitboard, diagonal_attacks, khon_attacks, king_attacks, knight_attacks, pawn_attacks,
    pawn_pushes, promotion_zone, rook_attacks,
};
use crate::board::Board;
use crate::types::{Color, Move, MoveList, PieceType, Square};

/// Destination squares of a `pt` of `color` on `from`.
#[inline]
fn targets(board: &Board, color: Color, pt: PieceType, from: Square) -> Bitboard {
    let not_own = !board.occupied_by(color);
    match pt {
        PieceType::Pawn => {
            let quiet = pawn_pushes(color, from) & !board.occupied();
            let captures = pawn_attacks(color, from) & board.occupied_by(color.opponent());
            quiet | captures
        }
        PieceType::Knight => knight_attacks(from) & not_own,
        PieceType::Khon => khon_attacks(color, from) & not_own,
        PieceType::Rook => rook_attacks(from, board.occupied()) & not_own,
        PieceType::Met | PieceType::PromotedPawn => diagonal_attacks(from) & not_own,
        PieceType::King => king_attacks(from) & not_own,
    }
}

/// Moves obeying piece movement rules, without the king-safety check.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    let zone = promotion_zone(color);

    for pt in PieceType::ALL {
        for from in board.pieces(color, pt) {
            for to in targets(board, color, pt, from) {
                let captured = board.piece_at(to).map(|p| p.piece_type);
                let promotion =
                    (pt == PieceType::Pawn && zone.test(to)).then_some(PieceType::PromotedPawn);
                moves.push(Move::new(from, to, pt, color, captured, promotion));
            }
        }
    }

    moves
}

#[inline]
fn leaves_king_safe(board: &Board, mv: &Move) -> bool {
    let after = board.apply_move(mv);
    !is_in_check(&after, mv.color)
}

/// Pseudo-legal moves that do not leave the mover's king attacked.
pub fn generate_legal_moves(board: &Board, color: Color) -> MoveList {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| leaves_king_safe(board, mv))
        .collect()
}

/// Legal capturing moves only (quiescence search input).
pub fn generate_legal_captures(board: &Board, color: Color) -> MoveList {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| mv.is_capture() && leaves_king_safe(board, mv))
        .collect()
}

/// Whether `color` has at least one legal move. Stops at the first one.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    generate_pseudo_legal_moves(board, color).iter().any(|mv| leaves_king_safe(board, mv))
}

/// Count leaf nodes of the legal move tree.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(board, color);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves.iter().map(|mv| perft(&board.apply_move(mv), color.opponent(), depth - 1)).sum()
}
