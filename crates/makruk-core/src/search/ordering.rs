//! Move ordering
//!
//! TT move → captures (MVV-LVA) → promotions → quiet moves.
//! The sort is stable, so ties keep generator order.

use std::cmp::Reverse;

use crate::eval::piece_value;
use crate::types::{Move, MoveList};

const TT_MOVE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 100_000;
const PROMOTION_SCORE: i32 = 50_000;

/// Ordering key of `mv`; larger is searched first.
#[inline]
pub fn move_order_score(mv: &Move, tt_move: Option<Move>) -> i32 {
    if tt_move == Some(*mv) {
        return TT_MOVE_SCORE;
    }
    match mv.captured {
        Some(victim) => CAPTURE_BASE + piece_value(victim) - piece_value(mv.piece),
        None if mv.is_promotion() => PROMOTION_SCORE,
        None => 0,
    }
}

pub fn order_moves(moves: &mut MoveList, tt_move: Option<Move>) {
    moves.sort_by_key(|mv| Reverse(move_order_score(mv, tt_move)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceType, Square};

    fn mv(from: &str, to: &str, piece: PieceType, captured: Option<PieceType>) -> Move {
        Move::new(
            Square::parse(from).unwrap(),
            Square::parse(to).unwrap(),
            piece,
            Color::White,
            captured,
            None,
        )
    }

    #[test]
    fn test_order_tiers() {
        let quiet = mv("b1", "c3", PieceType::Knight, None);
        let pawn_takes_rook = mv("d4", "e5", PieceType::Pawn, Some(PieceType::Rook));
        let rook_takes_pawn = mv("a1", "a5", PieceType::Rook, Some(PieceType::Pawn));
        let mut promo = mv("c5", "c6", PieceType::Pawn, None);
        promo.promotion = Some(PieceType::PromotedPawn);
        let tt = mv("h1", "h2", PieceType::Rook, None);

        let mut moves: MoveList =
            [quiet, rook_takes_pawn, promo, tt, pawn_takes_rook].into_iter().collect();
        order_moves(&mut moves, Some(tt));

        assert_eq!(moves.as_slice(), &[tt, pawn_takes_rook, rook_takes_pawn, promo, quiet]);
    }

    #[test]
    fn test_quiet_moves_keep_order() {
        let a = mv("b1", "c3", PieceType::Knight, None);
        let b = mv("g1", "f3", PieceType::Knight, None);
        let mut moves: MoveList = [a, b].into_iter().collect();
        order_moves(&mut moves, None);
        assert_eq!(moves.as_slice(), &[a, b]);
    }
}
