//! Material and placement evaluation

use super::Evaluator;
use crate::board::Board;
use crate::types::{Color, PieceType, Square};

/// Fixed piece weights in centipawns. The king carries no material value.
#[inline]
pub const fn piece_value(pt: PieceType) -> i32 {
    match pt {
        PieceType::Pawn => 100,
        PieceType::Knight => 300,
        PieceType::Khon => 250,
        PieceType::Rook => 500,
        PieceType::Met => 200,
        PieceType::King => 0,
        PieceType::PromotedPawn => 200,
    }
}

/// Placement bonus favoring central squares, a1 = index 0.
/// Symmetric in both axes, so it applies unchanged to either color.
#[rustfmt::skip]
pub const CENTER_TABLE: [i32; Square::NUM] = [
    0,  2,  4,  6,  6,  4,  2,  0,
    2,  6,  8, 10, 10,  8,  6,  2,
    4,  8, 14, 18, 18, 14,  8,  4,
    6, 10, 18, 24, 24, 18, 10,  6,
    6, 10, 18, 24, 24, 18, 10,  6,
    4,  8, 14, 18, 18, 14,  8,  4,
    2,  6,  8, 10, 10,  8,  6,  2,
    0,  2,  4,  6,  6,  4,  2,  0,
];

/// Material plus placement, summed over every set bit of every piece mask.
pub fn evaluate_material(board: &Board) -> i32 {
    let mut score = 0;
    for color in Color::ALL {
        let sign = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        for pt in PieceType::ALL {
            for sq in board.pieces(color, pt) {
                let placement = if pt == PieceType::King { 0 } else { CENTER_TABLE[sq.index()] };
                score += sign * (piece_value(pt) + placement);
            }
        }
    }
    score
}

/// Fast evaluator: material + placement only.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate_material(board)
    }
}
