//! Evaluation with a mobility term
//!
//! Generates the legal moves of both sides at every call, which is far more
//! expensive than the material evaluation.

use super::{Evaluator, evaluate_material};
use crate::board::Board;
use crate::movegen::generate_legal_moves;
use crate::types::Color;

/// Centipawns per legal move of difference.
pub const MOBILITY_WEIGHT: i32 = 4;

#[derive(Clone, Copy, Debug)]
pub struct MobilityEvaluator {
    pub weight: i32,
}

impl Default for MobilityEvaluator {
    fn default() -> Self {
        MobilityEvaluator { weight: MOBILITY_WEIGHT }
    }
}

impl MobilityEvaluator {
    pub fn mobility(board: &Board) -> i32 {
        let white = generate_legal_moves(board, Color::White).len() as i32;
        let black = generate_legal_moves(board, Color::Black).len() as i32;
        white - black
    }
}

impl Evaluator for MobilityEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        evaluate_material(board) + self.weight * Self::mobility(board)
    }
}
