//! Evaluation functions
//!
//! - `MaterialEvaluator`: 駒価値 + 中央寄りの位置テーブル（高速）
//! - `MobilityEvaluator`: 上記 + 合法手数の差（低速、末端の精度重視）
//!
//! Which one the search uses is a caller choice; both implement `Evaluator`.

mod material;
mod mobility;

pub use material::{CENTER_TABLE, MaterialEvaluator, evaluate_material, piece_value};
pub use mobility::{MOBILITY_WEIGHT, MobilityEvaluator};

use crate::board::Board;

/// Trait for position evaluation
///
/// Contract:
/// - Returns a score in centipawns from White's perspective.
/// - Positive values favor White, negative values favor Black.
/// - Independent of the side to move.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Implement Evaluator for Arc<T> where T: Evaluator
impl<T: Evaluator + ?Sized> Evaluator for std::sync::Arc<T> {
    fn evaluate(&self, board: &Board) -> i32 {
        (**self).evaluate(board)
    }
}
