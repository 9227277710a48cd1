//! 指し手生成
//!
//! - `generate_pseudo_legal_moves`: 駒の動きのルールだけを満たす手
//! - `generate_legal_moves`: 各手を盤面のコピーに適用し、自玉に利きが無い手だけを残す
//! - `is_square_attacked`: 逆方向の利きパターンで攻撃駒を探す
//!
//! The legality filter simulates every move; it is the reference behavior
//! that any incremental pin/check scheme would have to match.

mod attacks;
mod generator;

pub use attacks::{attackers_to, is_in_check, is_square_attacked};
pub use generator::{
    generate_legal_captures, generate_legal_moves, generate_pseudo_legal_moves, has_legal_move,
    perft,
};
