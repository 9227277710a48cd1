//! 基本型
//!
//! - `Color`: 手番（White が先手）
//! - `PieceType` / `Piece`: 駒種と色付きの駒
//! - `Square`: 0..64 のマス（a1 = 0, h8 = 63）
//! - `Move`: 生成時に取った駒・成りまで確定した指し手

mod color;
mod moves;
mod piece;
mod square;

pub use color::Color;
pub use moves::{Move, MoveList};
pub use piece::{Piece, PieceType};
pub use square::{File, Rank, Square};
