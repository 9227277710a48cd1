//! ビットボードモジュール
//!
//! 64マスの盤面を `u64` で表現し、ビット演算と利き計算を提供する。
//!
//! - `Bitboard`: 64bit盤面表現（a1 = bit 0, h8 = bit 63）
//! - 近接駒の利きテーブル（Bia・Ma・Khon・Met・Khun）
//! - 遠方駒（Ruea）の利き計算は盤面を受け取ってレイを走査する

mod core;
mod sliders;
mod tables;

pub use self::core::{Bitboard, BitboardIter};
pub use sliders::rook_attacks;
#[cfg(test)]
pub(crate) use sliders::{bishop_attacks, queen_attacks};
pub use tables::{
    diagonal_attacks, khon_attacks, king_attacks, knight_attacks, pawn_attacks, pawn_pushes,
    promotion_zone,
};
