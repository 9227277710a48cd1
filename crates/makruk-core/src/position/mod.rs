//! 局面表現モジュール
//!
//! - `Position`: 局面本体（盤面・手番・手数・ハッシュ・カウントダウン・出現回数）
//! - `Zobrist`: 局面ハッシュ（全計算と差分更新）
//! - `Countdown`: Makruk の数え（カウント）ルール
//! - 局面文字列の解析・出力
//!
//! The running hash is only ever updated through `update_hash_for_move`, and
//! must always equal `compute_hash` of the board and side to move.

mod countdown;
mod fen;
mod pos;
mod zobrist;

pub use countdown::{BOARD_POWER_TARGET, Countdown, CountdownKind, piece_power_target};
pub use fen::{FenError, STARTING_FEN};
pub use pos::{Outcome, Position, RepetitionMap};
pub use zobrist::{ZOBRIST, ZobristTable, compute_hash, update_hash_for_move};
