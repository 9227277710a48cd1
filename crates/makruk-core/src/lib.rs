//! # makruk-core
//!
//! Makruk（タイ将棋）エンジンのコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move）
//! - `bitboard`: ビットボード演算と利きテーブル
//! - `board`: 駒種毎のビットボードで表した盤面
//! - `movegen`: 合法手生成
//! - `position`: 局面表現、Zobrist ハッシュ、数えルール、局面文字列
//! - `eval`: 評価関数
//! - `tt`: 置換表（Transposition Table）
//! - `search`: 探索アルゴリズムとルート並列探索
//!
//! Scores are always from White's point of view.

// 基本型
pub mod types;

// 盤面表現
pub mod bitboard;
pub mod board;
pub mod position;

// 合法手生成
pub mod movegen;

// 評価
pub mod eval;

// 置換表
pub mod tt;

// 探索
pub mod search;

pub use board::Board;
pub use eval::{Evaluator, MaterialEvaluator, MobilityEvaluator};
pub use position::{FenError, Outcome, Position};
pub use search::parallel::{SharedBound, WorkerPool};
pub use search::{SCORE_DRAW, SCORE_INFINITE, SearchError, SearchOptions, SearchResult, Searcher};
pub use types::{Color, Move, Piece, PieceType, Square};
