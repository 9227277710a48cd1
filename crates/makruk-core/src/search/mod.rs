//! Search engine for Makruk
//!
//! Minimax with alpha-beta pruning over White-perspective scores: White
//! nodes maximize, Black nodes minimize. Leaves are resolved by a
//! captures-only quiescence search.

mod error;
mod node;
mod options;
mod ordering;
pub mod parallel;
mod search_basic;

pub use error::SearchError;
pub use options::SearchOptions;
pub use ordering::{move_order_score, order_moves};
pub use search_basic::Searcher;

use serde::{Deserialize, Serialize};

use crate::types::{Color, Move};

/// Score of a checkmate, positive when White delivers it.
pub const SCORE_INFINITE: i32 = 1_000_000;

/// Score of any drawn position
pub const SCORE_DRAW: i32 = 0;

/// Score for a side that is checkmated (White-perspective).
#[inline]
pub const fn mated_score(side: Color) -> i32 {
    match side {
        Color::White => -SCORE_INFINITE,
        Color::Black => SCORE_INFINITE,
    }
}

/// Search result
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move found; `None` when the root is terminal
    pub best_move: Option<Move>,
    /// Evaluation score (White perspective)
    pub score: i32,
    /// Nodes searched
    pub nodes: u64,
    /// Depth of the last completed iteration
    pub depth: u8,
}

impl SearchResult {
    pub fn new(best_move: Option<Move>, score: i32, nodes: u64, depth: u8) -> Self {
        SearchResult { best_move, score, nodes, depth }
    }

    /// Result for a root position that is already decided.
    pub fn terminal(score: i32, depth: u8) -> Self {
        SearchResult { best_move: None, score, nodes: 0, depth }
    }
}
