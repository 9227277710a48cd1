//! Transposition table entry types

use serde::{Deserialize, Serialize};

use crate::types::Move;

/// How a stored score relates to the true value of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// Score is exact (searched inside the window)
    Exact,
    /// Score is a lower bound (fail high)
    LowerBound,
    /// Score is an upper bound (fail low)
    UpperBound,
}

impl NodeType {
    /// Classify `score` against the window the node was entered with.
    #[inline]
    pub fn from_window(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            NodeType::UpperBound
        } else if score >= beta {
            NodeType::LowerBound
        } else {
            NodeType::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Remaining depth the score was searched to
    pub depth: u8,
    pub score: i32,
    pub node_type: NodeType,
    pub best_move: Option<Move>,
}

impl TTEntry {
    #[inline]
    pub fn new(depth: u8, score: i32, node_type: NodeType, best_move: Option<Move>) -> Self {
        TTEntry { depth, score, node_type, best_move }
    }

    /// Usable for a search of `depth` remaining plies.
    #[inline]
    pub fn is_deep_enough(&self, depth: u8) -> bool {
        self.depth >= depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_from_window() {
        assert_eq!(NodeType::from_window(-10, -10, 10), NodeType::UpperBound);
        assert_eq!(NodeType::from_window(-50, -10, 10), NodeType::UpperBound);
        assert_eq!(NodeType::from_window(10, -10, 10), NodeType::LowerBound);
        assert_eq!(NodeType::from_window(0, -10, 10), NodeType::Exact);
    }

    #[test]
    fn test_depth_check() {
        let entry = TTEntry::new(3, 0, NodeType::Exact, None);
        assert!(entry.is_deep_enough(2));
        assert!(entry.is_deep_enough(3));
        assert!(!entry.is_deep_enough(4));
    }
}
