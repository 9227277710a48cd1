//! Parallel root search
//!
//! ルート手を round-robin で各ワーカーに配り、ワーカー毎に独立した
//! `Searcher`（置換表も別）で探索する。共有するのは `SharedBound` のみ。

mod shared;
mod thread_pool;

pub use shared::SharedBound;
pub use thread_pool::WorkerPool;

use std::cmp::Ordering;

use crate::search::{SCORE_DRAW, SearchResult};
use crate::types::{Color, Move};

/// Deal move `i` to worker `i mod workers`. Always returns `workers.max(1)` buckets.
pub fn partition_round_robin(moves: &[Move], workers: usize) -> Vec<Vec<Move>> {
    let workers = workers.max(1);
    let mut buckets = vec![Vec::with_capacity(moves.len() / workers + 1); workers];
    for (i, mv) in moves.iter().enumerate() {
        buckets[i % workers].push(*mv);
    }
    buckets
}

/// Merge worker results in worker order.
///
/// The best score for `side` wins, the earliest worker on ties. Node counts
/// are summed.
pub fn combine_results(side: Color, results: Vec<SearchResult>) -> SearchResult {
    let total_nodes: u64 = results.iter().map(|r| r.nodes).sum();
    let max_depth = results.iter().map(|r| r.depth).max().unwrap_or(0);

    let mut best: Option<SearchResult> = None;
    for result in results {
        let replace = match &best {
            Some(current) => prefers(side, &result, current),
            None => true,
        };
        if replace {
            best = Some(result);
        }
    }

    let mut final_result = best.unwrap_or_else(|| SearchResult::terminal(SCORE_DRAW, 0));
    final_result.nodes = total_nodes;
    final_result.depth = max_depth;
    final_result
}

fn prefers(side: Color, candidate: &SearchResult, current: &SearchResult) -> bool {
    match (candidate.best_move.is_some(), current.best_move.is_some()) {
        (true, false) => return true,
        (false, true) => return false,
        _ => {}
    }

    let ord = candidate.score.cmp(&current.score);
    match side {
        Color::White => ord == Ordering::Greater,
        Color::Black => ord == Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_partition_round_robin() {
        let moves: Vec<Move> = Position::startpos().legal_moves().to_vec();
        let parts = partition_round_robin(&moves, 4);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts.iter().map(Vec::len).sum::<usize>(), moves.len());
        assert_eq!(parts[1][0], moves[1]);
        assert_eq!(parts[1][1], moves[5]);
        assert_eq!(parts[3].len(), 5);

        let single = partition_round_robin(&moves, 0);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0], moves);
    }

    #[test]
    fn test_combine_prefers_side_and_earliest() {
        let moves = Position::startpos().legal_moves();
        let a = SearchResult::new(Some(moves[0]), 30, 10, 3);
        let b = SearchResult::new(Some(moves[1]), 50, 20, 3);
        let c = SearchResult::new(Some(moves[2]), 50, 5, 3);

        let white = combine_results(Color::White, vec![a.clone(), b.clone(), c.clone()]);
        assert_eq!(white.best_move, Some(moves[1]));
        assert_eq!(white.score, 50);
        assert_eq!(white.nodes, 35);

        let black = combine_results(Color::Black, vec![b, a, c]);
        assert_eq!(black.best_move, Some(moves[0]));
        assert_eq!(black.score, 30);
    }

    #[test]
    fn test_combine_empty() {
        let result = combine_results(Color::White, Vec::new());
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }
}
