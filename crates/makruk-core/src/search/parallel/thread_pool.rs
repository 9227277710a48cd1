//! Worker pool for root-split search

use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use super::{SharedBound, combine_results, partition_round_robin};
use crate::eval::{Evaluator, MaterialEvaluator};
use crate::position::Position;
use crate::search::search_basic::terminal_result;
use crate::search::{SCORE_DRAW, SearchError, SearchOptions, SearchResult, Searcher};
use crate::types::Move;

/// Root-splitting searcher backed by a rayon thread pool.
pub struct WorkerPool<E = MaterialEvaluator>
where
    E: Evaluator + Clone + Send + Sync,
{
    pool: rayon::ThreadPool,
    threads: usize,
    evaluator: E,
}

impl WorkerPool<MaterialEvaluator> {
    pub fn new(threads: usize) -> Result<Self, SearchError> {
        Self::with_evaluator(threads, MaterialEvaluator)
    }
}

impl<E> WorkerPool<E>
where
    E: Evaluator + Clone + Send + Sync,
{
    /// Build a pool of `threads` workers (at least one).
    pub fn with_evaluator(threads: usize, evaluator: E) -> Result<Self, SearchError> {
        let threads = threads.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("makruk-worker-{i}"))
            .build()?;
        Ok(WorkerPool { pool, threads, evaluator })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// One worker: a fresh `Searcher` with its own table over `moves`.
    ///
    /// Always runs on a pool thread, also when called from outside the pool.
    pub fn search_subset(
        &self,
        position: &Position,
        moves: &[Move],
        depth: u8,
        options: &SearchOptions,
        shared: &SharedBound,
    ) -> SearchResult {
        self.pool.install(|| {
            let mut searcher = Searcher::with_evaluator(self.evaluator.clone());
            searcher.set_options(options);
            let result = searcher.search_root_moves(position, moves, depth, Some(shared));
            debug!(
                "worker done: {} moves score {} nodes {}",
                moves.len(),
                result.score,
                result.nodes
            );
            result
        })
    }

    /// Partition the root moves, search every subset on the pool and combine.
    ///
    /// With a time limit each deepening iteration is a full parallel pass
    /// with a fresh shared bound.
    pub fn find_best_move(
        &self,
        position: &Position,
        depth: u8,
        options: &SearchOptions,
    ) -> SearchResult {
        let depth = depth.max(1);
        let moves = position.legal_moves();
        if let Some(result) = terminal_result(position, &moves, depth) {
            return result;
        }

        let Some(limit) = options.time_limit() else {
            return self.search_iteration(position, &moves, depth, options);
        };

        let start = Instant::now();
        let mut total_nodes = 0;
        let mut result = SearchResult::terminal(SCORE_DRAW, 0);
        for iteration in 1..=depth {
            result = self.search_iteration(position, &moves, iteration, options);
            total_nodes += result.nodes;
            if iteration < depth && start.elapsed() >= limit {
                info!("time limit reached after depth {iteration}");
                break;
            }
        }
        result.nodes = total_nodes;
        result
    }

    fn search_iteration(
        &self,
        position: &Position,
        moves: &[Move],
        depth: u8,
        options: &SearchOptions,
    ) -> SearchResult {
        let subsets: Vec<Vec<Move>> = partition_round_robin(moves, self.threads)
            .into_iter()
            .filter(|subset| !subset.is_empty())
            .collect();
        let shared = SharedBound::for_side(position.side_to_move());

        let results: Vec<SearchResult> = self.pool.install(|| {
            subsets
                .par_iter()
                .map(|subset| self.search_subset(position, subset, depth, options, &shared))
                .collect()
        });

        let combined = combine_results(position.side_to_move(), results);
        debug!(
            "parallel depth {} score {} nodes {} workers {}",
            depth, combined.score, combined.nodes, subsets.len()
        );
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::search::SCORE_INFINITE;
    use std::sync::{Arc, Mutex};

    /// Material evaluator that records the name of every calling thread.
    #[derive(Clone, Default)]
    struct ThreadRecorder {
        names: Arc<Mutex<Vec<String>>>,
    }

    impl Evaluator for ThreadRecorder {
        fn evaluate(&self, board: &Board) -> i32 {
            let name = std::thread::current().name().unwrap_or("").to_string();
            self.names.lock().unwrap().push(name);
            MaterialEvaluator.evaluate(board)
        }
    }

    fn assert_pool_threads(names: &[String]) {
        assert!(!names.is_empty());
        for name in names {
            assert!(name.starts_with("makruk-worker-"), "evaluated on thread {name:?}");
        }
    }

    #[test]
    fn test_pool_builds_with_zero_threads() {
        let pool = WorkerPool::new(0).unwrap();
        assert_eq!(pool.threads(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential_startpos() {
        let pos = Position::startpos();
        let opts = SearchOptions::default();
        let sequential = Searcher::new().find_best_move(&pos, 2, &opts);

        let pool = WorkerPool::new(3).unwrap();
        let parallel = pool.find_best_move(&pos, 2, &opts);
        assert_eq!(parallel.score, sequential.score);
        assert!(parallel.best_move.is_some());
    }

    #[test]
    fn test_parallel_terminal_root() {
        let pos: Position = "R6k/8/6K1/8/8/8/8/8 b 1".parse().unwrap();
        let pool = WorkerPool::new(2).unwrap();
        let result = pool.find_best_move(&pos, 2, &SearchOptions::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, SCORE_INFINITE);
    }

    #[test]
    fn test_search_subset_runs_on_pool_threads() {
        let recorder = ThreadRecorder::default();
        let pool = WorkerPool::with_evaluator(2, recorder.clone()).unwrap();
        let pos = Position::startpos();
        let moves = pos.legal_moves();
        let shared = SharedBound::for_side(pos.side_to_move());

        let result = pool.search_subset(&pos, &moves[..4], 2, &SearchOptions::default(), &shared);
        assert!(result.best_move.is_some());
        assert_pool_threads(&recorder.names.lock().unwrap());
    }

    #[test]
    fn test_find_best_move_runs_on_pool_threads() {
        let recorder = ThreadRecorder::default();
        let pool = WorkerPool::with_evaluator(3, recorder.clone()).unwrap();
        let result = pool.find_best_move(&Position::startpos(), 2, &SearchOptions::default());
        assert!(result.best_move.is_some());
        assert_pool_threads(&recorder.names.lock().unwrap());
    }
}
