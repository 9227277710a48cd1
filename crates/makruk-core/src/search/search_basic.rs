//! Alpha-beta searcher
//!
//! ノード毎の処理順:
//! 1. 経路依存の引き分け判定（千日手・カウント切れ・裸王）
//! 2. 置換表の参照
//! 3. 合法手なし → 詰み / ステイルメイト
//! 4. 残り深さ 0 → 静止探索
//! 5. 手の並べ替えと再帰

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use super::node::Node;
use super::ordering::order_moves;
use super::parallel::SharedBound;
use super::{SCORE_DRAW, SCORE_INFINITE, SearchOptions, SearchResult, mated_score};
use crate::eval::{Evaluator, MaterialEvaluator};
use crate::movegen::{generate_legal_captures, generate_legal_moves, is_in_check};
use crate::position::{Position, RepetitionMap};
use crate::tt::{NodeType, TTEntry, TranspositionTable};
use crate::types::{Move, MoveList};

/// Search engine
pub struct Searcher<E: Evaluator = MaterialEvaluator> {
    /// Evaluation function
    evaluator: E,
    tt: TranspositionTable,
    use_tt: bool,
    /// Node counter
    nodes: u64,
    /// Game history of the root position
    root_history: Arc<RepetitionMap>,
    /// Hashes of the nodes between the root and the current node
    path: Vec<u64>,
}

impl Default for Searcher<MaterialEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher<MaterialEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(MaterialEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        let options = SearchOptions::default();
        Searcher {
            evaluator,
            tt: TranspositionTable::new(options.tt_capacity),
            use_tt: options.use_tt,
            nodes: 0,
            root_history: Arc::default(),
            path: Vec::with_capacity(64),
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Nodes visited by the last root search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Apply table settings from `options`.
    pub fn set_options(&mut self, options: &SearchOptions) {
        self.use_tt = options.use_tt;
        if self.tt.capacity() != options.tt_capacity.max(1) {
            self.tt.resize(options.tt_capacity);
        }
        if options.clear_tt {
            self.tt.clear();
        }
    }

    /// Search position for best move
    ///
    /// A `depth` of 0 is treated as 1. Terminal and drawn roots return
    /// `best_move: None` without searching.
    pub fn find_best_move(
        &mut self,
        pos: &Position,
        depth: u8,
        options: &SearchOptions,
    ) -> SearchResult {
        let depth = depth.max(1);
        self.set_options(options);
        self.nodes = 0;

        let moves = pos.legal_moves();
        if let Some(result) = terminal_result(pos, &moves, depth) {
            debug!("root is terminal: score {}", result.score);
            return result;
        }

        let Some(limit) = options.time_limit() else {
            return self.search_root_moves(pos, &moves, depth, None);
        };

        let start = Instant::now();
        let mut total_nodes = 0;
        let mut result = SearchResult::terminal(SCORE_DRAW, 0);
        for iteration in 1..=depth {
            result = self.search_root_moves(pos, &moves, iteration, None);
            total_nodes += result.nodes;
            debug!(
                "iteration {} score {} nodes {} elapsed {:?}",
                iteration,
                result.score,
                result.nodes,
                start.elapsed()
            );
            if iteration < depth && start.elapsed() >= limit {
                info!("time limit reached after depth {iteration}");
                break;
            }
        }
        result.nodes = total_nodes;
        result
    }

    /// Root loop over an explicit move list.
    ///
    /// With a `shared` bound the window is tightened before every move and
    /// each new local best is published to it.
    pub fn search_root_moves(
        &mut self,
        pos: &Position,
        moves: &[Move],
        depth: u8,
        shared: Option<&SharedBound>,
    ) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 1;
        self.root_history = Arc::clone(pos.history());
        self.path.clear();

        let root = Node::root(pos);
        let maximizing = root.is_maximizing();

        let mut ordered: MoveList = moves.iter().copied().collect();
        let tt_move = self.probe_move(root.hash);
        order_moves(&mut ordered, tt_move);

        let mut alpha = -SCORE_INFINITE;
        let mut beta = SCORE_INFINITE;
        let mut best_score = if maximizing { -SCORE_INFINITE } else { SCORE_INFINITE };
        let mut best_move = None;

        for mv in ordered {
            if let Some(bound) = shared {
                if maximizing {
                    alpha = alpha.max(bound.get());
                } else {
                    beta = beta.min(bound.get());
                }
            }

            let child = root.child(&mv);
            self.path.push(child.hash);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta);
            self.path.pop();

            let improved = if maximizing { score > best_score } else { score < best_score };
            if best_move.is_none() || improved {
                best_score = score;
                best_move = Some(mv);
                if let Some(bound) = shared {
                    bound.improve(score);
                }
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        // A shared window makes the root score a bound, not exact
        if shared.is_none() {
            self.store(
                root.hash,
                depth,
                best_score,
                -SCORE_INFINITE,
                SCORE_INFINITE,
                best_move,
            );
        }

        if let Some(mv) = best_move {
            debug!("depth {} best {} score {} nodes {}", depth, mv, best_score, self.nodes);
        }
        SearchResult::new(best_move, best_score, self.nodes, depth)
    }

    fn alpha_beta(&mut self, node: &Node, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if self.is_path_draw(node) {
            return SCORE_DRAW;
        }

        let (orig_alpha, orig_beta) = (alpha, beta);
        let mut tt_move = None;
        if self.use_tt {
            if let Some(entry) = self.tt.probe(node.hash) {
                tt_move = entry.best_move;
                if entry.is_deep_enough(depth) {
                    match entry.node_type {
                        NodeType::Exact => return entry.score,
                        NodeType::LowerBound => alpha = alpha.max(entry.score),
                        NodeType::UpperBound => beta = beta.min(entry.score),
                    }
                    if alpha >= beta {
                        return entry.score;
                    }
                }
            }
        }

        let mut moves = generate_legal_moves(&node.board, node.side);
        if moves.is_empty() {
            return if is_in_check(&node.board, node.side) {
                mated_score(node.side)
            } else {
                SCORE_DRAW
            };
        }

        if depth == 0 {
            return self.quiescence(node, alpha, beta);
        }

        order_moves(&mut moves, tt_move);

        let maximizing = node.is_maximizing();
        let mut best_score = if maximizing { -SCORE_INFINITE } else { SCORE_INFINITE };
        let mut best_move = None;

        for mv in moves {
            let child = node.child(&mv);
            self.path.push(child.hash);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta);
            self.path.pop();

            if maximizing {
                if best_move.is_none() || score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if best_move.is_none() || score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        self.store(node.hash, depth, best_score, orig_alpha, orig_beta, best_move);
        best_score
    }

    /// Captures-only search with a stand-pat bound.
    fn quiescence(&mut self, node: &Node, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = self.evaluator.evaluate(&node.board);
        let maximizing = node.is_maximizing();
        if maximizing {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return stand_pat;
            }
            beta = beta.min(stand_pat);
        }

        let mut captures = generate_legal_captures(&node.board, node.side);
        order_moves(&mut captures, None);

        let mut best_score = stand_pat;
        for mv in captures {
            let child = node.child(&mv);
            let score = self.quiescence(&child, alpha, beta);

            if maximizing {
                best_score = best_score.max(score);
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best_score
    }

    /// Draws that depend on the path from the game start.
    fn is_path_draw(&self, node: &Node) -> bool {
        if node.board.is_bare_kings() || node.is_countdown_expired() {
            return true;
        }
        let earlier = self.root_history.get(&node.hash).copied().unwrap_or(0);
        let on_path = self.path.iter().filter(|&&h| h == node.hash).count() as u32;
        earlier + on_path >= 3
    }

    fn probe_move(&self, hash: u64) -> Option<Move> {
        if !self.use_tt {
            return None;
        }
        self.tt.probe(hash).and_then(|entry| entry.best_move)
    }

    fn store(
        &mut self,
        hash: u64,
        depth: u8,
        score: i32,
        alpha: i32,
        beta: i32,
        best_move: Option<Move>,
    ) {
        if !self.use_tt {
            return;
        }
        let node_type = NodeType::from_window(score, alpha, beta);
        self.tt.store(hash, TTEntry::new(depth, score, node_type, best_move));
    }
}

/// Result for a root that needs no search: mate, stalemate or a rule draw.
pub(crate) fn terminal_result(pos: &Position, moves: &[Move], depth: u8) -> Option<SearchResult> {
    if moves.is_empty() {
        let score = if pos.is_check() { mated_score(pos.side_to_move()) } else { SCORE_DRAW };
        return Some(SearchResult::terminal(score, depth));
    }
    if pos.is_rule_draw() {
        return Some(SearchResult::terminal(SCORE_DRAW, depth));
    }
    None
}
