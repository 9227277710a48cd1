//! Position（局面本体）

use std::collections::HashMap;
use std::sync::Arc;

use super::countdown::Countdown;
use super::zobrist::{compute_hash, update_hash_for_move};
use crate::board::Board;
use crate::movegen::{generate_legal_moves, has_legal_move, is_in_check};
use crate::types::{Color, Move, MoveList, Square};

/// Occurrence count of every position hash seen in the game so far.
pub type RepetitionMap = HashMap<u64, u32>;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    Repetition,
    Countdown,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Game position.
///
/// Applying a move yields a new, independent `Position`. The repetition map
/// is copied on write, so earlier positions keep their own history.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    move_number: u32,
    hash: u64,
    countdown: Option<Countdown>,
    history: Arc<RepetitionMap>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Build a position with a fresh history containing only itself.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        move_number: u32,
        countdown: Option<Countdown>,
    ) -> Self {
        let hash = compute_hash(&board, side_to_move);
        let mut history = RepetitionMap::new();
        history.insert(hash, 1);

        Position {
            board,
            side_to_move,
            move_number,
            hash,
            countdown,
            history: Arc::new(history),
        }
    }

    /// 初期局面
    pub fn startpos() -> Self {
        Self::from_parts(Board::startpos(), Color::White, 1, None)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Full-move number, incremented after Black moves.
    #[inline]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn countdown(&self) -> Option<Countdown> {
        self.countdown
    }

    #[inline]
    pub fn history(&self) -> &Arc<RepetitionMap> {
        &self.history
    }

    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(&self.board, self.side_to_move)
    }

    /// Legal move between two squares, promotion included when forced.
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves().into_iter().find(|mv| mv.from == from && mv.to == to)
    }

    /// Apply `mv` and return the resulting position.
    ///
    /// # Panics
    ///
    /// Panics when a square lies outside 0..64; generator output never does.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Position {
        assert!(
            mv.from.is_valid() && mv.to.is_valid(),
            "move squares out of range: {} -> {}",
            mv.from.0,
            mv.to.0
        );
        debug_assert_eq!(mv.color, self.side_to_move);

        let board = self.board.apply_move(mv);
        let hash = update_hash_for_move(self.hash, mv);
        let move_number = match self.side_to_move {
            Color::White => self.move_number,
            Color::Black => self.move_number.saturating_add(1),
        };
        let countdown = Countdown::advance(self.countdown, &board, mv.color);

        let mut history = RepetitionMap::clone(&self.history);
        *history.entry(hash).or_insert(0) += 1;

        Position {
            board,
            side_to_move: self.side_to_move.opponent(),
            move_number,
            hash,
            countdown,
            history: Arc::new(history),
        }
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !has_legal_move(&self.board, self.side_to_move)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !has_legal_move(&self.board, self.side_to_move)
    }

    #[inline]
    pub fn is_insufficient_material(&self) -> bool {
        self.board.is_bare_kings()
    }

    /// How many times the current position has occurred, itself included.
    #[inline]
    pub fn repetition_count(&self) -> u32 {
        self.history.get(&self.hash).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    #[inline]
    pub fn is_countdown_expired(&self) -> bool {
        self.countdown.is_some_and(|cd| cd.is_expired())
    }

    /// Draw by a rule that does not depend on the legal move list.
    pub fn is_rule_draw(&self) -> bool {
        self.is_insufficient_material() || self.is_threefold_repetition() || self.is_countdown_expired()
    }

    pub fn is_draw(&self) -> bool {
        self.is_rule_draw() || self.is_stalemate()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !has_legal_move(&self.board, self.side_to_move) {
            return Some(if self.is_check() {
                Outcome::Checkmate { winner: self.side_to_move.opponent() }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            Some(Outcome::Repetition)
        } else if self.is_countdown_expired() {
            Some(Outcome::Countdown)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}
