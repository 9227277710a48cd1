//! Lightweight search node
//!
//! Carries only what the search needs per ply. Repetition counts come from
//! the root history plus the searcher's path stack, so no map is copied.

use crate::board::Board;
use crate::position::{Countdown, Position, update_hash_for_move};
use crate::types::{Color, Move};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub board: Board,
    pub side: Color,
    pub hash: u64,
    pub countdown: Option<Countdown>,
}

impl Node {
    pub fn root(pos: &Position) -> Self {
        Node {
            board: *pos.board(),
            side: pos.side_to_move(),
            hash: pos.hash(),
            countdown: pos.countdown(),
        }
    }

    pub fn child(&self, mv: &Move) -> Self {
        let board = self.board.apply_move(mv);
        Node {
            countdown: Countdown::advance(self.countdown, &board, mv.color),
            board,
            side: self.side.opponent(),
            hash: update_hash_for_move(self.hash, mv),
        }
    }

    #[inline]
    pub fn is_maximizing(&self) -> bool {
        self.side == Color::White
    }

    #[inline]
    pub fn is_countdown_expired(&self) -> bool {
        self.countdown.is_some_and(|cd| cd.is_expired())
    }
}
