//! Makruk counting rule（カウントダウン）
//!
//! - Board Power ("bp"): no unpromoted pawns remain; the side with fewer
//!   pieces counts from 1 to 64.
//! - Piece Power ("pp"): the weaker side is down to a lone king; counting
//!   starts at the number of pieces on the board plus one and the target
//!   depends on the stronger side's material.
//!
//! The count advances each time the counting side moves. The game is drawn
//! once the count reaches the target.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Color, PieceType};

/// Board Power counting limit.
pub const BOARD_POWER_TARGET: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountdownKind {
    BoardPower,
    PiecePower,
}

impl CountdownKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CountdownKind::BoardPower => "bp",
            CountdownKind::PiecePower => "pp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bp" => Some(CountdownKind::BoardPower),
            "pp" => Some(CountdownKind::PiecePower),
            _ => None,
        }
    }
}

/// Active countdown record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
    /// Counting (weaker) side
    pub color: Color,
    pub kind: CountdownKind,
    pub count: u8,
    pub start: u8,
    pub target: u8,
}

impl Countdown {
    pub fn board_power(color: Color) -> Self {
        Countdown {
            color,
            kind: CountdownKind::BoardPower,
            count: 1,
            start: 1,
            target: BOARD_POWER_TARGET,
        }
    }

    /// Piece Power counting for the lone king of `color`.
    pub fn piece_power(board: &Board, color: Color) -> Self {
        let start = (board.occupied().count() + 1) as u8;
        Countdown {
            color,
            kind: CountdownKind::PiecePower,
            count: start,
            start,
            target: piece_power_target(board, color.opponent()),
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.count >= self.target
    }

    /// Countdown state after `mover` played the move that produced `board`.
    pub fn advance(current: Option<Countdown>, board: &Board, mover: Color) -> Option<Countdown> {
        if board.is_bare_kings() {
            return None;
        }

        let next = match weaker_side(board) {
            Some(weak) if board.piece_count(weak) == 1 => match current {
                Some(cd) if cd.kind == CountdownKind::PiecePower && cd.color == weak => {
                    Some(cd.tick(mover))
                }
                _ => Some(Countdown::piece_power(board, weak)),
            },
            Some(weak) if no_pawns(board) => match current {
                Some(cd) if cd.kind == CountdownKind::BoardPower && cd.color == weak => {
                    Some(cd.tick(mover))
                }
                _ => Some(Countdown::board_power(weak)),
            },
            _ => None,
        };

        if next != current {
            log::trace!("countdown {current:?} -> {next:?}");
        }
        next
    }

    #[inline]
    fn tick(self, mover: Color) -> Countdown {
        if mover == self.color {
            Countdown { count: self.count.saturating_add(1), ..self }
        } else {
            self
        }
    }
}

/// Side with strictly fewer pieces on the board.
fn weaker_side(board: &Board) -> Option<Color> {
    let white = board.piece_count(Color::White);
    let black = board.piece_count(Color::Black);
    match white.cmp(&black) {
        std::cmp::Ordering::Less => Some(Color::White),
        std::cmp::Ordering::Greater => Some(Color::Black),
        std::cmp::Ordering::Equal => None,
    }
}

fn no_pawns(board: &Board) -> bool {
    (board.pieces(Color::White, PieceType::Pawn) | board.pieces(Color::Black, PieceType::Pawn))
        .is_empty()
}

/// Piece Power limit chosen by the strongest material of `strong`.
pub fn piece_power_target(board: &Board, strong: Color) -> u8 {
    let rooks = board.pieces(strong, PieceType::Rook).count();
    let khons = board.pieces(strong, PieceType::Khon).count();
    let knights = board.pieces(strong, PieceType::Knight).count();

    if rooks >= 2 {
        8
    } else if rooks == 1 {
        16
    } else if khons >= 2 {
        22
    } else if knights >= 2 {
        32
    } else if khons == 1 {
        44
    } else {
        64
    }
}
