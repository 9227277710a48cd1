//! 指し手（Move）

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Color, PieceType, Square};

/// Move list with inline storage; Makruk positions rarely exceed 64 moves.
pub type MoveList = SmallVec<[Move; 64]>;

/// A fully described move.
///
/// The captured piece and the promotion are decided by the generator, so a
/// `Move` never needs the board to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceType,
    pub color: Color,
    pub captured: Option<PieceType>,
    pub promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        piece: PieceType,
        color: Color,
        captured: Option<PieceType>,
        promotion: Option<PieceType>,
    ) -> Self {
        Move { from, to, piece, color, captured, promotion }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Piece type standing on the destination after the move.
    #[inline]
    pub fn landing_piece(&self) -> PieceType {
        self.promotion.unwrap_or(self.piece)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
