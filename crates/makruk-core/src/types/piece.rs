//! 駒種（PieceType）と駒（Piece）

use serde::{Deserialize, Serialize};

use super::Color;

/// Makruk piece kinds.
///
/// Declaration order is the fixed scan order used by `Board::piece_at` and
/// the Zobrist table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    /// Bia
    Pawn = 0,
    /// Ma
    Knight = 1,
    /// Khon: one step diagonally or one step straight forward
    Khon = 2,
    /// Ruea
    Rook = 3,
    /// Met: one step diagonally
    Met = 4,
    /// Khun
    King = 5,
    /// Bia Ngai: a promoted pawn, moves like Met
    PromotedPawn = 6,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 7;

    pub const ALL: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Khon,
        PieceType::Rook,
        PieceType::Met,
        PieceType::King,
        PieceType::PromotedPawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter.
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Khon => 'b',
            PieceType::Rook => 'r',
            PieceType::Met => 'q',
            PieceType::King => 'k',
            PieceType::PromotedPawn => 'm',
        }
    }

    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Khon),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Met),
            'k' => Some(PieceType::King),
            'm' => Some(PieceType::PromotedPawn),
            _ => None,
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, piece_type))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
