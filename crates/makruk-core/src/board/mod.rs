//! 盤面（Board）
//!
//! One occupancy mask per (color, piece type) plus three derived masks
//! (White, Black, all). A square is set in at most one of the 14 piece
//! masks, and every mutating primitive recomputes the derived masks before
//! returning.

use crate::bitboard::Bitboard;
use crate::types::{Color, Move, Piece, PieceType, Square};

/// Bit-packed Makruk board. Value type; copied on every move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// \[color\]\[piece_type\]
    pieces: [[Bitboard; PieceType::NUM]; Color::NUM],
    /// \[color\], derived
    by_color: [Bitboard; Color::NUM],
    /// derived
    occupied: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; PieceType::NUM]; Color::NUM],
            by_color: [Bitboard::EMPTY; Color::NUM],
            occupied: Bitboard::EMPTY,
        }
    }

    /// Standard Makruk setup.
    pub fn startpos() -> Self {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Khon,
            PieceType::King,
            PieceType::Met,
            PieceType::Khon,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut board = Board::empty();
        for file in 0..8u8 {
            let white_back = BACK_RANK[file as usize];
            // Black mirrors the files so the kings do not face each other
            let black_back = BACK_RANK[7 - file as usize];
            board.set_piece(Square::new(file, 0), Piece::new(Color::White, white_back));
            board.set_piece(Square::new(file, 2), Piece::new(Color::White, PieceType::Pawn));
            board.set_piece(Square::new(file, 5), Piece::new(Color::Black, PieceType::Pawn));
            board.set_piece(Square::new(file, 7), Piece::new(Color::Black, black_back));
        }
        board
    }

    fn update_occupancy(&mut self) {
        for color in Color::ALL {
            let c = color.index();
            self.by_color[c] = self.pieces[c].iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb);
        }
        self.occupied = self.by_color[0] | self.by_color[1];
    }

    /// Place a piece. Whatever stood on `sq` is removed first.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.is_valid());
        self.clear_bit(sq);
        self.pieces[piece.color.index()][piece.piece_type.index()].set(sq);
        self.update_occupancy();
    }

    /// Remove whatever stands on `sq`; returns it.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        debug_assert!(sq.is_valid());
        let removed = self.piece_at(sq);
        self.clear_bit(sq);
        self.update_occupancy();
        removed
    }

    #[inline]
    fn clear_bit(&mut self, sq: Square) {
        for masks in self.pieces.iter_mut() {
            for bb in masks.iter_mut() {
                bb.clear(sq);
            }
        }
    }

    /// Copy-on-write variant of `set_piece`.
    #[must_use]
    pub fn put(&self, sq: Square, piece: Piece) -> Board {
        let mut board = *self;
        board.set_piece(sq, piece);
        board
    }

    /// Copy-on-write variant of `remove_piece`.
    #[must_use]
    pub fn remove(&self, sq: Square) -> Board {
        let mut board = *self;
        board.remove_piece(sq);
        board
    }

    /// Piece on `sq`, scanning White then Black in piece-type order.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        debug_assert!(sq.is_valid());
        if !self.occupied.test(sq) {
            return None;
        }
        for color in Color::ALL {
            for pt in PieceType::ALL {
                if self.pieces[color.index()][pt.index()].test(sq) {
                    return Some(Piece::new(color, pt));
                }
            }
        }
        None
    }

    #[inline]
    pub fn pieces(&self, color: Color, pt: PieceType) -> Bitboard {
        self.pieces[color.index()][pt.index()]
    }

    #[inline]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceType::King).lsb()
    }

    /// Number of pieces of `color`, king included.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupied_by(color).count()
    }

    /// Only the two kings remain.
    pub fn is_bare_kings(&self) -> bool {
        self.occupied.count() == 2
            && self.pieces(Color::White, PieceType::King).count() == 1
            && self.pieces(Color::Black, PieceType::King).count() == 1
    }

    /// Apply `mv` in place. The move is trusted to come from the generator.
    pub fn apply_move_in_place(&mut self, mv: &Move) {
        debug_assert!(mv.from.is_valid() && mv.to.is_valid());
        let us = mv.color.index();
        let them = mv.color.opponent().index();

        self.pieces[us][mv.piece.index()].clear(mv.from);
        if let Some(captured) = mv.captured {
            self.pieces[them][captured.index()].clear(mv.to);
        }
        self.pieces[us][mv.landing_piece().index()].set(mv.to);
        self.update_occupancy();
    }

    /// Copy-on-write move application.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut board = *self;
        board.apply_move_in_place(mv);
        board
    }
}
