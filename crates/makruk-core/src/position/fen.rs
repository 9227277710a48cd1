//! 局面文字列（FEN形式）の解析・出力
//!
//! `<board> <side> <move-number>[ <color> <bp|pp> <count> <start> <target>]`
//!
//! Output is the byte-exact inverse of input, so non-canonical spellings
//! (adjacent digits, leading zeros) are rejected instead of normalized.

use super::countdown::{Countdown, CountdownKind};
use super::pos::Position;
use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Square};

/// 初期局面
pub const STARTING_FEN: &str = "rnbqkbnr/8/pppppppp/8/8/PPPPPPPP/8/RNBKQBNR w 1";

/// 局面文字列のパースエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 3 or 8 space-separated fields, got {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files, expected 8")]
    FileCount { rank: u8, files: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("consecutive empty-square digits in rank {0}")]
    ConsecutiveDigits(u8),

    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: u32 },

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid move number '{0}'")]
    MoveNumber(String),

    #[error("invalid countdown field '{0}'")]
    InvalidCountdown(String),
}

/// Parse a canonical decimal number (no sign, no leading zeros).
fn parse_canonical<T: std::str::FromStr + ToString>(s: &str) -> Option<T> {
    let value = s.parse::<T>().ok()?;
    (value.to_string() == s).then_some(value)
}

fn parse_board(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut files = 0usize;
        let mut prev_digit = false;

        for c in rank_str.chars() {
            match c {
                '1'..='8' => {
                    if prev_digit {
                        return Err(FenError::ConsecutiveDigits(rank + 1));
                    }
                    files += c as usize - '0' as usize;
                    prev_digit = true;
                }
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if files < 8 {
                        board.set_piece(Square::new(files as u8, rank), piece);
                    }
                    files += 1;
                    prev_digit = false;
                }
            }
        }

        if files != 8 {
            return Err(FenError::FileCount { rank: rank + 1, files });
        }
    }

    for color in Color::ALL {
        let count = board.pieces(color, PieceType::King).count();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }

    Ok(board)
}

fn parse_countdown(fields: &[&str]) -> Result<Countdown, FenError> {
    let invalid = |s: &str| FenError::InvalidCountdown(s.to_string());

    let color = Color::from_fen(fields[0]).ok_or_else(|| invalid(fields[0]))?;
    let kind = CountdownKind::parse(fields[1]).ok_or_else(|| invalid(fields[1]))?;
    let count = parse_canonical::<u8>(fields[2]).ok_or_else(|| invalid(fields[2]))?;
    let start = parse_canonical::<u8>(fields[3]).ok_or_else(|| invalid(fields[3]))?;
    let target = parse_canonical::<u8>(fields[4]).ok_or_else(|| invalid(fields[4]))?;

    Ok(Countdown { color, kind, count, start, target })
}

impl Position {
    /// 局面文字列から局面を生成
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split(' ').collect();
        match fields.len() {
            3 | 8 => {}
            4..=7 => return Err(FenError::InvalidCountdown(fields[3..].join(" "))),
            n => return Err(FenError::FieldCount(n)),
        }

        let board = parse_board(fields[0])?;

        let side_to_move =
            Color::from_fen(fields[1]).ok_or_else(|| FenError::SideToMove(fields[1].to_string()))?;

        let move_number = parse_canonical::<u32>(fields[2])
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::MoveNumber(fields[2].to_string()))?;

        let countdown = if fields.len() == 8 { Some(parse_countdown(&fields[3..])?) } else { None };

        Ok(Position::from_parts(board, side_to_move, move_number, countdown))
    }

    /// 現局面の文字列表現
    pub fn to_fen(&self) -> String {
        let board = self.board();
        let mut result = String::with_capacity(64);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match board.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            result.push_str(&empty.to_string());
                            empty = 0;
                        }
                        result.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                result.push_str(&empty.to_string());
            }
            if rank > 0 {
                result.push('/');
            }
        }

        result.push(' ');
        result.push(self.side_to_move().to_char());
        result.push(' ');
        result.push_str(&self.move_number().to_string());

        if let Some(cd) = self.countdown() {
            result.push_str(&format!(
                " {} {} {} {} {}",
                cd.color.to_char(),
                cd.kind.as_str(),
                cd.count,
                cd.start,
                cd.target
            ));
        }

        result
    }
}

impl std::str::FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_fen())
    }
}
