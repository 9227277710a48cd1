//! Array-board reference implementation
//!
//! 64-entry array with direction offsets. Slow and straightforward; used to
//! cross-check the bitboard move generator, the material evaluation and the
//! minimax score of the search.

use makruk_core::eval::{CENTER_TABLE, piece_value};
use makruk_core::{Board, Color, Piece, PieceType, SCORE_DRAW, SCORE_INFINITE, Square};

const KING_STEPS: [(i8, i8); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];
const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const KNIGHT_STEPS: [(i8, i8); 8] =
    [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[derive(Clone, Copy)]
pub struct MailboxMove {
    pub from: usize,
    pub to: usize,
    pub promote: bool,
}

#[derive(Clone)]
pub struct Mailbox {
    squares: [Option<Piece>; 64],
}

fn step(sq: usize, df: i8, dr: i8) -> Option<usize> {
    let file = (sq % 8) as i8 + df;
    let rank = (sq / 8) as i8 + dr;
    ((0..8).contains(&file) && (0..8).contains(&rank)).then(|| (rank * 8 + file) as usize)
}

fn in_promotion_zone(color: Color, sq: usize) -> bool {
    let rank = sq / 8;
    match color {
        Color::White => rank >= 5,
        Color::Black => rank <= 2,
    }
}

fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

impl Mailbox {
    pub fn from_board(board: &Board) -> Self {
        let mut squares = [None; 64];
        for (i, slot) in squares.iter_mut().enumerate() {
            *slot = board.piece_at(Square(i as u8));
        }
        Mailbox { squares }
    }

    fn is_own(&self, sq: usize, color: Color) -> bool {
        self.squares[sq].is_some_and(|p| p.color == color)
    }

    fn is_enemy(&self, sq: usize, color: Color) -> bool {
        self.squares[sq].is_some_and(|p| p.color != color)
    }

    fn step_moves(&self, from: usize, color: Color, steps: &[(i8, i8)], out: &mut Vec<MailboxMove>) {
        for &(df, dr) in steps {
            if let Some(to) = step(from, df, dr) {
                if !self.is_own(to, color) {
                    out.push(MailboxMove { from, to, promote: false });
                }
            }
        }
    }

    pub fn pseudo_legal(&self, color: Color) -> Vec<MailboxMove> {
        let mut out = Vec::new();
        for from in 0..64 {
            let Some(piece) = self.squares[from] else { continue };
            if piece.color != color {
                continue;
            }
            let fwd = forward(color);
            match piece.piece_type {
                PieceType::King => self.step_moves(from, color, &KING_STEPS, &mut out),
                PieceType::Met | PieceType::PromotedPawn => {
                    self.step_moves(from, color, &DIAGONAL_STEPS, &mut out)
                }
                PieceType::Khon => {
                    let mut steps = DIAGONAL_STEPS.to_vec();
                    steps.push((0, fwd));
                    self.step_moves(from, color, &steps, &mut out);
                }
                PieceType::Knight => self.step_moves(from, color, &KNIGHT_STEPS, &mut out),
                PieceType::Rook => {
                    for (df, dr) in ROOK_DIRS {
                        let mut cur = from;
                        while let Some(to) = step(cur, df, dr) {
                            if self.is_own(to, color) {
                                break;
                            }
                            out.push(MailboxMove { from, to, promote: false });
                            if self.squares[to].is_some() {
                                break;
                            }
                            cur = to;
                        }
                    }
                }
                PieceType::Pawn => {
                    if let Some(to) = step(from, 0, fwd) {
                        if self.squares[to].is_none() {
                            let promote = in_promotion_zone(color, to);
                            out.push(MailboxMove { from, to, promote });
                        }
                    }
                    for df in [-1, 1] {
                        if let Some(to) = step(from, df, fwd) {
                            if self.is_enemy(to, color) {
                                let promote = in_promotion_zone(color, to);
                                out.push(MailboxMove { from, to, promote });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    pub fn apply(&self, mv: MailboxMove) -> Mailbox {
        let mut next = self.clone();
        let mut piece = next.squares[mv.from].take().expect("move from empty square");
        if mv.promote {
            piece.piece_type = PieceType::PromotedPawn;
        }
        next.squares[mv.to] = Some(piece);
        next
    }

    /// Attack test by scanning every enemy piece's pseudo-legal destinations.
    /// Pawn pushes are excluded since they cannot capture.
    pub fn is_attacked(&self, sq: usize, by: Color) -> bool {
        self.pseudo_legal(by).into_iter().any(|mv| {
            let is_push = self.squares[mv.from].is_some_and(|p| p.piece_type == PieceType::Pawn)
                && mv.from % 8 == mv.to % 8;
            mv.to == sq && !is_push
        })
    }

    fn king_square(&self, color: Color) -> Option<usize> {
        (0..64).find(|&sq| {
            self.squares[sq].is_some_and(|p| p.color == color && p.piece_type == PieceType::King)
        })
    }

    pub fn legal(&self, color: Color) -> Vec<MailboxMove> {
        self.pseudo_legal(color)
            .into_iter()
            .filter(|&mv| {
                let after = self.apply(mv);
                match after.king_square(color) {
                    Some(king) => !after.is_attacked(king, color.opponent()),
                    None => true,
                }
            })
            .collect()
    }

    pub fn perft(&self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal(color);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves.into_iter().map(|mv| self.apply(mv).perft(color.opponent(), depth - 1)).sum()
    }

    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for (sq, slot) in self.squares.iter().enumerate() {
            let Some(piece) = slot else { continue };
            let placement = if piece.piece_type == PieceType::King { 0 } else { CENTER_TABLE[sq] };
            let value = piece_value(piece.piece_type) + placement;
            score += match piece.color {
                Color::White => value,
                Color::Black => -value,
            };
        }
        score
    }

    fn is_bare_kings(&self) -> bool {
        self.squares.iter().flatten().all(|p| p.piece_type == PieceType::King)
    }

    fn in_check(&self, color: Color) -> bool {
        self.king_square(color).is_some_and(|king| self.is_attacked(king, color.opponent()))
    }

    /// Score for `color` having no legal move.
    fn no_move_score(&self, color: Color) -> i32 {
        if !self.in_check(color) {
            return SCORE_DRAW;
        }
        match color {
            Color::White => -SCORE_INFINITE,
            Color::Black => SCORE_INFINITE,
        }
    }

    /// Minimax value from White's point of view, `depth` plies plus captures.
    ///
    /// Only bare kings are treated as a draw; repetition and counting are
    /// left out, so callers pick positions where neither can trigger.
    pub fn search(&self, color: Color, depth: u32) -> i32 {
        let moves = self.legal(color);
        if moves.is_empty() {
            return self.no_move_score(color);
        }
        if self.is_bare_kings() {
            return SCORE_DRAW;
        }
        self.minimax(color, depth.max(1), -SCORE_INFINITE, SCORE_INFINITE)
    }

    fn minimax(&self, color: Color, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if self.is_bare_kings() {
            return SCORE_DRAW;
        }
        let moves = self.legal(color);
        if moves.is_empty() {
            return self.no_move_score(color);
        }
        if depth == 0 {
            return self.quiesce(color, alpha, beta);
        }

        let maximizing = color == Color::White;
        let mut best = if maximizing { -SCORE_INFINITE } else { SCORE_INFINITE };
        for mv in moves {
            let score = self.apply(mv).minimax(color.opponent(), depth - 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    fn quiesce(&self, color: Color, mut alpha: i32, mut beta: i32) -> i32 {
        let stand_pat = self.evaluate();
        let maximizing = color == Color::White;
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

        let mut best = stand_pat;
        for mv in self.legal(color).into_iter().filter(|mv| self.is_enemy(mv.to, color)) {
            let score = self.apply(mv).quiesce(color.opponent(), alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
