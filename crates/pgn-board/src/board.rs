//! Mutable chess position.

use pgn_core::{
    CastleSide, CastlingRights, Color, Fen, FenError, File, Move, Piece, PieceKind, Square,
};
use std::fmt;

/// Rook corners and the castling right each one guards.
const ROOK_CORNERS: [(Square, Color, CastleSide); 4] = [
    (Square::A1, Color::White, CastleSide::Queen),
    (Square::H1, Color::White, CastleSide::King),
    (Square::A8, Color::Black, CastleSide::Queen),
    (Square::H8, Color::Black, CastleSide::King),
];

/// A chess position: square-indexed occupancy plus the game state FEN
/// records alongside it.
///
/// The board is only changed through [`Board::make_move`], so occupancy,
/// castling rights, en passant target and clocks always describe one
/// consistent position and can be written out with [`Board::to_fen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Board {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::from(Fen::default())
    }

    /// Creates a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Fen::parse(fen).map(Self::from)
    }

    /// Converts the board to a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            placement: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_string()
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if any piece stands on the given square.
    #[inline]
    pub fn contains_piece_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// The side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Remaining castling rights.
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// En passant target square, set right after a double pawn push.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Halfmove clock for the 50-move rule.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Fullmove number (starts at 1, increments after Black's move).
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Returns the square of the given color's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Applies a move to the board.
    ///
    /// The move is expected to come from [`Board::move_from_algebraic`]; an
    /// impossible move leaves the board in an unspecified but well-formed
    /// state. A move from an empty square is ignored.
    ///
    /// All updates are computed before anything is written, so either the
    /// whole transition happens or none of it does.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let Some(piece) = self.piece_at(from) else {
            tracing::warn!(%mv, fen = %self, "ignoring move from empty square");
            return;
        };
        let color = piece.color();
        let kind = piece.kind();
        let is_pawn = kind == PieceKind::Pawn;

        let en_passant_victim = if is_pawn
            && from.file() != to.file()
            && !self.contains_piece_at(to)
            && self.en_passant == Some(to)
        {
            Some(to.with_rank(from.rank()))
        } else {
            None
        };
        let is_capture = self.contains_piece_at(to) || en_passant_victim.is_some();

        let castle = self.castle_side(piece, from, to);
        let (king_to, rook_move) = match castle {
            Some(side) => {
                let rank = color.home_rank();
                let (king_file, rook_from, rook_to) = match side {
                    CastleSide::King => (File::G, File::H, File::F),
                    CastleSide::Queen => (File::C, File::A, File::D),
                };
                (
                    Square::new(king_file, rank),
                    Some((Square::new(rook_from, rank), Square::new(rook_to, rank))),
                )
            }
            None => (to, None),
        };

        let placed = match mv.promotion() {
            Some(promote) if is_pawn && to.rank() == color.promotion_rank() => {
                Piece::new(color, promote)
            }
            _ => piece,
        };

        let mut castling = self.castling;
        if kind == PieceKind::King {
            castling.remove_color(color);
        }
        for (corner, owner, side) in ROOK_CORNERS {
            if from == corner || to == corner {
                castling.remove(owner, side);
            }
        }

        let en_passant = if is_pawn && from.rank().index().abs_diff(to.rank().index()) == 2 {
            from.offset(0, color.pawn_direction())
        } else {
            None
        };

        let halfmove_clock = if is_pawn || is_capture {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = match self.side_to_move {
            Color::Black => self.fullmove_number.saturating_add(1),
            Color::White => self.fullmove_number,
        };

        self.squares[from.index() as usize] = None;
        if let Some(victim) = en_passant_victim {
            self.squares[victim.index() as usize] = None;
        }
        if let Some((rook_from, rook_to)) = rook_move {
            let rook = self.squares[rook_from.index() as usize].take();
            self.squares[rook_to.index() as usize] = rook;
        }
        self.squares[king_to.index() as usize] = Some(placed);
        self.castling = castling;
        self.en_passant = en_passant;
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// A king leaving its home square by two or more files along the home
    /// rank is castling. Both `e1g1` and the resolver's `e1b1` encoding
    /// qualify.
    fn castle_side(&self, piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
        if piece.kind() != PieceKind::King {
            return None;
        }
        let home = Square::new(File::E, piece.color().home_rank());
        if from != home || to.rank() != from.rank() {
            return None;
        }
        match to.file().index() as i8 - from.file().index() as i8 {
            d if d >= 2 => Some(CastleSide::King),
            d if d <= -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

impl From<Fen> for Board {
    fn from(fen: Fen) -> Self {
        Board {
            squares: fen.placement,
            side_to_move: fen.side_to_move,
            castling: fen.castling,
            en_passant: fen.en_passant,
            halfmove_clock: fen.halfmove_clock,
            fullmove_number: fen.fullmove_number,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
