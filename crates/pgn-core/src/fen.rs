//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{CastlingRights, Color, File, Piece, Rank, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// The six fields of a FEN record, decoded.
///
/// `placement` is indexed by [`Square::index`]. Formatting a `Fen` with
/// `Display` produces the canonical text, which is what [`Fen::parse`]
/// accepts back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Piece on each square, a1 first.
    pub placement: [Option<Piece>; 64],
    /// The side to move.
    pub side_to_move: Color,
    /// Castling availability.
    pub castling: CastlingRights,
    /// En passant target square, if any.
    pub en_passant: Option<Square>,
    /// Halfmoves since the last capture or pawn move.
    pub halfmove_clock: u32,
    /// Fullmove number, starting at 1 and incremented after Black's move.
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. Fields may be separated by any run of
    /// whitespace; the en passant field accepts any square.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::InvalidPartCount(fields.len()));
        };

        let squares = parse_placement(placement)?;

        let mut side_chars = side.chars();
        let side_color = side_chars.next().and_then(Color::from_fen_char);
        let side_to_move = match (side_color, side_chars.next()) {
            (Some(color), None) => color,
            _ => return Err(FenError::InvalidActiveColor(side.to_string())),
        };

        let castling_rights = CastlingRights::from_fen(castling).map_err(|c| {
            FenError::InvalidCastlingRights(format!("invalid character '{}' in '{}'", c, castling))
        })?;

        let en_passant = if en_passant == "-" {
            None
        } else {
            let square = Square::from_algebraic(en_passant)
                .ok_or_else(|| FenError::InvalidEnPassantSquare(en_passant.to_string()))?;
            Some(square)
        };

        let halfmove_clock = halfmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(halfmove.to_string()))?;
        let fullmove_number = match fullmove.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(FenError::InvalidFullmoveNumber(fullmove.to_string())),
        };

        Ok(Fen {
            placement: squares,
            side_to_move,
            castling: castling_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }
}

fn placement_error(rank: Rank, detail: impl fmt::Display) -> FenError {
    FenError::InvalidPiecePlacement(format!("rank {}: {}", rank, detail))
}

/// Decodes the first field. Ranks are listed from 8 down to 1, each one
/// naming exactly eight files with pieces and run lengths 1-8.
fn parse_placement(text: &str) -> Result<[Option<Piece>; 64], FenError> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            rows.len()
        )));
    }

    let mut squares = [None; 64];
    for (row, rank) in rows.iter().zip(Rank::ALL.iter().rev()) {
        let mut file = 0u8;
        for c in row.chars() {
            if file >= 8 {
                return Err(placement_error(*rank, "more than 8 files"));
            }
            if let Some(run) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                file += run as u8;
                continue;
            }
            let piece = Piece::from_fen_char(c)
                .ok_or_else(|| placement_error(*rank, format_args!("unexpected '{}'", c)))?;
            if let Some(f) = File::from_index(file) {
                squares[Square::new(f, *rank).index() as usize] = Some(piece);
            }
            file += 1;
        }
        if file != 8 {
            return Err(placement_error(
                *rank,
                format_args!("covers {} files, expected 8", file),
            ));
        }
    }
    Ok(squares)
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let mut gap = 0;
            for file in File::ALL {
                match self.placement[Square::new(file, *rank).index() as usize] {
                    Some(piece) => {
                        if gap > 0 {
                            write!(f, "{}", gap)?;
                            gap = 0;
                        }
                        write!(f, "{}", piece.to_fen_char())?;
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                write!(f, "{}", gap)?;
            }
        }

        write!(f, " {} {} ", self.side_to_move.to_fen_char(), self.castling)?;
        match self.en_passant {
            Some(sq) => write!(f, "{}", sq)?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}

impl Default for Fen {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
