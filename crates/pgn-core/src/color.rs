//! Side to move.

use crate::Rank;
use std::fmt;

/// Represents the two sides in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White, -1 for Black: the rank step of a pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Maps a rank seen from White's side to the same rank seen from this
    /// color's side, so `relative_rank(Rank::R1)` is always the home rank.
    #[inline]
    pub const fn relative_rank(self, rank: Rank) -> Rank {
        match self {
            Color::White => rank,
            Color::Black => Rank::ALL[7 - rank.index() as usize],
        }
    }

    /// Where the king and rooks start.
    #[inline]
    pub const fn home_rank(self) -> Rank {
        self.relative_rank(Rank::R1)
    }

    /// Where the pawns start; only they may advance two squares.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        self.relative_rank(Rank::R2)
    }

    /// Where a pawn lands after advancing two squares.
    #[inline]
    pub const fn double_push_rank(self) -> Rank {
        self.relative_rank(Rank::R4)
    }

    /// Where a pawn promotes.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        self.relative_rank(Rank::R8)
    }

    /// `w` or `b`.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Reads the FEN side-to-move letter; only lowercase `w` and `b`.
    #[inline]
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
