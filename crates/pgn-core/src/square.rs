//! Board coordinates: files, ranks and squares.

use std::fmt;
use std::str::FromStr;

/// Declares a board axis: eight variants numbered 0-7, named by a single
/// character counting up from `$first`.
macro_rules! axis {
    ($(#[$meta:meta])* $name:ident, $first:literal, [$($variant:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, lowest index first.
            pub const ALL: [$name; 8] = [$($name::$variant),+];

            /// Returns the value at `index`, or `None` past 7.
            #[inline]
            pub const fn from_index(index: u8) -> Option<Self> {
                if index < 8 {
                    Some(Self::ALL[index as usize])
                } else {
                    None
                }
            }

            /// Accepts exactly the eight characters starting at
            #[doc = concat!("`'", $first, "'`.")]
            #[inline]
            pub const fn from_char(c: char) -> Option<Self> {
                let first = $first as u32;
                let code = c as u32;
                if code >= first && code < first + 8 {
                    Self::from_index((code - first) as u8)
                } else {
                    None
                }
            }

            /// Position along the axis, 0-7.
            #[inline]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// The character naming this value in square names.
            #[inline]
            pub const fn to_char(self) -> char {
                ($first as u8 + self as u8) as char
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                use fmt::Write;
                f.write_char(self.to_char())
            }
        }
    };
}

axis!(
    /// Board column. Only lowercase letters name a file, so the `B` of a
    /// bishop move is never read as the b-file.
    File,
    'a',
    [A, B, C, D, E, F, G, H]
);

axis!(
    /// Board row, `R1` being White's back rank.
    Rank,
    '1',
    [R1, R2, R3, R4, R5, R6, R7, R8]
);

/// One of the 64 squares, numbered `rank * 8 + file` so that a1 is 0, h1 is 7
/// and h8 is 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    // Corner and back-rank squares used by castling.
    pub const A1: Square = Square::new(File::A, Rank::R1);
    pub const B1: Square = Square::new(File::B, Rank::R1);
    pub const C1: Square = Square::new(File::C, Rank::R1);
    pub const D1: Square = Square::new(File::D, Rank::R1);
    pub const E1: Square = Square::new(File::E, Rank::R1);
    pub const F1: Square = Square::new(File::F, Rank::R1);
    pub const G1: Square = Square::new(File::G, Rank::R1);
    pub const H1: Square = Square::new(File::H, Rank::R1);
    pub const A8: Square = Square::new(File::A, Rank::R8);
    pub const B8: Square = Square::new(File::B, Rank::R8);
    pub const C8: Square = Square::new(File::C, Rank::R8);
    pub const D8: Square = Square::new(File::D, Rank::R8);
    pub const E8: Square = Square::new(File::E, Rank::R8);
    pub const F8: Square = Square::new(File::F, Rank::R8);
    pub const G8: Square = Square::new(File::G, Rank::R8);
    pub const H8: Square = Square::new(File::H, Rank::R8);

    /// Creates a square from a file and a rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square((rank as u8) << 3 | file as u8)
    }

    /// Returns the square numbered `index`, or `None` past 63.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0..=63 => Some(Square(index)),
            _ => None,
        }
    }

    /// Reads a two-character name such as `e4`. The file letter must be
    /// lowercase.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let [file, rank] = match s.as_bytes() {
            [file, rank] => [*file, *rank],
            _ => return None,
        };
        match (File::from_char(file as char), Rank::from_char(rank as char)) {
            (Some(file), Some(rank)) => Some(Square::new(file, rank)),
            _ => None,
        }
    }

    /// a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Square number, 0-63.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file (column) of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 & 7) as usize]
    }

    /// Returns the rank (row) of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 >> 3) as usize]
    }

    /// The square `file_delta` files and `rank_delta` ranks away, or `None`
    /// when that is off the board.
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = (self.0 & 7) as i8 + file_delta;
        let rank = (self.0 >> 3) as i8 + rank_delta;
        if 0 <= file && file < 8 && 0 <= rank && rank < 8 {
            Some(Square((rank as u8) << 3 | file as u8))
        } else {
            None
        }
    }

    /// Same file, different rank.
    #[inline]
    pub const fn with_rank(self, rank: Rank) -> Self {
        Square::new(self.file(), rank)
    }
}

/// Error returned when text is not a square name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: '{0}'")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
