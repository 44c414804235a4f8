//! Move representation.

use crate::{PieceKind, Square};
use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved chess move: origin, destination and optional promotion.
///
/// Encoded compactly: 6 bits from, 6 bits to, 3 bits promotion.
///
/// The text form is the machine notation `e2e4` / `e7e8q`, not the algebraic
/// text the move was resolved from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

const PROMOTION_SHIFT: u16 = 12;
const SQUARE_MASK: u16 = 0x3F;

/// Promotion codes 1-4; 0 means none.
const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

const fn square_at(bits: u16) -> Square {
    match Square::from_index((bits & SQUARE_MASK) as u8) {
        Some(sq) => sq,
        None => unreachable!(),
    }
}

impl Move {
    /// Packs a move. A promotion to anything but N/B/R/Q is dropped.
    #[inline]
    pub const fn new(from: Square, to: Square, promote: Option<PieceKind>) -> Self {
        let mut code = 0;
        if let Some(kind) = promote {
            let mut i = 0;
            while i < PROMOTIONS.len() {
                if PROMOTIONS[i] as u8 == kind as u8 {
                    code = i as u16 + 1;
                }
                i += 1;
            }
        }
        Move(from.index() as u16 | (to.index() as u16) << 6 | code << PROMOTION_SHIFT)
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        square_at(self.0)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        square_at(self.0 >> 6)
    }

    /// Returns the promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match (self.0 >> PROMOTION_SHIFT) as usize {
            code @ 1..=4 => Some(PROMOTIONS[code - 1]),
            _ => None,
        }
    }

    /// Returns the machine notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Parses a move from machine notation.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promote = match s[4..].chars().next() {
            None => None,
            Some(c) => {
                let kind = PieceKind::from_san_char(c.to_ascii_uppercase())?;
                if !kind.is_promotion_target() {
                    return None;
                }
                Some(kind)
            }
        };
        Some(Move::new(from, to, promote))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.to_san_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
