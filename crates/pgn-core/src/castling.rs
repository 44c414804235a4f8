//! Castling rights.

use crate::Color;
use std::fmt;

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/// Castling rights flags.
///
/// Four independent flags, one per color and side. Rights are only ever
/// removed once a position exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights (`-`).
    pub const NONE: CastlingRights = CastlingRights(0);
    /// White may castle king-side (`K`).
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    /// White may castle queen-side (`Q`).
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    /// Black may castle king-side (`k`).
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    /// Black may castle queen-side (`q`).
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    /// All four rights (`KQkq`).
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queen) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::King) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queen) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` may still castle towards `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Removes one right.
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes both rights of a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    /// Parses the FEN castling field (`KQkq` subset or `-`).
    ///
    /// Returns the offending character on failure.
    pub fn from_fen(field: &str) -> Result<Self, char> {
        if field == "-" {
            return Ok(Self::NONE);
        }
        let mut flags = 0u8;
        for c in field.chars() {
            flags |= match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                other => return Err(other),
            };
        }
        Ok(Self::new(flags))
    }
}

impl fmt::Display for CastlingRights {
    /// Writes the FEN castling field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_single_right() {
        let mut rights = CastlingRights::ALL;
        rights.remove(Color::White, CastleSide::King);
        assert!(!rights.has(Color::White, CastleSide::King));
        assert!(rights.has(Color::White, CastleSide::Queen));
        assert!(rights.has(Color::Black, CastleSide::King));
    }

    #[test]
    fn remove_color() {
        let mut rights = CastlingRights::ALL;
        rights.remove_color(Color::Black);
        assert!(!rights.has(Color::Black, CastleSide::King));
        assert!(!rights.has(Color::Black, CastleSide::Queen));
        assert_eq!(rights.to_string(), "KQ");
    }

    #[test]
    fn fen_field() {
        assert_eq!(CastlingRights::from_fen("KQkq"), Ok(CastlingRights::ALL));
        assert_eq!(CastlingRights::from_fen("-"), Ok(CastlingRights::NONE));
        assert_eq!(CastlingRights::from_fen("Kx"), Err('x'));
        // Letters are written back in canonical order.
        assert_eq!(CastlingRights::from_fen("qK").unwrap().to_string(), "Kq");
        assert_eq!(CastlingRights::NONE.to_string(), "-");
    }
}
