//! Algebraic move resolution.
//!
//! Move text as it appears in PGN movetext ("e4", "Nbd2", "exd5", "e8=Q",
//! "O-O") names a piece kind and a destination, optionally narrowed by the
//! origin file and/or rank. Resolution finds the single origin square on the
//! current board.
//!
//! Only pseudo-legal reachability is considered: a move that would leave the
//! mover's own king in check still resolves.

use crate::attacks;
use crate::Board;
use pgn_core::{CastleSide, Color, File, Move, PieceKind, Rank, Square};
use std::str::FromStr;
use thiserror::Error;

/// Error type for algebraic move resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No piece of the named kind and color can reach the destination.
    #[error("no piece can make the move: {0}")]
    AttackerNotFound(String),
    /// More than one piece matches and the disambiguation does not narrow it.
    #[error("ambiguous move: {0}")]
    AmbiguousMove(String),
    /// The text is not algebraic move notation.
    #[error("invalid move notation: {0}")]
    InvalidNotation(String),
}

/// Parsed algebraic move text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `O-O` or `O-O-O` (zeros accepted too).
    Castle(CastleSide),
    /// Any other move.
    Standard {
        kind: PieceKind,
        from_file: Option<File>,
        from_rank: Option<Rank>,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

impl FromStr for Notation {
    type Err = ResolveError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ResolveError::InvalidNotation(text.to_string());

        let san = text
            .trim()
            .trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'));

        match san {
            "O-O" | "0-0" => return Ok(Notation::Castle(CastleSide::King)),
            "O-O-O" | "0-0-0" => return Ok(Notation::Castle(CastleSide::Queen)),
            _ => {}
        }

        let mut chars: Vec<char> = san.chars().filter(|&c| c != 'x').collect();
        if chars.is_empty() {
            return Err(invalid());
        }

        let kind = match PieceKind::from_san_char(chars[0]) {
            Some(kind) => {
                chars.remove(0);
                kind
            }
            None => PieceKind::Pawn,
        };

        // Promotion suffix: "=Q" or a bare trailing piece letter.
        let promotion = match chars.iter().position(|&c| c == '=') {
            Some(eq) => {
                if eq + 2 != chars.len() {
                    return Err(invalid());
                }
                let promo = PieceKind::from_san_char(chars[eq + 1].to_ascii_uppercase())
                    .ok_or_else(invalid)?;
                chars.truncate(eq);
                Some(promo)
            }
            None => match chars.last().and_then(|&c| PieceKind::from_san_char(c)) {
                Some(promo) => {
                    chars.pop();
                    Some(promo)
                }
                None => None,
            },
        };
        if let Some(promo) = promotion {
            if kind != PieceKind::Pawn || !promo.is_promotion_target() {
                return Err(invalid());
            }
        }

        if chars.len() < 2 {
            return Err(invalid());
        }
        let split = chars.len() - 2;
        let to = File::from_char(chars[split])
            .zip(Rank::from_char(chars[split + 1]))
            .map(|(file, rank)| Square::new(file, rank))
            .ok_or_else(invalid)?;

        let (from_file, from_rank) = match chars[..split] {
            [] => (None, None),
            [c] => match (File::from_char(c), Rank::from_char(c)) {
                (Some(file), _) => (Some(file), None),
                (_, Some(rank)) => (None, Some(rank)),
                _ => return Err(invalid()),
            },
            [f, r] => (
                Some(File::from_char(f).ok_or_else(invalid)?),
                Some(Rank::from_char(r).ok_or_else(invalid)?),
            ),
            _ => return Err(invalid()),
        };

        Ok(Notation::Standard {
            kind,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }
}

impl Board {
    /// Resolves algebraic move text for `color` into a concrete move.
    ///
    /// Trailing check, mate and annotation glyphs are ignored. Fails with
    /// [`ResolveError::AttackerNotFound`] when no piece qualifies and with
    /// [`ResolveError::AmbiguousMove`] when several do.
    pub fn move_from_algebraic(&self, text: &str, color: Color) -> Result<Move, ResolveError> {
        let result = match text.parse::<Notation>()? {
            Notation::Castle(side) => self.resolve_castle(text, side, color),
            Notation::Standard {
                kind,
                from_file,
                from_rank,
                to,
                promotion,
            } => {
                let mut candidates = attacks::candidates(self, to, kind, color);
                candidates.retain(|sq| {
                    from_file.map_or(true, |file| sq.file() == file)
                        && from_rank.map_or(true, |rank| sq.rank() == rank)
                });
                match candidates.as_slice() {
                    [] => Err(ResolveError::AttackerNotFound(text.to_string())),
                    [from] => Ok(Move::new(*from, to, promotion)),
                    _ => Err(ResolveError::AmbiguousMove(text.to_string())),
                }
            }
        };

        match &result {
            Ok(mv) => tracing::trace!(text, %color, %mv, "resolved move"),
            Err(err) => tracing::debug!(text, %color, fen = %self, %err, "move did not resolve"),
        }
        result
    }

    /// Castling resolves to the king's home square and the g-file (king
    /// side) or b-file (queen side) on the same rank.
    ///
    /// Only the castling right and the king's presence are checked; the
    /// squares between king and rook are not.
    fn resolve_castle(
        &self,
        text: &str,
        side: CastleSide,
        color: Color,
    ) -> Result<Move, ResolveError> {
        let rank = color.home_rank();
        let from = Square::new(File::E, rank);
        if self.king_square(color) != Some(from) || !self.castling().has(color, side) {
            return Err(ResolveError::AttackerNotFound(text.to_string()));
        }
        let to_file = match side {
            CastleSide::King => File::G,
            CastleSide::Queen => File::B,
        };
        Ok(Move::normal(from, Square::new(to_file, rank)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn play(board: &mut Board, text: &str, color: Color) -> Move {
        let mv = board.move_from_algebraic(text, color).unwrap();
        board.make_move(mv);
        mv
    }

    #[test]
    fn parse_pawn_push() {
        assert_eq!(
            "e4".parse::<Notation>(),
            Ok(Notation::Standard {
                kind: PieceKind::Pawn,
                from_file: None,
                from_rank: None,
                to: sq("e4"),
                promotion: None,
            })
        );
    }

    #[test]
    fn parse_disambiguation_and_promotion() {
        assert_eq!(
            "Nbd2".parse::<Notation>(),
            Ok(Notation::Standard {
                kind: PieceKind::Knight,
                from_file: Some(File::B),
                from_rank: None,
                to: sq("d2"),
                promotion: None,
            })
        );
        assert_eq!(
            "R1e1".parse::<Notation>(),
            Ok(Notation::Standard {
                kind: PieceKind::Rook,
                from_file: None,
                from_rank: Some(Rank::R1),
                to: sq("e1"),
                promotion: None,
            })
        );
        assert_eq!(
            "Qh4xe1".parse::<Notation>(),
            Ok(Notation::Standard {
                kind: PieceKind::Queen,
                from_file: Some(File::H),
                from_rank: Some(Rank::R4),
                to: sq("e1"),
                promotion: None,
            })
        );
        assert_eq!(
            "exd8=N+".parse::<Notation>(),
            Ok(Notation::Standard {
                kind: PieceKind::Pawn,
                from_file: Some(File::E),
                from_rank: None,
                to: sq("d8"),
                promotion: Some(PieceKind::Knight),
            })
        );
        assert!(matches!(
            "b1Q".parse::<Notation>(),
            Ok(Notation::Standard {
                promotion: Some(PieceKind::Queen),
                ..
            })
        ));
    }

    #[test]
    fn parse_castling() {
        assert_eq!("O-O".parse::<Notation>(), Ok(Notation::Castle(CastleSide::King)));
        assert_eq!("O-O-O+".parse::<Notation>(), Ok(Notation::Castle(CastleSide::Queen)));
        assert_eq!("0-0".parse::<Notation>(), Ok(Notation::Castle(CastleSide::King)));
    }

    #[test]
    fn parse_invalid() {
        for text in ["", "x", "e", "e9", "Zf3", "Nf3=Q", "e8=K", "abcd4", "i4", "e8="] {
            assert!(
                matches!(
                    text.parse::<Notation>(),
                    Err(ResolveError::InvalidNotation(_))
                ),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn white_pawn_push() {
        let board = Board::new();
        let mv = board.move_from_algebraic("d4", Color::White).unwrap();
        assert_eq!(mv.from(), sq("d2"));
        assert_eq!(mv.to(), sq("d4"));
    }

    #[test]
    fn black_pawn_push() {
        let mut board = Board::new();
        play(&mut board, "d4", Color::White);
        let mv = board.move_from_algebraic("d5", Color::Black).unwrap();
        assert_eq!(mv.from(), sq("d7"));
        assert_eq!(mv.to(), sq("d5"));
    }

    #[test]
    fn white_castles_both_sides() {
        let board = Board::new();
        let mv = board.move_from_algebraic("O-O", Color::White).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::E1, Square::G1));
        let mv = board.move_from_algebraic("O-O-O", Color::White).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::E1, Square::B1));
    }

    #[test]
    fn black_castles_both_sides() {
        let mut board = Board::new();
        play(&mut board, "e4", Color::White);
        let mv = board.move_from_algebraic("O-O", Color::Black).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::E8, Square::G8));
        let mv = board.move_from_algebraic("O-O-O", Color::Black).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::E8, Square::B8));
    }

    #[test]
    fn castling_needs_rights_and_king() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1").unwrap();
        assert!(matches!(
            board.move_from_algebraic("O-O", Color::White),
            Err(ResolveError::AttackerNotFound(_))
        ));
        assert!(board.move_from_algebraic("O-O-O", Color::White).is_ok());
        assert!(matches!(
            board.move_from_algebraic("O-O-O", Color::Black),
            Err(ResolveError::AttackerNotFound(_))
        ));

        let moved_king = Board::from_fen("r4k1r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert!(matches!(
            moved_king.move_from_algebraic("O-O", Color::Black),
            Err(ResolveError::AttackerNotFound(_))
        ));
    }

    #[test]
    fn knights() {
        let mut board = Board::new();
        let mv = board.move_from_algebraic("Nf3", Color::White).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::G1, sq("f3")));

        play(&mut board, "e4", Color::White);
        let mv = board.move_from_algebraic("Nf6", Color::Black).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::G8, sq("f6")));
    }

    #[test]
    fn black_bishop_after_opening() {
        let mut board = Board::new();
        play(&mut board, "e4", Color::White);
        play(&mut board, "d5", Color::Black);
        play(&mut board, "d4", Color::White);
        let mv = board.move_from_algebraic("Bg4", Color::Black).unwrap();
        assert_eq!((mv.from(), mv.to()), (Square::C8, sq("g4")));
    }

    #[test]
    fn black_bishop_not_found() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/3PP3/8/PPP2PPP/RNBQKBNR b KQkq - 0 2")
                .unwrap();
        assert_eq!(
            board.move_from_algebraic("Bg5", Color::Black),
            Err(ResolveError::AttackerNotFound("Bg5".to_string()))
        );
    }

    #[test]
    fn black_bishop_ambiguous() {
        let board =
            Board::from_fen("r5nr/p2k2pp/5p2/3b4/P7/b1B5/5PPP/2b2K1R b - - 6 26").unwrap();
        assert_eq!(
            board.move_from_algebraic("Bb2", Color::Black),
            Err(ResolveError::AmbiguousMove("Bb2".to_string()))
        );
        // Either hint settles it.
        let mv = board.move_from_algebraic("Bab2", Color::Black).unwrap();
        assert_eq!(mv.from(), sq("a3"));
        let mv = board.move_from_algebraic("B1b2", Color::Black).unwrap();
        assert_eq!(mv.from(), Square::C1);
    }

    #[test]
    fn knight_disambiguation() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/1N1K1N2 w - - 0 1").unwrap();
        assert!(matches!(
            board.move_from_algebraic("Nd2", Color::White),
            Err(ResolveError::AmbiguousMove(_))
        ));
        let mv = board.move_from_algebraic("Nfd2", Color::White).unwrap();
        assert_eq!(mv.from(), Square::F1);
        let mv = board.move_from_algebraic("Nb1d2", Color::White).unwrap();
        assert_eq!(mv.from(), Square::B1);
        assert!(matches!(
            board.move_from_algebraic("Ncd2", Color::White),
            Err(ResolveError::AttackerNotFound(_))
        ));
    }

    #[test]
    fn pawn_capture_and_promotion() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/2P1P3/8/PP1P1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        assert!(matches!(
            board.move_from_algebraic("xd5", Color::White),
            Err(ResolveError::AmbiguousMove(_))
        ));
        let mv = board.move_from_algebraic("exd5", Color::White).unwrap();
        assert_eq!(mv.from(), sq("e4"));

        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.move_from_algebraic("a8=Q+", Color::White).unwrap();
        assert_eq!(mv.to_uci(), "a7a8q");
        let mv = board.move_from_algebraic("axb8=N", Color::White).unwrap();
        assert_eq!(mv.to_uci(), "a7b8n");
    }

    #[test]
    fn lowercase_promotion_after_equals_sign() {
        let board = Board::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = board.move_from_algebraic("a8=q", Color::White).unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        let mv = board.move_from_algebraic("axb8=b+", Color::White).unwrap();
        assert_eq!(mv.to_uci(), "a7b8b");
        assert!(matches!(
            board.move_from_algebraic("a8=k", Color::White),
            Err(ResolveError::InvalidNotation(_))
        ));
    }

    #[test]
    fn en_passant_resolves() {
        let board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
                .unwrap();
        let mv = board.move_from_algebraic("exf6", Color::White).unwrap();
        assert_eq!(mv.to_uci(), "e5f6");
    }

    #[test]
    fn cannot_land_on_own_piece() {
        let board = Board::new();
        assert!(matches!(
            board.move_from_algebraic("Nd2", Color::White),
            Err(ResolveError::AttackerNotFound(_))
        ));
        assert!(matches!(
            board.move_from_algebraic("Ke4", Color::White),
            Err(ResolveError::AttackerNotFound(_))
        ));
    }

    #[test]
    fn annotations_are_ignored() {
        let board = Board::new();
        let mv = board.move_from_algebraic("Nf3!?", Color::White).unwrap();
        assert_eq!(mv.to_uci(), "g1f3");
    }

    #[test]
    fn invalid_notation_is_distinct() {
        let board = Board::new();
        assert_eq!(
            board.move_from_algebraic("hello", Color::White),
            Err(ResolveError::InvalidNotation("hello".to_string()))
        );
    }
}
