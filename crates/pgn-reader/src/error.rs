//! Errors raised while reading a game.

use pgn_board::ResolveError;
use pgn_core::FenError;
use thiserror::Error;

/// Errors that abort the game being read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PgnError {
    /// The `FEN` tag does not describe a position.
    #[error("invalid FEN tag: {0}")]
    Fen(#[from] FenError),

    /// A movetext token did not resolve against the running board.
    #[error("ply {ply}: cannot play '{token}': {source}")]
    Move {
        /// 1-based ply of the failing token.
        ply: usize,
        token: String,
        source: ResolveError,
    },

    /// Input ended inside a `[Name "Value"]` pair.
    #[error("unterminated tag pair")]
    UnterminatedTag,

    /// Movetext ended without `1-0`, `0-1`, `1/2-1/2` or `*`.
    #[error("game ended without a result marker")]
    MissingResult,
}

impl PgnError {
    /// The resolver error behind a move failure, if that is what this is.
    pub fn resolve_error(&self) -> Option<&ResolveError> {
        match self {
            PgnError::Move { source, .. } => Some(source),
            _ => None,
        }
    }
}
