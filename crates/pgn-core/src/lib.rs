//! Core types for chess notation.
//!
//! This crate provides the value types shared by the board and the PGN reader:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for resolved moves
//! - [`CastlingRights`] and [`Fen`] parsing and serialization

mod castling;
mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::{File, ParseSquareError, Rank, Square};
