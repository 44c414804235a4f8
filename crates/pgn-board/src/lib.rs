//! Chess board with algebraic move resolution.
//!
//! This crate provides:
//! - [`Board`] - square-indexed position with castling rights, en passant
//!   target and move clocks, round-tripping through FEN
//! - [`Board::move_from_algebraic`] - turns move text like `Nf3` into a
//!   concrete [`Move`](pgn_core::Move) for a given color
//! - [`attacks`] - the pseudo-legal reachability the resolver is built on
//!
//! # Example
//!
//! ```
//! use pgn_board::Board;
//! use pgn_core::Color;
//!
//! let mut board = Board::new();
//! let mv = board.move_from_algebraic("e4", Color::White).unwrap();
//! assert_eq!(mv.to_string(), "e2e4");
//! board.make_move(mv);
//! let mv = board.move_from_algebraic("Nf6", Color::Black).unwrap();
//! board.make_move(mv);
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2"
//! );
//! ```

pub mod attacks;
mod board;
mod resolve;

pub use board::Board;
pub use resolve::{Notation, ResolveError};
