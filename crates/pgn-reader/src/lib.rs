//! PGN transcript reader.
//!
//! Turns PGN text into [`Game`] values: tag pairs, the moves resolved against
//! a running [`Board`](pgn_board::Board), and the result marker. Comments,
//! variations, move numbers and annotation glyphs are skipped.
//!
//! # Modules
//!
//! - [`config`] - reader settings, loadable from TOML
//! - [`PgnScanner`] - iterates the games of a multi-game text
//! - [`parse_game`] - reads the first game of a text
//!
//! # Example
//!
//! ```
//! use pgn_reader::{parse_game, GameResult};
//!
//! let game = parse_game("[White \"Morphy\"]\n1. e4 e5 2. Nf3 d6 1-0").unwrap();
//! assert_eq!(game.tag("White"), Some("Morphy"));
//! assert_eq!(game.moves().len(), 4);
//! assert_eq!(game.result(), Some(GameResult::WhiteWins));
//! ```

pub mod config;
mod cursor;
mod error;
mod game;
mod parser;
mod scanner;

pub use config::{ConfigError, ReaderConfig};
pub use error::PgnError;
pub use game::{Game, GameResult};
pub use scanner::PgnScanner;

/// Reads the first game of `text` with default settings.
pub fn parse_game(text: &str) -> Result<Game, PgnError> {
    let mut cursor = cursor::Cursor::new(text);
    parser::read_game(&mut cursor, &ReaderConfig::default())
}
