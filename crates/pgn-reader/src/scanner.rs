//! Iterating over the games of a multi-game PGN text.

use crate::cursor::Cursor;
use crate::parser::{read_game, skip_to_next_game};
use crate::{Game, PgnError, ReaderConfig};

/// Yields the games of a PGN text in order.
///
/// After a game fails, scanning resumes after its result marker or at the
/// next tag section, so a caller may keep iterating past errors. With
/// [`ReaderConfig::skip_invalid_games`] the failed games are dropped here
/// instead of being yielded.
///
/// ```
/// use pgn_reader::PgnScanner;
///
/// let text = "[Event \"A\"]\n1. e4 e5 1-0\n\n[Event \"B\"]\n1. d4 *\n";
/// let events: Vec<String> = PgnScanner::new(text)
///     .map(|game| game.unwrap().tag("Event").unwrap().to_string())
///     .collect();
/// assert_eq!(events, ["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct PgnScanner<'a> {
    cursor: Cursor<'a>,
    config: ReaderConfig,
    returned: usize,
}

impl<'a> PgnScanner<'a> {
    /// Scans `input` with the default configuration.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ReaderConfig::default())
    }

    /// Scans `input` with `config`.
    pub fn with_config(input: &'a str, config: ReaderConfig) -> Self {
        PgnScanner {
            cursor: Cursor::new(input),
            config,
            returned: 0,
        }
    }

    /// Reads the next game, or `None` once the input or the game limit is
    /// exhausted.
    pub fn next_game(&mut self) -> Option<Result<Game, PgnError>> {
        loop {
            if self
                .config
                .max_games
                .is_some_and(|max| self.returned >= max)
            {
                return None;
            }
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                return None;
            }

            let offset = self.cursor.position();
            match read_game(&mut self.cursor, &self.config) {
                Ok(game) if is_blank(&game) => continue,
                Ok(game) => {
                    self.returned += 1;
                    return Some(Ok(game));
                }
                Err(err) => {
                    skip_to_next_game(&mut self.cursor);
                    if self.config.skip_invalid_games {
                        tracing::warn!(offset, error = %err, "skipping invalid game");
                        continue;
                    }
                    self.returned += 1;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl Iterator for PgnScanner<'_> {
    type Item = Result<Game, PgnError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_game()
    }
}

/// Escape lines or stray brackets with nothing around them.
fn is_blank(game: &Game) -> bool {
    game.tags().is_empty() && game.moves().is_empty() && game.result().is_none()
}
