//! Tag and movetext phases of a single game.

use crate::cursor::Cursor;
use crate::{Game, GameResult, PgnError, ReaderConfig};

/// Reads one game starting at the cursor.
///
/// Stops after the result marker, before the next game's `[`, or at end of
/// input.
pub(crate) fn read_game(cursor: &mut Cursor<'_>, config: &ReaderConfig) -> Result<Game, PgnError> {
    let mut game = Game::default();
    read_tags(cursor, &mut game)?;
    read_movetext(cursor, &mut game)?;
    if config.require_result && game.result().is_none() {
        return Err(PgnError::MissingResult);
    }
    tracing::debug!(
        moves = game.moves().len(),
        result = ?game.result(),
        "game read"
    );
    Ok(game)
}

/// Moves the cursor past the rest of a failed game: just after its result
/// marker, or to the next `[` outside a comment or variation, whichever comes
/// first. Games without tags are separated by their markers alone.
pub(crate) fn skip_to_next_game(cursor: &mut Cursor<'_>) {
    while let Some(c) = cursor.peek() {
        match c {
            '[' => return,
            '{' => cursor.skip_past('}'),
            ';' => cursor.skip_line(),
            '(' => skip_variation(cursor),
            _ => {
                let token = cursor.eat_while(is_token_char);
                if token.is_empty() {
                    cursor.bump();
                } else if let Some(result) = GameResult::from_marker(token) {
                    tracing::debug!(result = result.as_str(), "resynchronized at result marker");
                    return;
                }
            }
        }
    }
}

fn read_tags(cursor: &mut Cursor<'_>, game: &mut Game) -> Result<(), PgnError> {
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some('[') => {
                let (name, value) = read_tag_pair(cursor)?;
                tracing::debug!(%name, %value, "tag");
                game.set_tag(name, value);
            }
            Some(']') => {
                cursor.bump();
            }
            Some('%') if cursor.at_line_start() => cursor.skip_line(),
            _ => return Ok(()),
        }
    }
}

fn read_tag_pair(cursor: &mut Cursor<'_>) -> Result<(String, String), PgnError> {
    cursor.bump();
    cursor.skip_whitespace();
    let name = cursor
        .eat_while(|c| !c.is_whitespace() && c != '"' && c != ']')
        .to_string();
    cursor.skip_whitespace();

    let value = if cursor.peek() == Some('"') {
        cursor.bump();
        read_quoted(cursor)?
    } else {
        cursor
            .eat_while(|c| c != ']')
            .trim()
            .trim_matches('"')
            .to_string()
    };

    cursor.skip_whitespace();
    match cursor.bump() {
        Some(']') => Ok((name, value)),
        _ => Err(PgnError::UnterminatedTag),
    }
}

/// Reads the rest of a quoted string, honouring `\"` and `\\`.
fn read_quoted(cursor: &mut Cursor<'_>) -> Result<String, PgnError> {
    let mut value = String::new();
    loop {
        match cursor.bump() {
            Some('"') => return Ok(value),
            Some('\\') => match cursor.bump() {
                Some(c) => value.push(c),
                None => return Err(PgnError::UnterminatedTag),
            },
            Some(c) => value.push(c),
            None => return Err(PgnError::UnterminatedTag),
        }
    }
}

fn read_movetext(cursor: &mut Cursor<'_>, game: &mut Game) -> Result<(), PgnError> {
    let mut board = game.starting_board()?;
    let mut ply = 0;

    loop {
        cursor.skip_whitespace();
        let Some(c) = cursor.peek() else {
            return Ok(());
        };
        match c {
            '[' => return Ok(()),
            '{' => cursor.skip_past('}'),
            ';' => cursor.skip_line(),
            '%' if cursor.at_line_start() => cursor.skip_line(),
            '(' => skip_variation(cursor),
            '$' => {
                cursor.bump();
                cursor.eat_while(|c| c.is_ascii_digit());
            }
            ')' | '.' | '!' | '?' | '+' | '#' => {
                cursor.bump();
            }
            _ => {
                let token = cursor.eat_while(is_token_char);
                if token.is_empty() {
                    // Nothing in the token set; step over it.
                    cursor.bump();
                    continue;
                }
                if let Some(result) = GameResult::from_marker(token) {
                    game.set_result(result);
                    return Ok(());
                }
                let Some(san) = strip_move_number(token) else {
                    continue;
                };
                ply += 1;
                let color = board.side_to_move();
                let mv = board
                    .move_from_algebraic(san, color)
                    .map_err(|source| PgnError::Move {
                        ply,
                        token: san.to_string(),
                        source,
                    })?;
                tracing::trace!(ply, san, %mv, "move");
                game.push_move(mv);
                board.make_move(mv);
            }
        }
    }
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '{' | '}' | '(' | ')' | '[' | ']' | ';' | '$')
}

/// Skips a parenthesized variation, including nested ones and comments
/// inside it.
fn skip_variation(cursor: &mut Cursor<'_>) {
    let mut depth = 0usize;
    while let Some(c) = cursor.bump() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            '{' => cursor.skip_past('}'),
            ';' => cursor.skip_line(),
            _ => {}
        }
    }
}

/// Splits a leading move number from a token.
///
/// `"12."` and `"12..."` yield `None`, `"12.Nf3"` yields `"Nf3"`, tokens
/// without a number come back unchanged. Castling written with zeros is not a
/// move number.
fn strip_move_number(token: &str) -> Option<&str> {
    if token.starts_with("0-0") {
        return Some(token);
    }
    let rest = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == token.len() {
        return Some(token);
    }
    let san = rest.trim_start_matches('.');
    if san.is_empty() {
        None
    } else if san.len() == rest.len() {
        // Digits not followed by a period, e.g. "12" then ". e4" or junk.
        Some(token)
    } else {
        Some(san)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgn_board::ResolveError;

    fn read(text: &str) -> Result<Game, PgnError> {
        read_game(&mut Cursor::new(text), &ReaderConfig::default())
    }

    fn uci(game: &Game) -> Vec<String> {
        game.moves().iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn move_numbers() {
        assert_eq!(strip_move_number("12."), None);
        assert_eq!(strip_move_number("12..."), None);
        assert_eq!(strip_move_number("3.Nf3"), Some("Nf3"));
        assert_eq!(strip_move_number("7...Bg4"), Some("Bg4"));
        assert_eq!(strip_move_number("e4"), Some("e4"));
        assert_eq!(strip_move_number("0-0-0"), Some("0-0-0"));
        assert_eq!(strip_move_number("12"), Some("12"));
    }

    #[test]
    fn tags_are_collected() {
        let game = read(
            "[Event \"Casual Game\"]\n[Site \"Berlin GER\"]\n[White \"Anderssen\"]\n\n1. e4 *",
        )
        .unwrap();
        assert_eq!(game.tag("Event"), Some("Casual Game"));
        assert_eq!(game.tag("Site"), Some("Berlin GER"));
        assert_eq!(game.tag("White"), Some("Anderssen"));
        assert_eq!(game.result(), Some(GameResult::Ongoing));
    }

    #[test]
    fn tag_escapes_and_duplicates() {
        let game = read("[Annotator \"A \\\"B\\\" C\"]\n[Round \"1\"]\n[Round \"2\"]\n*").unwrap();
        assert_eq!(game.tag("Annotator"), Some("A \"B\" C"));
        assert_eq!(game.tag("Round"), Some("2"));
    }

    #[test]
    fn unquoted_tag_value_is_trimmed() {
        let game = read("[Round 3]\n*").unwrap();
        assert_eq!(game.tag("Round"), Some("3"));
    }

    #[test]
    fn unterminated_tag() {
        assert_eq!(read("[Event \"Never ends"), Err(PgnError::UnterminatedTag));
        assert_eq!(read("[Event \"x\""), Err(PgnError::UnterminatedTag));
    }

    #[test]
    fn movetext_with_comments_variations_and_glyphs() {
        let game = read(
            "1. e4 {best by test} e5 2. Nf3!? (2. f4 exf4 (2... d5) 3. Nf3) 2... Nc6 \
             3. Bb5 $1 a6; Morphy\n4. Ba4 Nf6 1-0",
        )
        .unwrap();
        assert_eq!(
            uci(&game),
            ["e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6"]
        );
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
    }

    #[test]
    fn compact_move_numbers() {
        let game = read("1.d4 d5 2.c4 e6 3.Nc3 Nf6 0-1").unwrap();
        assert_eq!(uci(&game), ["d2d4", "d7d5", "c2c4", "e7e6", "b1c3", "g8f6"]);
        assert_eq!(game.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn draw_marker_and_check_glyphs() {
        let game = read("1. f3 e5 2. g4 Qh4# 1/2-1/2").unwrap();
        assert_eq!(uci(&game), ["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn fen_tag_seeds_the_board() {
        let game = read(
            "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 30\"]\n\n30... Kd7 31. e4 *",
        )
        .unwrap();
        assert_eq!(uci(&game), ["e8d7", "e2e4"]);
        assert_eq!(
            game.final_board().unwrap().to_fen(),
            "8/3k4/8/8/4P3/8/8/4K3 b - e3 0 31"
        );
    }

    #[test]
    fn bad_fen_tag() {
        assert!(matches!(
            read("[FEN \"not a fen\"]\n1. e4 *"),
            Err(PgnError::Fen(_))
        ));
    }

    #[test]
    fn unresolvable_move_aborts() {
        let err = read("1. e4 e5 2. Bg5 Nf6 *").unwrap_err();
        assert_eq!(
            err,
            PgnError::Move {
                ply: 3,
                token: "Bg5".to_string(),
                source: ResolveError::AttackerNotFound("Bg5".to_string()),
            }
        );
        assert!(matches!(
            err.resolve_error(),
            Some(ResolveError::AttackerNotFound(_))
        ));
    }

    #[test]
    fn stops_before_next_game() {
        let mut cursor = Cursor::new("1. e4 e5\n\n[Event \"Next\"]\n1. d4 *");
        let game = read_game(&mut cursor, &ReaderConfig::default()).unwrap();
        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.result(), None);
        assert_eq!(cursor.peek(), Some('['));
    }

    #[test]
    fn require_result() {
        let config = ReaderConfig {
            require_result: true,
            ..ReaderConfig::default()
        };
        let err = read_game(&mut Cursor::new("1. e4 e5"), &config).unwrap_err();
        assert_eq!(err, PgnError::MissingResult);
    }

    #[test]
    fn castling_in_movetext() {
        let game = read(
            "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O Nf6 5. d3 O-O 6. Bg5 d6 7. Nc3 Be6 \
             8. Qd2 Qd7 9. Rae1 *",
        )
        .unwrap();
        let moves = uci(&game);
        assert_eq!(moves[6], "e1g1");
        assert_eq!(moves[9], "e8g8");
        assert_eq!(moves[16], "a1e1");
    }

    #[test]
    fn skip_to_next_game_ignores_brackets_in_comments() {
        let mut cursor = Cursor::new("Bz9 {see [note]} e5\n[Event \"B\"]");
        skip_to_next_game(&mut cursor);
        assert_eq!(cursor.peek(), Some('['));
        assert_eq!(cursor.position(), 20);
    }

    #[test]
    fn skip_to_next_game_stops_after_result_marker() {
        let mut cursor = Cursor::new("Ke3 {1-0 (not here)} (2. d4 0-1) Nc6 *\n1. d4 d5 *");
        skip_to_next_game(&mut cursor);
        assert_eq!(cursor.position(), 38);
        cursor.skip_whitespace();
        let game = read_game(&mut cursor, &ReaderConfig::default()).unwrap();
        assert_eq!(uci(&game), ["d2d4", "d7d5"]);
        assert!(cursor.is_eof());
    }

    #[test]
    fn skip_to_next_game_without_marker_runs_to_end() {
        let mut cursor = Cursor::new("Ke3 Nc6 1-0x");
        skip_to_next_game(&mut cursor);
        assert!(cursor.is_eof());
    }
}
