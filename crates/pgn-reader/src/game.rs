//! A parsed game: tag pairs, resolved moves and the result marker.

use pgn_board::Board;
use pgn_core::{FenError, Move};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Outcome recorded by the movetext result marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    /// `*`: game unfinished or result unknown.
    #[serde(rename = "*")]
    Ongoing,
}

impl GameResult {
    /// Recognizes one of the four standard result markers.
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            "1-0" => Some(GameResult::WhiteWins),
            "0-1" => Some(GameResult::BlackWins),
            "1/2-1/2" => Some(GameResult::Draw),
            "*" => Some(GameResult::Ongoing),
            _ => None,
        }
    }

    /// Returns the marker text.
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game read from PGN text.
///
/// Moves are in play order. Tags keep the last value seen for each name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    tags: HashMap<String, String>,
    moves: Vec<Move>,
    result: Option<GameResult>,
}

impl Game {
    pub(crate) fn set_tag(&mut self, name: String, value: String) {
        self.tags.insert(name, value);
    }

    pub(crate) fn push_move(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    /// All tag pairs.
    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    /// Looks up a single tag value.
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// The resolved moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The result marker that ended the movetext, if there was one.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The position the moves start from: the `FEN` tag if present,
    /// otherwise the standard start.
    pub fn starting_board(&self) -> Result<Board, FenError> {
        match self.tag("FEN") {
            Some(fen) if !fen.is_empty() => Board::from_fen(fen),
            _ => Ok(Board::new()),
        }
    }

    /// The position after every ply, starting with the initial one.
    pub fn boards(&self) -> Result<Vec<Board>, FenError> {
        let mut board = self.starting_board()?;
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(board.clone());
        for &mv in &self.moves {
            board.make_move(mv);
            boards.push(board.clone());
        }
        Ok(boards)
    }

    /// The position after the last move.
    pub fn final_board(&self) -> Result<Board, FenError> {
        let mut board = self.starting_board()?;
        for &mv in &self.moves {
            board.make_move(mv);
        }
        Ok(board)
    }
}
