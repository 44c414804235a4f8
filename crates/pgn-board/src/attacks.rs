//! Pseudo-legal reachability for every piece kind.
//!
//! These functions answer "can the piece on `from` move to `to` given the
//! current occupancy?" without looking at checks or pins. The resolver uses
//! them to build its candidate set.

use crate::Board;
use pgn_core::{Color, Piece, PieceKind, Square};

/// Knight jump offsets as (file delta, rank delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// King step offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Returns true if a `color` piece of `kind` standing on `from` could move to
/// `to` on this board.
///
/// A destination holding one of the mover's own pieces is never reachable.
pub fn reaches(board: &Board, from: Square, to: Square, kind: PieceKind, color: Color) -> bool {
    if from == to {
        return false;
    }
    if board.piece_at(to).is_some_and(|p| p.color() == color) {
        return false;
    }
    match kind {
        PieceKind::Pawn => pawn_reaches(board, from, to, color),
        PieceKind::Knight => steps_to(from, to, &KNIGHT_OFFSETS),
        PieceKind::King => steps_to(from, to, &KING_OFFSETS),
        PieceKind::Bishop => slides_to(board, from, to, &BISHOP_DIRECTIONS),
        PieceKind::Rook => slides_to(board, from, to, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            slides_to(board, from, to, &ROOK_DIRECTIONS)
                || slides_to(board, from, to, &BISHOP_DIRECTIONS)
        }
    }
}

/// Returns every square holding a `color` piece of `kind` that reaches `to`,
/// in square index order.
pub fn candidates(board: &Board, to: Square, kind: PieceKind, color: Color) -> Vec<Square> {
    let piece = Piece::new(color, kind);
    Square::all()
        .filter(|&from| board.piece_at(from) == Some(piece))
        .filter(|&from| reaches(board, from, to, kind, color))
        .collect()
}

fn steps_to(from: Square, to: Square, offsets: &[(i8, i8)]) -> bool {
    offsets
        .iter()
        .any(|&(df, dr)| from.offset(df, dr) == Some(to))
}

/// Walks each ray from `from` until it leaves the board or hits a piece.
fn slides_to(board: &Board, from: Square, to: Square, directions: &[(i8, i8)]) -> bool {
    directions.iter().any(|&(df, dr)| {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            if next == to {
                return true;
            }
            if board.contains_piece_at(next) {
                return false;
            }
            current = next;
        }
        false
    })
}

/// Pawns capture diagonally onto an occupied square (or the en passant
/// target) and otherwise push straight ahead onto empty squares.
fn pawn_reaches(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let capturing = board.contains_piece_at(to) || board.en_passant() == Some(to);

    if capturing {
        return from.offset(-1, dir) == Some(to) || from.offset(1, dir) == Some(to);
    }

    match from.offset(0, dir) {
        Some(one) if one == to => true,
        Some(one) => {
            from.rank() == color.pawn_rank()
                && to.rank() == color.double_push_rank()
                && !board.contains_piece_at(one)
                && one.offset(0, dir) == Some(to)
        }
        None => false,
    }
}
