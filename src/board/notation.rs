//! Simple machine-readable move notation: "e2-e4", "e7-e8Q".

use super::error::MoveParseError;
use super::{Board, Move};

/// Format a move as `from-to` plus an optional promotion letter.
#[must_use]
pub fn format_plain(mv: &Move) -> String {
    mv.to_string()
}

/// Parse simple notation against the legal moves of the position, so an
/// accepted move is always playable as returned.
pub fn parse_plain(board: &mut Board, notation: &str) -> Result<Move, MoveParseError> {
    let shape_ok = matches!(notation.len(), 5 | 6) && notation.as_bytes()[2] == b'-';
    if !shape_ok {
        return Err(MoveParseError::Malformed {
            notation: notation.to_string(),
        });
    }
    let color = board.side_to_move();
    board
        .legal_moves(color)
        .into_iter()
        .find(|mv| format_plain(mv) == notation)
        .ok_or_else(|| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })
}
