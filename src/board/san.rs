//! Standard Algebraic Notation.
//!
//! Formatting decides disambiguation the way a scorekeeper would: look
//! at every piece of the same kind attacking the destination, and add
//! the source file, rank, or both until the move is unique. Parsing
//! reuses the formatter: a string is accepted when some legal move
//! formats to it, check suffixes aside.

use super::attacks::attackers_of;
use super::error::SanError;
use super::{Board, Move, PieceKind};

/// Format a legal move in SAN. The move's `gives_check` and
/// `gives_check_mate` flags control the `+`/`#` suffix, so moves from
/// the legality filter format with checks marked and moves from the
/// search additionally mark mates.
#[must_use]
pub fn format_san(board: &Board, mv: &Move) -> String {
    let piece = board
        .piece_on(mv.from)
        .expect("format_san: 'from' square empty");

    let mut san = if piece.kind == PieceKind::King && mv.from.file.abs_diff(mv.to.file) > 1 {
        if mv.from.file < mv.to.file {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    } else {
        let mut out = String::new();
        if piece.kind != PieceKind::Pawn {
            out.push(piece.kind.letter());
        }

        let mut has_source = false;
        if piece.kind != PieceKind::Bishop && piece.kind != PieceKind::King {
            let attackers = attackers_of(board, mv.to, piece.color, piece.kind);
            if attackers.len() > 1 {
                let mut file_unique = true;
                let mut rank_unique = true;
                for other in attackers.iter().filter(|sq| **sq != mv.from) {
                    if other.file == mv.from.file {
                        file_unique = false;
                    }
                    if other.rank == mv.from.rank {
                        rank_unique = false;
                    }
                }
                has_source = true;
                if file_unique {
                    out.push(mv.from.file_char());
                } else if rank_unique && piece.kind != PieceKind::Pawn {
                    out.push(mv.from.rank_char());
                } else {
                    out.push(mv.from.file_char());
                    out.push(mv.from.rank_char());
                }
            }
        }

        if mv.is_en_passant || board.piece_on(mv.to).is_some() {
            // Capturing pawns always name their file.
            if !has_source && piece.kind == PieceKind::Pawn {
                out.push(mv.from.file_char());
            }
            out.push('x');
        }

        out.push_str(&mv.to.to_string());

        if piece.kind == PieceKind::Pawn && (mv.to.rank == 0 || mv.to.rank == 7) {
            if let Some(kind) = mv.promotion {
                out.push('=');
                out.push(kind.letter());
            }
        }
        out
    };

    if mv.gives_check_mate {
        san.push('#');
    } else if mv.gives_check {
        san.push('+');
    }
    san
}

fn strip_check_suffix(san: &str) -> &str {
    san.trim_end_matches(['+', '#'])
}

/// Parse SAN against the legal moves of the position. Check and mate
/// suffixes are ignored for matching, so "Qh5", "Qh5+" and "Qh5#" all
/// find the same move.
pub fn parse_san(board: &mut Board, san: &str) -> Result<Move, SanError> {
    if san.is_empty() {
        return Err(SanError::Empty);
    }
    let wanted = strip_check_suffix(san);
    let color = board.side_to_move();
    let moves = board.legal_moves(color);
    moves
        .into_iter()
        .find(|mv| strip_check_suffix(&format_san(board, mv)) == wanted)
        .ok_or_else(|| SanError::NoMatchingMove {
            san: san.to_string(),
        })
}
