//! Unit tests for the board crate.

mod movegen;
mod status;

use crate::board::{Board, Color, Move, MoveList, PieceKind, Square};

/// Find the legal move from `from` to `to`, panicking when absent.
pub(crate) fn find_move(board: &mut Board, color: Color, from: &str, to: &str) -> Move {
    try_find_move(board, color, from, to)
        .unwrap_or_else(|| panic!("expected legal move {from}-{to}"))
}

pub(crate) fn try_find_move(
    board: &mut Board,
    color: Color,
    from: &str,
    to: &str,
) -> Option<Move> {
    let from = Square::parse(from).unwrap();
    let to = Square::parse(to).unwrap();
    board
        .legal_moves(color)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
}

/// Find a specific promotion variant.
pub(crate) fn find_promotion(
    board: &mut Board,
    color: Color,
    from: &str,
    to: &str,
    kind: PieceKind,
) -> Move {
    let from = Square::parse(from).unwrap();
    let to = Square::parse(to).unwrap();
    board
        .legal_moves(color)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == Some(kind))
        .unwrap_or_else(|| panic!("expected promotion to {kind:?}"))
}

/// All legal moves from one square, for counting assertions.
pub(crate) fn moves_from(board: &mut Board, color: Color, from: &str) -> MoveList {
    let from = Square::parse(from).unwrap();
    board
        .legal_moves(color)
        .into_iter()
        .filter(|mv| mv.from == from)
        .collect::<Vec<_>>()
        .into()
}

/// Mirror a position: flip ranks and swap colors. The evaluator must be
/// antisymmetric under this transformation.
pub(crate) fn mirror(board: &Board) -> Board {
    let mut mirrored = Board::empty();
    for file in 0..8u8 {
        for rank in 0..8u8 {
            if let Some(piece) = board.piece_at(file, rank) {
                mirrored.set(
                    file,
                    7 - rank,
                    crate::board::Piece::new(piece.kind, piece.color.opponent()),
                );
            }
        }
    }
    mirrored
}
