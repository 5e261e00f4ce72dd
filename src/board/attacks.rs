//! Attack detection: "is this square attacked, and by what?"

use super::{Board, Color, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walk a ray from `sq` and report whether the first occupied square
/// holds an `attacker`-colored slider of one of the two given kinds.
fn ray_hits(
    board: &Board,
    sq: Square,
    dir: (i8, i8),
    attacker: Color,
    kinds: [PieceKind; 2],
) -> bool {
    let mut file = sq.file as i8 + dir.0;
    let mut rank = sq.rank as i8 + dir.1;
    while (0..8).contains(&file) && (0..8).contains(&rank) {
        if let Some(piece) = board.piece_at(file as u8, rank as u8) {
            return piece.color == attacker && (piece.kind == kinds[0] || piece.kind == kinds[1]);
        }
        file += dir.0;
        rank += dir.1;
    }
    false
}

/// Returns true if any piece of `defender`'s opponent attacks `sq`.
///
/// Checks pawn attacks, knight jumps, cardinal sliders (rook/queen),
/// diagonal sliders (bishop/queen), and adjacent kings, in that order.
#[must_use]
pub fn square_attacked_by(board: &Board, sq: Square, defender: Color) -> bool {
    let attacker = defender.opponent();
    let file = sq.file as i8;
    let rank = sq.rank as i8;

    // A pawn of the attacker sits one rank behind its capture target.
    let pawn_rank = rank - attacker.forward();
    if board.is_at_safe(file - 1, pawn_rank, PieceKind::Pawn, attacker)
        || board.is_at_safe(file + 1, pawn_rank, PieceKind::Pawn, attacker)
    {
        return true;
    }

    for (df, dr) in KNIGHT_OFFSETS {
        if board.is_at_safe(file + df, rank + dr, PieceKind::Knight, attacker) {
            return true;
        }
    }

    for dir in ROOK_RAYS {
        if ray_hits(board, sq, dir, attacker, [PieceKind::Rook, PieceKind::Queen]) {
            return true;
        }
    }

    for dir in BISHOP_RAYS {
        if ray_hits(board, sq, dir, attacker, [PieceKind::Bishop, PieceKind::Queen]) {
            return true;
        }
    }

    for (df, dr) in KING_OFFSETS {
        if board.is_at_safe(file + df, rank + dr, PieceKind::King, attacker) {
            return true;
        }
    }

    false
}

/// Returns true if the king of `color` stands on an attacked square.
/// A board without that king is a broken position and reports check.
#[must_use]
pub fn king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(sq) => square_attacked_by(board, sq, color),
        None => true,
    }
}

/// Collect `attacker`-colored pieces of `kind` on the offset squares.
fn offset_attackers(
    board: &Board,
    target: Square,
    attacker: Color,
    kind: PieceKind,
    offsets: &[(i8, i8)],
    found: &mut Vec<Square>,
) {
    for &(df, dr) in offsets {
        let f = target.file as i8 + df;
        let r = target.rank as i8 + dr;
        if board.is_at_safe(f, r, kind, attacker) {
            found.push(Square::new(f as u8, r as u8));
        }
    }
}

/// Collect `attacker`-colored sliders of `kind` seeing `target` along rays.
fn ray_attackers(
    board: &Board,
    target: Square,
    attacker: Color,
    kind: PieceKind,
    rays: &[(i8, i8)],
    found: &mut Vec<Square>,
) {
    for &dir in rays {
        let mut f = target.file as i8 + dir.0;
        let mut r = target.rank as i8 + dir.1;
        while (0..8).contains(&f) && (0..8).contains(&r) {
            if let Some(piece) = board.piece_at(f as u8, r as u8) {
                if piece.matches(kind, attacker) {
                    found.push(Square::new(f as u8, r as u8));
                }
                break;
            }
            f += dir.0;
            r += dir.1;
        }
    }
}

/// Squares of `attacker`-colored pieces of the given kind that attack
/// `target`. Used by SAN formatting to decide disambiguation.
///
/// Pawn attackers are only reported when the target square is occupied,
/// since a pawn attacks diagonally but moves straight.
#[must_use]
pub(crate) fn attackers_of(
    board: &Board,
    target: Square,
    attacker: Color,
    kind: PieceKind,
) -> Vec<Square> {
    let mut found = Vec::new();
    match kind {
        PieceKind::Pawn => {
            if board.piece_on(target).is_some() {
                let pawn_rank = target.rank as i8 - attacker.forward();
                for df in [-1i8, 1] {
                    let f = target.file as i8 + df;
                    if board.is_at_safe(f, pawn_rank, PieceKind::Pawn, attacker) {
                        found.push(Square::new(f as u8, pawn_rank as u8));
                    }
                }
            }
        }
        PieceKind::Knight => {
            offset_attackers(board, target, attacker, kind, &KNIGHT_OFFSETS, &mut found);
        }
        PieceKind::King => {
            offset_attackers(board, target, attacker, kind, &KING_OFFSETS, &mut found);
        }
        PieceKind::Rook => {
            ray_attackers(board, target, attacker, kind, &ROOK_RAYS, &mut found);
        }
        PieceKind::Bishop => {
            ray_attackers(board, target, attacker, kind, &BISHOP_RAYS, &mut found);
        }
        PieceKind::Queen => {
            ray_attackers(board, target, attacker, kind, &ROOK_RAYS, &mut found);
            ray_attackers(board, target, attacker, kind, &BISHOP_RAYS, &mut found);
        }
    }
    found
}
