//! Move application and reversal.
//!
//! The search mutates a single board in place: `apply_move` then
//! `undo_move` on every examined node. After the pair the board must be
//! identical to its pre-apply state, including counters, castling
//! rights, and en-passant files. The capture lists are exempt: plain
//! `apply_move` never touches them, `apply_move_recording` is the game
//! layer's variant that does.

use super::{castle_bit, Board, CastleSide, Color, Move, Piece, PieceKind, UndoRecord};

/// Apply `mv` to the board and return the record that reverses it.
///
/// The move must be legal for the side to move; `apply_move` trusts its
/// caller on that. Castling and en passant are recognized structurally
/// (king moving two files, pawn moving diagonally onto an empty square),
/// so moves reconstructed from notation work the same as generated ones.
pub fn apply_move(board: &mut Board, mv: &Move) -> UndoRecord {
    let piece = board
        .piece_on(mv.from)
        .expect("apply_move: 'from' square empty");
    let target = board.piece_on(mv.to);

    let mut record = UndoRecord {
        from: mv.from,
        to: mv.to,
        hit_rank: mv.to.rank,
        hit_piece: target,
        castling_rights: board.castling_rights,
        en_passant_files: board.en_passant_files,
        is_promotion: false,
        is_castling: false,
        adds_to_fifty: false,
    };

    // En-passant rights last exactly one half-move.
    board.en_passant_files = [None; 2];

    if target.is_none() && piece.kind != PieceKind::Pawn {
        board.fifty_move_count += 1;
        record.adds_to_fifty = true;
    }

    let mut moved = piece;
    match piece.kind {
        PieceKind::King => {
            board.castling_rights &= !(castle_bit(piece.color, CastleSide::King)
                | castle_bit(piece.color, CastleSide::Queen));
            if mv.from.file.abs_diff(mv.to.file) > 1 {
                // Castling: the rook slides past the king.
                let rank = mv.from.rank;
                if mv.to.file == 6 {
                    let rook = board.piece_at(7, rank);
                    board.squares[5][rank as usize] = rook;
                    board.clear(7, rank);
                } else {
                    let rook = board.piece_at(0, rank);
                    board.squares[3][rank as usize] = rook;
                    board.clear(0, rank);
                }
                record.is_castling = true;
            }
        }
        PieceKind::Rook => {
            let side = match (piece.color, mv.from.file, mv.from.rank) {
                (Color::White, 0, 7) | (Color::Black, 0, 0) => Some(CastleSide::Queen),
                (Color::White, 7, 7) | (Color::Black, 7, 0) => Some(CastleSide::King),
                _ => None,
            };
            if let Some(side) = side {
                board.castling_rights &= !castle_bit(piece.color, side);
            }
        }
        PieceKind::Pawn => {
            if mv.from.rank.abs_diff(mv.to.rank) == 2 {
                // A double push is capturable en passant by an enemy pawn
                // standing directly beside the destination.
                let enemy = piece.color.opponent();
                let file = mv.to.file as i8;
                let rank = mv.to.rank as i8;
                if board.is_at_safe(file - 1, rank, PieceKind::Pawn, enemy)
                    || board.is_at_safe(file + 1, rank, PieceKind::Pawn, enemy)
                {
                    board.en_passant_files[enemy.index()] = Some(mv.from.file);
                }
            }
            if mv.from.file != mv.to.file && target.is_none() {
                // Diagonal onto an empty square: en passant. The victim
                // stands beside the moving pawn, not on the target square.
                record.hit_rank = mv.from.rank;
                record.hit_piece = board.piece_at(mv.to.file, mv.from.rank);
                board.clear(mv.to.file, mv.from.rank);
            }
            if mv.to.rank == 0 || mv.to.rank == 7 {
                let kind = mv.promotion.expect("apply_move: promotion kind not set");
                moved = Piece::new(kind, piece.color);
                record.is_promotion = true;
            }
        }
        _ => {}
    }

    board.set(mv.to.file, mv.to.rank, moved);
    board.clear(mv.from.file, mv.from.rank);
    board.ply_count += 1;
    record
}

/// Apply a move in an actual game: same as [`apply_move`], but a
/// captured piece also goes onto the board's display capture list.
pub fn apply_move_recording(board: &mut Board, mv: &Move) -> UndoRecord {
    let record = apply_move(board, mv);
    if let Some(piece) = record.hit_piece {
        board.add_captured(piece);
    }
    record
}

/// Reverse a move, restoring the board to its exact pre-apply state.
pub fn undo_move(board: &mut Board, record: &UndoRecord) {
    let moved = board
        .piece_on(record.to)
        .expect("undo_move: 'to' square empty");

    let restored = if record.is_promotion {
        Piece::new(PieceKind::Pawn, moved.color)
    } else {
        moved
    };
    board.set(record.from.file, record.from.rank, restored);
    board.clear(record.to.file, record.to.rank);

    if record.adds_to_fifty {
        board.fifty_move_count -= 1;
    }

    // For a normal move hit_rank is the target rank, so this either puts
    // the captured piece back or re-clears the vacated square. For en
    // passant it re-creates the victim beside the pawn.
    board.squares[record.to.file as usize][record.hit_rank as usize] = record.hit_piece;

    if record.is_castling {
        let rank = record.to.rank as usize;
        if record.to.file == 2 {
            board.squares[0][rank] = board.squares[3][rank];
            board.squares[3][rank] = None;
        } else {
            board.squares[7][rank] = board.squares[5][rank];
            board.squares[5][rank] = None;
        }
    }

    board.castling_rights = record.castling_rights;
    board.en_passant_files = record.en_passant_files;
    board.ply_count -= 1;
}
