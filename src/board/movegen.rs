//! Pseudo-legal move generation and the legality filter.
//!
//! Generation walks the mailbox directly. The legality filter plays each
//! pseudo-legal move on the board, rejects it if the mover's own king is
//! attacked afterwards, and marks whether it checks the enemy king. The
//! order of generated moves carries no meaning.

use super::attacks::{
    king_in_check, square_attacked_by, BISHOP_RAYS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_RAYS,
};
use super::{
    apply_move, undo_move, Board, CastleSide, Color, Move, MoveList, PieceKind, Square,
};

/// Promotion choices the enumerator offers. Rook and bishop promotions
/// are pruned: a queen dominates both except where a knight is needed.
const PROMOTION_KINDS: [PieceKind; 2] = [PieceKind::Queen, PieceKind::Knight];

/// Starting rank of pawns per color index.
const PAWN_START_RANK: [u8; 2] = [6, 1];

/// Rank a pawn must stand on to capture en passant, per color index.
const EN_PASSANT_RANK: [u8; 2] = [3, 4];

impl Board {
    /// All legal moves for `color`: pseudo-legal generation followed by
    /// the own-king-safety filter. Surviving moves are flagged with
    /// `gives_check` (enemy king attacked afterwards) and `is_evasion`
    /// (the mover was in check to begin with).
    #[must_use]
    pub fn legal_moves(&mut self, color: Color) -> MoveList {
        let mut pseudo = MoveList::new();
        for file in 0..8 {
            for rank in 0..8 {
                if self.is_color(file, rank, color) {
                    self.pseudo_moves_into(Square::new(file, rank), &mut pseudo);
                }
            }
        }

        let at_check = king_in_check(self, color);
        let mut legal = MoveList::new();
        for mut mv in pseudo {
            let record = apply_move(self, &mv);
            let safe = !king_in_check(self, color);
            if safe {
                mv.gives_check = king_in_check(self, color.opponent());
                mv.is_evasion = at_check;
            }
            undo_move(self, &record);
            if safe {
                legal.push(mv);
            }
        }
        legal
    }

    /// Pseudo-legal moves of the piece on `from`, appended to `out`.
    pub(crate) fn pseudo_moves_into(&self, from: Square, out: &mut MoveList) {
        let piece = match self.piece_on(from) {
            Some(p) => p,
            None => return,
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => {
                self.visit_pawn_targets(from, color, &mut |to, is_en_passant| {
                    if is_en_passant {
                        let mut mv = Move::new(color, from, to, None);
                        mv.is_en_passant = true;
                        out.push(mv);
                    } else if to.rank == 0 || to.rank == 7 {
                        for kind in PROMOTION_KINDS {
                            out.push(Move::new(color, from, to, Some(kind)));
                        }
                    } else {
                        out.push(Move::new(color, from, to, None));
                    }
                });
            }
            PieceKind::Knight => {
                self.visit_offset_targets(from, color, &KNIGHT_OFFSETS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
            }
            PieceKind::Bishop => {
                self.visit_ray_targets(from, color, &BISHOP_RAYS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
            }
            PieceKind::Rook => {
                self.visit_ray_targets(from, color, &ROOK_RAYS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
            }
            PieceKind::Queen => {
                self.visit_ray_targets(from, color, &ROOK_RAYS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
                self.visit_ray_targets(from, color, &BISHOP_RAYS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
            }
            PieceKind::King => {
                self.visit_offset_targets(from, color, &KING_OFFSETS, &mut |to| {
                    out.push(Move::new(color, from, to, None));
                });
                self.castling_moves_into(from, color, out);
            }
        }
    }

    /// Rough pseudo-move target count of the piece on `from`, without
    /// promotion fan-out or castling. The evaluator's mobility input.
    #[must_use]
    pub(crate) fn mobility(&self, from: Square) -> usize {
        let piece = match self.piece_on(from) {
            Some(p) => p,
            None => return 0,
        };
        let color = piece.color;
        let mut count = 0usize;
        match piece.kind {
            PieceKind::Pawn => {
                self.visit_pawn_targets(from, color, &mut |_, _| count += 1);
            }
            PieceKind::Knight => {
                self.visit_offset_targets(from, color, &KNIGHT_OFFSETS, &mut |_| count += 1);
            }
            PieceKind::Bishop => {
                self.visit_ray_targets(from, color, &BISHOP_RAYS, &mut |_| count += 1);
            }
            PieceKind::Rook => {
                self.visit_ray_targets(from, color, &ROOK_RAYS, &mut |_| count += 1);
            }
            PieceKind::Queen => {
                self.visit_ray_targets(from, color, &ROOK_RAYS, &mut |_| count += 1);
                self.visit_ray_targets(from, color, &BISHOP_RAYS, &mut |_| count += 1);
            }
            PieceKind::King => {
                self.visit_offset_targets(from, color, &KING_OFFSETS, &mut |_| count += 1);
            }
        }
        count
    }

    /// Pawn targets: pushes, captures, and en passant. Promotion targets
    /// are visited once; the caller fans them out.
    fn visit_pawn_targets(
        &self,
        from: Square,
        color: Color,
        emit: &mut impl FnMut(Square, bool),
    ) {
        let dir = color.forward();
        let file = from.file as i8;
        let rank = from.rank as i8;
        let one = rank + dir;

        if (0..8).contains(&one) && self.piece_at(from.file, one as u8).is_none() {
            emit(Square::new(from.file, one as u8), false);
            if from.rank == PAWN_START_RANK[color.index()] {
                let two = rank + 2 * dir;
                if self.piece_at(from.file, two as u8).is_none() {
                    emit(Square::new(from.file, two as u8), false);
                }
            }
        }

        for df in [-1i8, 1] {
            let cf = file + df;
            if (0..8).contains(&cf)
                && (0..8).contains(&one)
                && self.is_color(cf as u8, one as u8, color.opponent())
            {
                emit(Square::new(cf as u8, one as u8), false);
            }
        }

        if let Some(ep_file) = self.en_passant_files[color.index()] {
            if from.rank == EN_PASSANT_RANK[color.index()]
                && (ep_file as i8 - file).abs() == 1
            {
                emit(Square::new(ep_file, one as u8), true);
            }
        }
    }

    fn visit_offset_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        emit: &mut impl FnMut(Square),
    ) {
        for &(df, dr) in offsets {
            let f = from.file as i8 + df;
            let r = from.rank as i8 + dr;
            if !(0..8).contains(&f) || !(0..8).contains(&r) {
                continue;
            }
            match self.piece_at(f as u8, r as u8) {
                Some(p) if p.color == color => {}
                _ => emit(Square::new(f as u8, r as u8)),
            }
        }
    }

    /// Slide along each ray, stopping at the first occupied square and
    /// including it only when enemy-occupied.
    fn visit_ray_targets(
        &self,
        from: Square,
        color: Color,
        rays: &[(i8, i8)],
        emit: &mut impl FnMut(Square),
    ) {
        for &(df, dr) in rays {
            let mut f = from.file as i8 + df;
            let mut r = from.rank as i8 + dr;
            while (0..8).contains(&f) && (0..8).contains(&r) {
                match self.piece_at(f as u8, r as u8) {
                    None => emit(Square::new(f as u8, r as u8)),
                    Some(p) => {
                        if p.color != color {
                            emit(Square::new(f as u8, r as u8));
                        }
                        break;
                    }
                }
                f += df;
                r += dr;
            }
        }
    }

    /// Castling: the king must stand on its home square, not be in
    /// check, the rook must still be in its corner with the right
    /// intact, the squares between must be empty, and neither the
    /// squares the king crosses nor its destination may be attacked.
    fn castling_moves_into(&self, from: Square, color: Color, out: &mut MoveList) {
        let home_rank = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        if from != Square::new(4, home_rank) || square_attacked_by(self, from, color) {
            return;
        }

        if self.has_castling_right(color, CastleSide::Queen)
            && self.is_at(0, home_rank, PieceKind::Rook, color)
            && self.is_empty(1, home_rank)
            && self.is_empty(2, home_rank)
            && self.is_empty(3, home_rank)
            && !square_attacked_by(self, Square::new(2, home_rank), color)
            && !square_attacked_by(self, Square::new(3, home_rank), color)
        {
            let mut mv = Move::new(color, from, Square::new(2, home_rank), None);
            mv.is_castling = true;
            out.push(mv);
        }

        if self.has_castling_right(color, CastleSide::King)
            && self.is_at(7, home_rank, PieceKind::Rook, color)
            && self.is_empty(5, home_rank)
            && self.is_empty(6, home_rank)
            && !square_attacked_by(self, Square::new(5, home_rank), color)
            && !square_attacked_by(self, Square::new(6, home_rank), color)
        {
            let mut mv = Move::new(color, from, Square::new(6, home_rank), None);
            mv.is_castling = true;
            out.push(mv);
        }
    }
}
