//! The recursive alpha-beta core.

use super::super::{
    apply_move, evaluate, king_in_check, undo_move, Board, Color, GameState,
};
use super::{
    KillerTable, SearchStats, MAT_LOSS, MAT_WIN, MAX_EXTRA_PLY, MAX_PLY, MIN_PLY,
    QUIESCENCE_PENALTY_CAPTURE, QUIESCENCE_THRESHOLD,
};

/// Search the position to the remaining `depth`, returning the absolute
/// score and whether this node itself ended the game.
///
/// Scores are from White's perspective throughout: White raises `alpha`,
/// Black lowers `beta`, and either side breaks off on `alpha >= beta`.
/// The board is mutated in place and restored before returning.
///
/// `quiescence_score` measures the tactical turbulence of this branch.
/// Captures add to it and it halves each ply; once the remaining depth
/// reaches the minimum-ply band, only quiet branches stop and evaluate.
/// A check against the side to move extends the search instead of
/// consuming depth, bounded by `extra_depth < MAX_EXTRA_PLY`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn alpha_beta(
    board: &mut Board,
    stats: &mut SearchStats,
    killers: &mut KillerTable,
    distance: usize,
    depth: i32,
    extra_depth: i32,
    quiescence_score: i32,
    mut alpha: i32,
    mut beta: i32,
    color: Color,
) -> (i32, GameState) {
    stats.moves_count += 1;

    if depth + extra_depth <= MAX_PLY - MIN_PLY {
        let quiet = quiescence_score < QUIESCENCE_THRESHOLD;
        if quiet || depth + extra_depth <= 0 {
            stats.boards_evaluated += 1;
            return (evaluate(board), GameState::Unfinished);
        }
    }

    let at_check = king_in_check(board, color);
    let mut moves = board.legal_moves(color);
    if moves.is_empty() {
        return if at_check {
            match color {
                Color::White => (MAT_LOSS, GameState::BlackWins),
                Color::Black => (MAT_WIN, GameState::WhiteWins),
            }
        } else {
            (0, GameState::Stalemate)
        };
    }

    killers.reorder(distance, &mut moves);

    // Stale turbulence decays; only recent captures keep a branch noisy.
    let quiescence_score = quiescence_score / 2;

    for mv in &moves {
        let record = apply_move(board, mv);
        let move_quiescence = if record.captured().is_some() {
            QUIESCENCE_PENALTY_CAPTURE
        } else {
            0
        };
        let next_extra = if at_check && extra_depth < MAX_EXTRA_PLY {
            extra_depth + 1
        } else {
            extra_depth
        };
        let (score, _) = alpha_beta(
            board,
            stats,
            killers,
            distance + 1,
            depth - 1,
            next_extra,
            quiescence_score + move_quiescence,
            alpha,
            beta,
            color.opponent(),
        );
        undo_move(board, &record);

        match color {
            Color::White => {
                if score > alpha {
                    alpha = score;
                }
            }
            Color::Black => {
                if score < beta {
                    beta = score;
                }
            }
        }
        if alpha >= beta {
            killers.record(distance, mv);
            break;
        }
    }

    let score = match color {
        Color::White => alpha,
        Color::Black => beta,
    };
    (score, GameState::Unfinished)
}
