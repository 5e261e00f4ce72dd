//! Game termination: checkmate, stalemate, and the claimable draws.

use super::{king_in_check, Board, Color, GameState};

/// What the state machine found after a move was played.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InPlay,
    Checkmate { winner: Color },
    Stalemate,
    /// 100 half-moves without a capture or pawn move; either player may
    /// claim the draw.
    FiftyMoveDraw,
    /// The position occurred three times; either player may claim.
    ThreefoldDraw,
}

impl GameStatus {
    /// The board state this status resolves to when claimed.
    #[must_use]
    pub fn to_state(self) -> GameState {
        match self {
            GameStatus::InPlay => GameState::Unfinished,
            GameStatus::Checkmate {
                winner: Color::White,
            } => GameState::WhiteWins,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => GameState::BlackWins,
            GameStatus::Stalemate => GameState::Stalemate,
            GameStatus::FiftyMoveDraw | GameStatus::ThreefoldDraw => GameState::Draw,
        }
    }
}

/// Past positions of one game, for threefold-repetition claims.
///
/// Records full position snapshots; repetition equality requires the
/// castling rights and en-passant files to match too, so the quick
/// placement-only comparison is not enough here.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    positions: Vec<Board>,
}

impl PositionHistory {
    #[must_use]
    pub fn new() -> Self {
        PositionHistory::default()
    }

    /// Snapshot the position after a move was applied.
    pub fn record(&mut self, board: &Board) {
        self.positions.push(board.clone());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// How many recorded positions equal `board` (full equality).
    #[must_use]
    pub fn occurrences(&self, board: &Board) -> usize {
        self.positions
            .iter()
            .filter(|past| past.equals(board, false))
            .count()
    }

    /// True when `board` has occurred at least three times.
    #[must_use]
    pub fn is_threefold(&self, board: &Board) -> bool {
        self.occurrences(board) >= 3
    }
}

/// The side to move is in check and has no legal reply.
#[must_use]
pub fn is_check_mate(board: &mut Board, color: Color) -> bool {
    king_in_check(board, color) && board.legal_moves(color).is_empty()
}

/// The side to move is not in check but has no legal reply.
#[must_use]
pub fn is_stale_mate(board: &mut Board, color: Color) -> bool {
    !king_in_check(board, color) && board.legal_moves(color).is_empty()
}

/// Classify the position for the side to move, consulting the game's
/// position history for repetition claims.
#[must_use]
pub fn game_status(board: &mut Board, history: &PositionHistory) -> GameStatus {
    let to_move = board.side_to_move();
    let has_moves = !board.legal_moves(to_move).is_empty();
    if !has_moves {
        return if king_in_check(board, to_move) {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if board.fifty_move_count() >= 100 {
        return GameStatus::FiftyMoveDraw;
    }
    if history.is_threefold(board) {
        return GameStatus::ThreefoldDraw;
    }
    GameStatus::InPlay
}
