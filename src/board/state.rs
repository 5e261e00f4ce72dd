//! The board: an 8x8 mailbox of optional pieces plus game-state flags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::CASTLE_ALL;
use super::{castle_bit, CastleSide, Color, Piece, PieceKind, Square};

/// Overall result of a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Unfinished,
    WhiteWins,
    BlackWins,
    Stalemate,
    Draw,
}

impl GameState {
    /// Numeric code used by the savegame format.
    #[must_use]
    pub(crate) const fn code(self) -> u8 {
        match self {
            GameState::Unfinished => 0,
            GameState::WhiteWins => 1,
            GameState::BlackWins => 2,
            GameState::Stalemate => 3,
            GameState::Draw => 4,
        }
    }

    #[must_use]
    pub(crate) const fn from_code(code: u8) -> Option<GameState> {
        match code {
            0 => Some(GameState::Unfinished),
            1 => Some(GameState::WhiteWins),
            2 => Some(GameState::BlackWins),
            3 => Some(GameState::Stalemate),
            4 => Some(GameState::Draw),
            _ => None,
        }
    }
}

/// An 8x8 board of pieces together with the game-state flags that the
/// rules need: move counters, castling rights, en-passant files, and the
/// capture lists shown next to the board.
///
/// Cells are indexed `[file][rank]`; see [`Square`] for the orientation.
#[derive(Debug)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    /// Half-moves completed since the start of the game.
    pub(crate) ply_count: u16,
    /// Half-moves that were neither captures nor pawn moves.
    pub(crate) fifty_move_count: u16,
    pub(crate) castling_rights: u8,
    /// File on which the indexed color may capture en passant, if any.
    pub(crate) en_passant_files: [Option<u8>; 2],
    pub(crate) state: GameState,
    /// Captured pieces per color of the captured piece. Display only;
    /// never consulted by the rules, the evaluator, or the search.
    pub(crate) captures: [Vec<Piece>; 2],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = file as u8;
            board.set(file, 0, Piece::new(kind, Color::Black));
            board.set(file, 1, Piece::new(PieceKind::Pawn, Color::Black));
            board.set(file, 6, Piece::new(PieceKind::Pawn, Color::White));
            board.set(file, 7, Piece::new(kind, Color::White));
        }
        board.castling_rights = CASTLE_ALL;
        board
    }

    /// An empty board with no pieces and no castling rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            ply_count: 0,
            fifty_move_count: 0,
            castling_rights: 0,
            en_passant_files: [None; 2],
            state: GameState::Unfinished,
            captures: [Vec::new(), Vec::new()],
        }
    }

    /// Piece on (file, rank). Caller guarantees both are in 0..=7.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, file: u8, rank: u8) -> Option<Piece> {
        self.squares[file as usize][rank as usize]
    }

    /// Like [`piece_at`](Self::piece_at) but returns None out of bounds.
    /// Takes signed coordinates so callers can probe offsets directly.
    #[inline]
    #[must_use]
    pub fn piece_at_safe(&self, file: i8, rank: i8) -> Option<Piece> {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        self.squares[file as usize][rank as usize]
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq.file, sq.rank)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, file: u8, rank: u8) -> bool {
        self.piece_at(file, rank).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_color(&self, file: u8, rank: u8, color: Color) -> bool {
        matches!(self.piece_at(file, rank), Some(p) if p.color == color)
    }

    #[inline]
    #[must_use]
    pub fn is_kind(&self, file: u8, rank: u8, kind: PieceKind) -> bool {
        matches!(self.piece_at(file, rank), Some(p) if p.kind == kind)
    }

    #[inline]
    #[must_use]
    pub fn is_at(&self, file: u8, rank: u8, kind: PieceKind, color: Color) -> bool {
        matches!(self.piece_at(file, rank), Some(p) if p.matches(kind, color))
    }

    /// Out-of-bounds tolerant variant of [`is_at`](Self::is_at).
    #[inline]
    #[must_use]
    pub fn is_at_safe(&self, file: i8, rank: i8, kind: PieceKind, color: Color) -> bool {
        matches!(self.piece_at_safe(file, rank), Some(p) if p.matches(kind, color))
    }

    #[inline]
    pub fn set(&mut self, file: u8, rank: u8, piece: Piece) {
        self.squares[file as usize][rank as usize] = Some(piece);
    }

    #[inline]
    pub fn clear(&mut self, file: u8, rank: u8) {
        self.squares[file as usize][rank as usize] = None;
    }

    /// Side to move, derived from the ply parity.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.ply_count % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub fn ply_count(&self) -> u16 {
        self.ply_count
    }

    #[inline]
    #[must_use]
    pub fn fifty_move_count(&self) -> u16 {
        self.fifty_move_count
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    #[inline]
    #[must_use]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & castle_bit(color, side) != 0
    }

    /// File on which `color` may currently capture en passant.
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self, color: Color) -> Option<u8> {
        self.en_passant_files[color.index()]
    }

    /// Captured pieces of the given color, in capture order.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captures[color.index()]
    }

    pub(crate) fn add_captured(&mut self, piece: Piece) {
        self.captures[piece.color.index()].push(piece);
    }

    /// Position equality. `quick` compares piece placement only; the
    /// full comparison also requires identical castling rights and
    /// en-passant files (what threefold repetition needs).
    #[must_use]
    pub fn equals(&self, other: &Board, quick: bool) -> bool {
        if !quick
            && (self.castling_rights != other.castling_rights
                || self.en_passant_files != other.en_passant_files)
        {
            return false;
        }
        self.squares == other.squares
    }

    /// Find the king of `color`.
    #[must_use]
    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        for file in 0..8 {
            for rank in 0..8 {
                if self.is_at(file, rank, PieceKind::King, color) {
                    return Some(Square::new(file, rank));
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Cloning a board copies the position and counters but starts with
/// empty capture lists: those are display artifacts of one game, not
/// part of the position, and search workers never need them.
impl Clone for Board {
    fn clone(&self) -> Self {
        Board {
            squares: self.squares,
            ply_count: self.ply_count,
            fifty_move_count: self.fifty_move_count,
            castling_rights: self.castling_rights,
            en_passant_files: self.en_passant_files,
            state: self.state,
            captures: [Vec::new(), Vec::new()],
        }
    }
}

impl fmt::Display for Board {
    /// Plain ASCII rendering from White's point of view. White pieces
    /// are uppercase, black pieces lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in 0..8u8 {
            write!(f, "{} |", (b'8' - rank) as char)?;
            for file in 0..8u8 {
                match self.piece_at(file, rank) {
                    Some(p) => {
                        let c = match p.color {
                            Color::White => p.kind.letter().to_ascii_uppercase(),
                            Color::Black => p.kind.letter().to_ascii_lowercase(),
                        };
                        write!(f, " {c} |")?;
                    }
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f, " {}", (b'8' - rank) as char)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        match self.state {
            GameState::Unfinished => Ok(()),
            GameState::WhiteWins => writeln!(f, "\nWhite wins!"),
            GameState::BlackWins => writeln!(f, "\nBlack wins!"),
            GameState::Stalemate => writeln!(f, "\nStale mate!"),
            GameState::Draw => writeln!(f, "\nGame ended in a draw."),
        }
    }
}
