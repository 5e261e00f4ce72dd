//! Savegame serialization: a text grid plus one state line.
//!
//! The grid is eight lines of eight two-character cells ("--" for an
//! empty square, otherwise a color tag and piece letter like "wp" or
//! "bR"), written rank by rank from Black's back rank. After a blank
//! line follows the state line with the numeric game flags, and then
//! the captured pieces, white ones first.

use std::fs;
use std::path::Path;

use super::error::SaveGameError;
use super::{Board, Color, GameState, Piece, PieceKind};

fn parse_symbol(symbol: &str) -> Result<Option<Piece>, SaveGameError> {
    let invalid = || SaveGameError::InvalidPiece {
        symbol: symbol.to_string(),
    };
    let mut chars = symbol.chars();
    let (tag, letter) = match (chars.next(), chars.next()) {
        (Some(t), Some(l)) => (t, l),
        _ => return Err(invalid()),
    };
    let color = match tag {
        '-' => return Ok(None),
        'w' => Color::White,
        'b' => Color::Black,
        _ => return Err(invalid()),
    };
    let kind = PieceKind::from_letter(letter).ok_or_else(invalid)?;
    Ok(Some(Piece::new(kind, color)))
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, SaveGameError> {
    value.parse().map_err(|_| SaveGameError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, SaveGameError> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(SaveGameError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_en_passant(field: &'static str, value: &str) -> Result<Option<u8>, SaveGameError> {
    let file: i16 = parse_field(field, value)?;
    match file {
        -1 => Ok(None),
        0..=7 => Ok(Some(file as u8)),
        _ => Err(SaveGameError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}

impl Board {
    /// Serialize the whole game state to the savegame text format.
    #[must_use]
    pub fn to_save_string(&self) -> String {
        let mut out = String::new();
        for rank in 0..8u8 {
            for file in 0..8u8 {
                match self.piece_at(file, rank) {
                    Some(piece) => out.push_str(&piece.symbol()),
                    None => out.push_str("--"),
                }
            }
            out.push('\n');
        }
        let ep = |color: Color| self.en_passant_files[color.index()].map_or(-1, i16::from);
        out.push('\n');
        out.push_str(&format!(
            "{} {} {} {} {} {} {} {} {} {} {}\n",
            u8::from(self.has_castling_right(Color::White, super::CastleSide::Queen)),
            u8::from(self.has_castling_right(Color::White, super::CastleSide::King)),
            u8::from(self.has_castling_right(Color::Black, super::CastleSide::Queen)),
            u8::from(self.has_castling_right(Color::Black, super::CastleSide::King)),
            ep(Color::White),
            ep(Color::Black),
            self.ply_count,
            self.fifty_move_count,
            self.state.code(),
            self.captures[Color::White.index()].len(),
            self.captures[Color::Black.index()].len(),
        ));
        for color in [Color::White, Color::Black] {
            for piece in &self.captures[color.index()] {
                out.push_str(&piece.symbol());
            }
        }
        out.push('\n');
        out
    }

    /// Parse the savegame text format back into a board.
    pub fn parse_save(text: &str) -> Result<Board, SaveGameError> {
        let mut lines = text.lines();
        let mut board = Board::empty();

        for rank in 0..8u8 {
            let line = lines
                .next()
                .ok_or(SaveGameError::TruncatedGrid { line: rank as usize })?;
            if line.len() != 16 {
                return Err(SaveGameError::TruncatedGrid { line: rank as usize });
            }
            for file in 0..8u8 {
                let at = file as usize * 2;
                let cell = line
                    .get(at..at + 2)
                    .ok_or(SaveGameError::TruncatedGrid { line: rank as usize })?;
                if let Some(piece) = parse_symbol(cell)? {
                    board.set(file, rank, piece);
                }
            }
        }

        let state_line = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or(SaveGameError::InvalidStateLine { found: 0 })?;
        let fields: Vec<&str> = state_line.split_whitespace().collect();
        if fields.len() != 11 {
            return Err(SaveGameError::InvalidStateLine {
                found: fields.len(),
            });
        }

        let mut rights = 0u8;
        for (bit, (field, value)) in [
            super::CASTLE_WHITE_Q,
            super::CASTLE_WHITE_K,
            super::CASTLE_BLACK_Q,
            super::CASTLE_BLACK_K,
        ]
        .into_iter()
        .zip(
            ["wcqs", "wcks", "bcqs", "bcks"]
                .into_iter()
                .zip(fields.iter().copied()),
        ) {
            if parse_flag(field, value)? {
                rights |= bit;
            }
        }
        board.castling_rights = rights;
        board.en_passant_files[Color::White.index()] = parse_en_passant("wep", fields[4])?;
        board.en_passant_files[Color::Black.index()] = parse_en_passant("bep", fields[5])?;
        board.ply_count = parse_field("ply", fields[6])?;
        board.fifty_move_count = parse_field("fifty", fields[7])?;
        let code: u8 = parse_field("state", fields[8])?;
        board.state = GameState::from_code(code).ok_or(SaveGameError::InvalidField {
            field: "state",
            value: fields[8].to_string(),
        })?;
        let captures_white: usize = parse_field("captures_white", fields[9])?;
        let captures_black: usize = parse_field("captures_black", fields[10])?;

        let total = captures_white + captures_black;
        if total > 0 {
            let capture_line = lines
                .find(|line| !line.trim().is_empty())
                .ok_or(SaveGameError::TruncatedCaptures)?;
            if capture_line.len() < total * 2 {
                return Err(SaveGameError::TruncatedCaptures);
            }
            for i in 0..total {
                let cell = capture_line
                    .get(i * 2..i * 2 + 2)
                    .ok_or(SaveGameError::TruncatedCaptures)?;
                let piece = parse_symbol(cell)?.ok_or(SaveGameError::InvalidPiece {
                    symbol: cell.to_string(),
                })?;
                board.add_captured(piece);
            }
        }

        Ok(board)
    }

    /// Write the savegame to a file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveGameError> {
        fs::write(path, self.to_save_string())?;
        Ok(())
    }

    /// Read a savegame from a file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Board, SaveGameError> {
        let text = fs::read_to_string(path)?;
        Board::parse_save(&text)
    }
}
