//! Error types for chess board operations.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a two-character a1..h8 coordinate
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for simple "e2-e4" move notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string is not of the form e2-e4 or e7-e8Q
    Malformed { notation: String },
    /// Well-formed, but no legal move in the position matches
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Malformed { notation } => {
                write!(f, "Malformed move '{notation}', expected e.g. 'e2-e4'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// No legal move formats to the given SAN
    NoMatchingMove { san: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// Error type for savegame serialization failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveGameError {
    /// Grid is shorter than 8 lines of 8 squares
    TruncatedGrid { line: usize },
    /// Invalid two-character piece symbol in the grid
    InvalidPiece { symbol: String },
    /// State line is missing or has the wrong number of fields
    InvalidStateLine { found: usize },
    /// A numeric field in the state line failed to parse
    InvalidField { field: &'static str, value: String },
    /// Capture list is shorter than the counts in the state line
    TruncatedCaptures,
    /// Underlying file I/O failure
    Io { message: String },
}

impl fmt::Display for SaveGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveGameError::TruncatedGrid { line } => {
                write!(f, "Savegame grid truncated at line {line}")
            }
            SaveGameError::InvalidPiece { symbol } => {
                write!(f, "Invalid piece symbol '{symbol}' in savegame")
            }
            SaveGameError::InvalidStateLine { found } => {
                write!(f, "Savegame state line must have 11 fields, found {found}")
            }
            SaveGameError::InvalidField { field, value } => {
                write!(f, "Invalid value '{value}' for savegame field {field}")
            }
            SaveGameError::TruncatedCaptures => {
                write!(f, "Savegame capture list shorter than its counts")
            }
            SaveGameError::Io { message } => write!(f, "Savegame I/O error: {message}"),
        }
    }
}

impl std::error::Error for SaveGameError {}

impl From<std::io::Error> for SaveGameError {
    fn from(err: std::io::Error) -> Self {
        SaveGameError::Io {
            message: err.to_string(),
        }
    }
}
