//! Castling rights bitmask.

use super::piece::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;

pub(crate) const CASTLE_ALL: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling right refers to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

/// The bit for a single castling right.
#[inline]
#[must_use]
pub(crate) const fn castle_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::King) => CASTLE_WHITE_K,
        (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
        (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
        (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
    }
}
