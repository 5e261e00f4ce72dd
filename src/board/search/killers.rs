//! Killer-move slots.
//!
//! One packed move key per distance from the root: the most recent move
//! that produced a beta cutoff at that level. Sibling nodes at the same
//! distance try it first to provoke another cutoff early.

use super::super::{Move, MoveList};
use super::MAX_SEARCH_DISTANCE;

/// Packed key 0 doubles as the empty slot: a real move never has
/// identical from and to squares.
const EMPTY_SLOT: u32 = 0;

#[derive(Clone, Debug)]
pub(crate) struct KillerTable {
    slots: [u32; MAX_SEARCH_DISTANCE],
}

impl KillerTable {
    #[must_use]
    pub(crate) fn new() -> Self {
        KillerTable {
            slots: [EMPTY_SLOT; MAX_SEARCH_DISTANCE],
        }
    }

    /// Remember `mv` as the cutoff move at this distance.
    pub(crate) fn record(&mut self, distance: usize, mv: &Move) {
        if let Some(slot) = self.slots.get_mut(distance) {
            *slot = mv.key();
        }
    }

    /// Move the recorded killer, if present in the list, to the front.
    pub(crate) fn reorder(&self, distance: usize, moves: &mut MoveList) {
        match self.slots.get(distance) {
            Some(&key) if key != EMPTY_SLOT => moves.promote_to_front(key),
            _ => {}
        }
    }
}
