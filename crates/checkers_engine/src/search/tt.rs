//! Transposition table
//!
//! A fixed number of slots indexed by the low bits of the position key. Each
//! slot holds at most one entry; on collision the entry searched to the
//! greater depth is kept. The table is cleared at the start of every
//! top-level search, so bounds are never reused across move computations.

use crate::constants::MAX_TT_CAPACITY;
use crate::types::Move;

/// How a stored score relates to the true value of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Search failed high: true value is at least the score
    LowerBound,
    /// Search failed low: true value is at most the score
    UpperBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Table with `capacity` rounded up to a power of two
    ///
    /// Clamped to `1..=MAX_TT_CAPACITY` slots.
    pub fn new(capacity: usize) -> Self {
        let size = capacity.clamp(1, MAX_TT_CAPACITY).next_power_of_two();
        TranspositionTable {
            slots: vec![None; size],
            mask: size - 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.slots[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Store `entry` unless the slot holds a deeper result
    pub fn store(&mut self, entry: TtEntry) {
        let index = self.index(entry.key);
        let slot = &mut self.slots[index];
        match slot {
            Some(existing) if existing.depth > entry.depth => {}
            _ => *slot = Some(entry),
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
