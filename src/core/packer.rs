//! Greedy packing of fixtures into slots.
//!
//! # Algorithm
//!
//! Games are processed in generation order against an append-only slot
//! arena. Each game first tries to become the second occupant of an
//! existing slot (scanning from a monotonic cursor; the slot must have a
//! free second sub-slot and a first occupant from a different city).
//! Failing that, a fresh slot is appended while the arena is below
//! capacity. Games that fit neither way are collected as unplaced.
//!
//! The cursor always points at the earliest slot that might still take
//! a second game; it only moves forward, past fully occupied slots, so
//! repeated scans stay linear overall.
//!
//! Greedy first-fit is deterministic but not optimal in the number of
//! slots used.

use crate::domain::model::{Game, Slot};

/// Outcome of a packing run: the filled slot arena plus the games that
/// exceeded capacity, in their original order.
#[derive(Debug, Clone, Default)]
pub struct PackOutcome {
    pub slots: Vec<Slot>,
    pub unplaced: Vec<Game>,
}

impl PackOutcome {
    pub fn placed_count(&self) -> usize {
        self.slots.iter().map(|s| s.games().count()).sum()
    }
}

/// Packs `games` into at most `capacity` slots of two games each, never
/// pairing two games from the same city.
pub fn pack(games: Vec<Game>, capacity: usize) -> PackOutcome {
    let mut slots: Vec<Slot> = Vec::new();
    let mut cursor = 0;
    let mut unplaced = Vec::new();

    for game in games {
        let target = slots[cursor..]
            .iter()
            .position(|slot| slot.accepts(&game))
            .map(|offset| cursor + offset);

        match target {
            Some(k) => {
                slots[k].second = Some(game);
                while cursor < slots.len() && slots[cursor].is_full() {
                    cursor += 1;
                }
            }
            None if slots.len() < capacity => slots.push(Slot::open(game)),
            None => unplaced.push(game),
        }
    }

    PackOutcome { slots, unplaced }
}
