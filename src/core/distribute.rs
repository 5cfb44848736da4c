//! Even spreading of packed slots across the full range of positions.
//!
//! The packer fills slots left to right, which clusters games at the
//! start of the window. Re-indexing slot `k` of `M` to position
//! `round(k * N / M)` (capacity `N`) spaces consecutive slots roughly
//! `N / M` apart instead.
//!
//! Positions are computed with exact integer arithmetic — `(2kN + M)
//! div (2M)` — which is round-half-up of the rational `kN / M`. The
//! rounding mode matters: half values (e.g. `N = 3`, `M = 2`, `k = 1`
//! gives 1.5) round up, and tests pin that choice.

use crate::domain::model::{PositionedSlot, Slot};

/// Assigns each slot an evenly spaced position in `[0, capacity)`.
///
/// Requires `slots.len() <= capacity`, which the packer guarantees.
/// An empty slot sequence yields an empty result; no division is
/// attempted.
pub fn distribute(slots: Vec<Slot>, capacity: usize) -> Vec<PositionedSlot> {
    let count = slots.len();
    if count == 0 {
        return Vec::new();
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(k, slot)| PositionedSlot {
            position: (2 * k * capacity + count) / (2 * count),
            slot,
        })
        .collect()
}
