#![forbid(unsafe_code)]

//! Drop resolution from the final displacement frame.
//!
//! The resting slot is read back from the last computed displacement array
//! alone; no live geometry is re-measured:
//!
//! 1. Walk upward from the source while the row above has shifted down
//!    (positive displacement).
//! 2. If that did not move, walk downward while the row below has shifted up
//!    (negative displacement).

/// Resolve the slot the source settles into.
///
/// Returns `source_index` unchanged when no neighbor is displaced, including
/// for empty or single-row frames.
#[must_use]
pub fn resolve_target_index(movements: &[f64], source_index: usize) -> usize {
    let mut target = source_index;

    while target > 0 && movements.get(target - 1).is_some_and(|&m| m > 0.0) {
        target -= 1;
    }

    if target == source_index {
        while target
            .checked_add(1)
            .and_then(|next| movements.get(next))
            .is_some_and(|&m| m < 0.0)
        {
            target += 1;
        }
    }

    target
}
