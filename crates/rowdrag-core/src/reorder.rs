#![forbid(unsafe_code)]

//! Apply a reported drop to caller-owned data.

use std::fmt;

/// Move the element in slot `from` into slot `to`, shifting the elements in
/// between by one. `from == to` is a no-op.
pub fn move_slot<T>(items: &mut [T], from: usize, to: usize) -> Result<(), ReorderError> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ReorderError::OutOfBounds { index, len });
        }
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
    Ok(())
}

/// Reorder helper errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderError {
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "slot {index} out of bounds for {len} items")
            }
        }
    }
}

impl std::error::Error for ReorderError {}
