#![forbid(unsafe_code)]

//! Activation-time row layout snapshot.
//!
//! A [`RowLayout`] is captured once, when a drag activates, and stays frozen
//! for the rest of the drag. All displacement math reads from it; nothing
//! re-measures live geometry mid-drag.
//!
//! # Invariants
//!
//! 1. `bottoms` is non-decreasing (heights are `>= 0`; zero heights tie).
//! 2. `source_index < bottoms.len()`.
//! 3. `source_mid_point == bottoms[source_index] + source_height / 2`.

use std::fmt;

/// Frozen geometry for one drag: cumulative bottom edges plus the source row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    bottoms: Vec<f64>,
    source_index: usize,
    source_height: f64,
    source_mid_point: f64,
}

impl RowLayout {
    /// Build a layout from per-row heights in document order.
    pub fn from_heights(heights: &[f64], source_index: usize) -> Result<Self, LayoutError> {
        if source_index >= heights.len() {
            return Err(LayoutError::SourceOutOfRange {
                index: source_index,
                len: heights.len(),
            });
        }

        let mut bottoms = Vec::with_capacity(heights.len());
        let mut bottom = 0.0;
        for (index, &height) in heights.iter().enumerate() {
            if !height.is_finite() || height < 0.0 {
                return Err(LayoutError::InvalidHeight { index, height });
            }
            bottom += height;
            bottoms.push(bottom);
        }

        let source_height = heights[source_index];
        let source_mid_point = bottoms[source_index] + source_height / 2.0;
        Ok(Self {
            bottoms,
            source_index,
            source_height,
            source_mid_point,
        })
    }

    /// Capture a layout from a row sequence, locating `source` by equality and
    /// measuring each row with `height_of`.
    pub fn capture<R: PartialEq>(
        rows: &[R],
        source: &R,
        mut height_of: impl FnMut(&R) -> f64,
    ) -> Result<Self, LayoutError> {
        let source_index = rows
            .iter()
            .position(|row| row == source)
            .ok_or(LayoutError::SourceNotFound { rows: rows.len() })?;
        let heights: Vec<f64> = rows.iter().map(&mut height_of).collect();
        Self::from_heights(&heights, source_index)
    }

    /// Number of rows in the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bottoms.len()
    }

    /// Whether the snapshot has no rows. Never true for a successfully
    /// captured layout, since the source row is always present.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bottoms.is_empty()
    }

    /// Cumulative bottom edge of every row.
    #[inline]
    #[must_use]
    pub fn bottoms(&self) -> &[f64] {
        &self.bottoms
    }

    /// Height of row `index`, if present.
    #[must_use]
    pub fn height(&self, index: usize) -> Option<f64> {
        let bottom = *self.bottoms.get(index)?;
        let top = if index == 0 {
            0.0
        } else {
            self.bottoms[index - 1]
        };
        Some(bottom - top)
    }

    #[inline]
    #[must_use]
    pub const fn source_index(&self) -> usize {
        self.source_index
    }

    #[inline]
    #[must_use]
    pub const fn source_height(&self) -> f64 {
        self.source_height
    }

    #[inline]
    #[must_use]
    pub const fn source_mid_point(&self) -> f64 {
        self.source_mid_point
    }
}

/// Reasons a layout snapshot cannot be captured.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A row reported a negative or non-finite height.
    InvalidHeight { index: usize, height: f64 },
    /// The source index does not address a row.
    SourceOutOfRange { index: usize, len: usize },
    /// The source row is not part of the captured row sequence.
    SourceNotFound { rows: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeight { index, height } => {
                write!(f, "row {index} has invalid height {height}")
            }
            Self::SourceOutOfRange { index, len } => {
                write!(f, "source index {index} out of range for {len} rows")
            }
            Self::SourceNotFound { rows } => {
                write!(f, "source row not found among {rows} rows")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
