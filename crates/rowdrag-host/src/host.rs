#![forbid(unsafe_code)]

//! Host capabilities: row geometry in, row presentation out.

use bitflags::bitflags;
use rowdrag_core::PointerPosition;

/// Read-only view of the container whose rows can be reordered.
///
/// Row identities must stay stable for the duration of an active drag; the
/// controller snapshots [`rows`](RowContainer::rows) once, at activation.
pub trait RowContainer {
    /// Row handle. Equality identifies the same row across calls.
    type Row: Clone + PartialEq;

    /// Every trackable row, in document (top-to-bottom) order.
    fn rows(&self) -> Vec<Self::Row>;

    /// Current rendered height of `row` in pixels.
    fn row_height(&self, row: &Self::Row) -> f64;

    /// The row under `position`, if the pointer is over a row inside the
    /// container boundary.
    fn row_at(&self, position: PointerPosition) -> Option<Self::Row>;
}

bitflags! {
    /// Presentational hints attached to a row offset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RowVisualFlags: u8 {
        /// Draw above sibling rows (the dragged row).
        const ON_TOP        = 0b0001;
        /// Apply the offset immediately, without transition smoothing.
        const NO_TRANSITION = 0b0010;
    }
}

/// How one row should be drawn for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowPresentation {
    /// Vertical offset from the row's natural position, in pixels.
    pub offset_y: f64,
    pub flags: RowVisualFlags,
}

impl RowPresentation {
    /// The dragged row: on top, tracking the pointer without lag.
    #[must_use]
    pub const fn dragged(offset_y: f64) -> Self {
        Self {
            offset_y,
            flags: RowVisualFlags::ON_TOP.union(RowVisualFlags::NO_TRANSITION),
        }
    }

    /// A neighbor making room, animated.
    #[must_use]
    pub const fn shifted(offset_y: f64) -> Self {
        Self {
            offset_y,
            flags: RowVisualFlags::empty(),
        }
    }

    /// Back to the natural position with no snap-back animation.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            offset_y: 0.0,
            flags: RowVisualFlags::NO_TRANSITION,
        }
    }
}

/// Sink for per-row presentation updates.
pub trait RowPresenter<R> {
    fn present(&mut self, row: &R, presentation: RowPresentation);
}

impl<R, F> RowPresenter<R> for F
where
    F: FnMut(&R, RowPresentation),
{
    fn present(&mut self, row: &R, presentation: RowPresentation) {
        (*self)(row, presentation);
    }
}
