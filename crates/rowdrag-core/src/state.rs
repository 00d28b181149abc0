#![forbid(unsafe_code)]

//! Drag-to-reorder lifecycle state.
//!
//! ```text
//! Idle -> Armed -> Active -> Resolved -> Idle
//!            \---------------------------> Idle (release before activation)
//! ```
//!
//! `Resolved` only exists while the drop callback runs; the controller returns
//! to `Idle` before the dispatch that produced it returns.

use serde::{Deserialize, Serialize};

use crate::context::DragContext;

/// Fieldless view of [`DragState`], used in transition records and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    #[default]
    Idle,
    Armed,
    Active,
    Resolved,
}

/// Lifecycle state owning the in-flight [`DragContext`], if any.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<R> {
    Idle,
    /// Pressed on a row, activation gate not yet crossed.
    Armed(DragContext<R>),
    /// Live drag; the context carries an activation snapshot.
    Active(DragContext<R>),
    /// Drop resolved; the context carries the drop target.
    Resolved(DragContext<R>),
}

impl<R> Default for DragState<R> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<R> DragState<R> {
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Armed(_) => DragPhase::Armed,
            Self::Active(_) => DragPhase::Active,
            Self::Resolved(_) => DragPhase::Resolved,
        }
    }

    /// Whether a context is in flight.
    #[inline]
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn context(&self) -> Option<&DragContext<R>> {
        match self {
            Self::Idle => None,
            Self::Armed(ctx) | Self::Active(ctx) | Self::Resolved(ctx) => Some(ctx),
        }
    }

    /// Move the in-flight context out, leaving `Idle` behind.
    pub fn take(&mut self) -> Option<DragContext<R>> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Armed(ctx) | Self::Active(ctx) | Self::Resolved(ctx) => Some(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerPosition;

    #[test]
    fn default_is_idle() {
        let state: DragState<u32> = DragState::default();
        assert_eq!(state.phase(), DragPhase::Idle);
        assert!(!state.is_busy());
        assert!(state.context().is_none());
    }

    #[test]
    fn phase_tracks_variant() {
        let ctx = DragContext::new(7_u32, PointerPosition::new(0.0, 0.0));
        assert_eq!(DragState::Armed(ctx.clone()).phase(), DragPhase::Armed);
        assert_eq!(DragState::Active(ctx.clone()).phase(), DragPhase::Active);
        assert_eq!(DragState::Resolved(ctx).phase(), DragPhase::Resolved);
    }

    #[test]
    fn take_leaves_idle() {
        let mut state = DragState::Armed(DragContext::new(3_u32, PointerPosition::new(1.0, 2.0)));
        assert!(state.is_busy());
        let ctx = state.take().expect("armed state carries a context");
        assert_eq!(ctx.source(), &3);
        assert_eq!(state.phase(), DragPhase::Idle);
        assert!(state.take().is_none());
    }
}
