#![forbid(unsafe_code)]

//! Per-dispatch result records.
//!
//! Every pointer event handed to the controller returns a [`DragDispatch`]:
//! the lifecycle transitions it caused, whether the host should suppress the
//! event's default action, and a structured log entry. Ignored events are
//! explicit ([`DragLogOutcome::Ignored`]) rather than silent, so hosts can
//! trace why a press never turned into a drag.

use rowdrag_core::{DragPhase, PointerEventKind, PointerPosition};
use serde::{Deserialize, Serialize};

/// Deterministic reason why an incoming event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragIgnoredReason {
    /// Listeners are not attached (never attached, or torn down).
    Detached,
    /// Press did not land on a row.
    NotOverRow,
    /// Press used a button other than the configured activation button.
    ButtonNotAllowed,
    /// The pre-start gate rejected the press.
    StartVetoed,
    /// A press arrived while another interaction is in flight.
    DragAlreadyInProgress,
    /// Motion or release with no armed or active drag.
    NoActiveDrag,
    /// The activation gate rejected the motion; the press stays armed.
    ActivationGateClosed,
    /// The row snapshot could not be captured; the press stays armed.
    LayoutRejected,
}

/// Effect emitted by one lifecycle transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Armed {
        origin: PointerPosition,
    },
    Activated {
        source_index: usize,
        rows: usize,
    },
    Moved {
        drag_offset: f64,
        changed_rows: Vec<usize>,
    },
    Dropped {
        source_index: usize,
        target_index: usize,
    },
    /// Transient drop context discarded after the drop hook ran.
    Cleared,
    /// Press released before activation; no drop.
    Released,
    /// In-flight interaction discarded by teardown; no drop.
    Discarded,
}

/// One lifecycle transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragTransition {
    pub transition_id: u64,
    pub from: DragPhase,
    pub to: DragPhase,
    pub effect: DragEffect,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum DragLogOutcome {
    Transitioned,
    Ignored(DragIgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragLogEntry {
    pub sequence: u64,
    pub kind: PointerEventKind,
    pub position: PointerPosition,
    pub phase_before: DragPhase,
    pub phase_after: DragPhase,
    pub outcome: DragLogOutcome,
}

/// Result of one pointer dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragDispatch {
    pub transitions: Vec<DragTransition>,
    /// The gesture is claimed as a drag; the host should prevent the event's
    /// default action (text selection, scrolling).
    pub prevent_default: bool,
    pub log: DragLogEntry,
}

impl DragDispatch {
    /// Whether the event was ignored, and why.
    #[must_use]
    pub const fn ignored_reason(&self) -> Option<DragIgnoredReason> {
        match self.log.outcome {
            DragLogOutcome::Ignored(reason) => Some(reason),
            DragLogOutcome::Transitioned => None,
        }
    }

    /// Effects in transition order.
    pub fn effects(&self) -> impl Iterator<Item = &DragEffect> {
        self.transitions.iter().map(|transition| &transition.effect)
    }
}
