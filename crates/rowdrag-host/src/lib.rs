#![forbid(unsafe_code)]

//! `rowdrag-host` drives the drag-to-reorder lifecycle against a host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer events and
//!   wires the listener registrations the controller asks for.
//! - **Capability seams**: row geometry comes from a [`RowContainer`], visual
//!   feedback goes to a [`RowPresenter`]; neither assumes a DOM.
//! - **No blocking / no threads**: every dispatch runs to completion.
//!
//! The pure kernels (displacement, drop resolution) live in `rowdrag-core`
//! and are re-exported here for convenience.

pub mod controller;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod listeners;
pub mod options;

pub use controller::DragReorderController;
pub use dispatch::{
    DragDispatch, DragEffect, DragIgnoredReason, DragLogEntry, DragLogOutcome, DragTransition,
};
pub use error::ControllerError;
pub use host::{RowContainer, RowPresentation, RowPresenter, RowVisualFlags};
pub use listeners::{ListenerCommand, ListenerId, ListenerRegistration, ListenerScope};
pub use options::{ActivateGate, DragCallback, DragReorderOptions, StartGate};

pub use rowdrag_core::{
    ActivationGateConfig, DragContext, DragPhase, DropTarget, PointerButton, PointerEvent,
    PointerEventKind, PointerPosition, move_slot,
};
