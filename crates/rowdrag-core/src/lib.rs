#![forbid(unsafe_code)]

//! Core: drag-to-reorder lifecycle state, row layout snapshots, and the
//! displacement / drop-resolution kernels.
//!
//! # Role in rowdrag
//! `rowdrag-core` is host-agnostic. It never touches a rendering surface or an
//! event loop; it takes synthetic row heights and pointer coordinates and
//! returns displacement arrays and slot indices. `rowdrag-host` wires these
//! kernels to a container, a presenter, and caller callbacks.
//!
//! # Primary responsibilities
//! - **Pointer values**: [`PointerPosition`], [`PointerEvent`].
//! - **Activation gate**: [`ActivationGateConfig`] and the default predicate.
//! - **Layout snapshot**: [`RowLayout`] (cumulative bottoms, source midpoint).
//! - **Displacement**: [`compute_displacements`], the per-frame kernel.
//! - **Drop resolution**: [`resolve_target_index`].
//! - **Lifecycle**: [`DragState`] and [`DragContext`].
//! - **Reorder helper**: [`move_slot`] for callers persisting a drop.

pub mod config;
pub mod context;
pub mod displacement;
pub mod layout;
pub mod pointer;
pub mod reorder;
pub mod resolve;
pub mod state;

pub use config::{ActivationGateConfig, ConfigError};
pub use context::{Activation, DragContext, DropTarget};
pub use displacement::{changed_rows, compute_displacements, displacement_for_row};
pub use layout::{LayoutError, RowLayout};
pub use pointer::{PointerButton, PointerEvent, PointerEventKind, PointerPosition};
pub use reorder::{ReorderError, move_slot};
pub use resolve::resolve_target_index;
pub use state::{DragPhase, DragState};
