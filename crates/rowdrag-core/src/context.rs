#![forbid(unsafe_code)]

//! Per-drag context handed to lifecycle callbacks.
//!
//! A [`DragContext`] is created when a press is armed and discarded when the
//! pointer is released. The activation snapshot ([`Activation`]) is attached
//! once the activation gate opens; before that the context only knows the
//! press origin and the source row.
//!
//! # Invariants
//!
//! 1. `row_seq`, `bottom_seq`, and `movement_seq` have equal length once the
//!    drag is activated, and are all empty before.
//! 2. `source_index` addresses `row_seq` for the lifetime of the drag.
//! 3. The drop target is only ever set on an activated context.

use crate::displacement::{changed_rows, compute_displacements};
use crate::layout::{LayoutError, RowLayout};
use crate::pointer::PointerPosition;
use crate::resolve::resolve_target_index;

/// Snapshot taken when the drag activates, plus the live displacement frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation<R> {
    rows: Vec<R>,
    layout: RowLayout,
    movements: Vec<f64>,
}

impl<R: PartialEq> Activation<R> {
    /// Snapshot `rows` in document order, measuring each with `height_of`.
    pub fn capture(
        rows: Vec<R>,
        source: &R,
        height_of: impl FnMut(&R) -> f64,
    ) -> Result<Self, LayoutError> {
        let layout = RowLayout::capture(&rows, source, height_of)?;
        let movements = vec![0.0; rows.len()];
        Ok(Self {
            rows,
            layout,
            movements,
        })
    }
}

impl<R> Activation<R> {
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn movements(&self) -> &[f64] {
        &self.movements
    }

    /// Recompute the displacement frame for offset `dy`, returning the
    /// indices whose displacement changed since the previous frame.
    pub fn update(&mut self, dy: f64) -> Vec<usize> {
        let next = compute_displacements(&self.layout, dy);
        let changed = changed_rows(&self.movements, &next).collect();
        self.movements = next;
        changed
    }

    /// Resting slot implied by the current displacement frame.
    #[must_use]
    pub fn resolve(&self) -> usize {
        resolve_target_index(&self.movements, self.layout.source_index())
    }
}

/// Resolved drop slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget<R> {
    pub index: usize,
    pub row: R,
}

/// Transient state of one press-drag-release interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext<R> {
    start_position: PointerPosition,
    current_position: PointerPosition,
    source: R,
    activation: Option<Activation<R>>,
    target: Option<DropTarget<R>>,
}

impl<R> DragContext<R> {
    /// Context for a freshly armed press on `source`.
    #[must_use]
    pub fn new(source: R, start_position: PointerPosition) -> Self {
        Self {
            start_position,
            current_position: start_position,
            source,
            activation: None,
            target: None,
        }
    }

    /// Pointer coordinates at press time.
    #[inline]
    #[must_use]
    pub const fn start_position(&self) -> PointerPosition {
        self.start_position
    }

    /// Most recent pointer coordinates seen by the drag.
    #[inline]
    #[must_use]
    pub const fn current_position(&self) -> PointerPosition {
        self.current_position
    }

    /// Vertical drag offset: current pointer Y minus press Y.
    #[inline]
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.current_position.y - self.start_position.y
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Whether the activation gate has been crossed.
    #[inline]
    #[must_use]
    pub const fn is_activated(&self) -> bool {
        self.activation.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn activation(&self) -> Option<&Activation<R>> {
        self.activation.as_ref()
    }

    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        self.activation.as_ref().map(|a| a.layout.source_index())
    }

    #[must_use]
    pub fn source_height(&self) -> Option<f64> {
        self.activation.as_ref().map(|a| a.layout.source_height())
    }

    #[must_use]
    pub fn source_mid_point(&self) -> Option<f64> {
        self.activation.as_ref().map(|a| a.layout.source_mid_point())
    }

    /// Row snapshot captured at activation; empty before.
    #[must_use]
    pub fn row_seq(&self) -> &[R] {
        match &self.activation {
            Some(activation) => activation.rows(),
            None => &[],
        }
    }

    /// Cumulative bottom edges captured at activation; empty before.
    #[must_use]
    pub fn bottom_seq(&self) -> &[f64] {
        match &self.activation {
            Some(activation) => activation.layout.bottoms(),
            None => &[],
        }
    }

    /// Current displacement frame; empty before activation.
    #[must_use]
    pub fn movement_seq(&self) -> &[f64] {
        match &self.activation {
            Some(activation) => activation.movements(),
            None => &[],
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<&R> {
        self.target.as_ref().map(|t| &t.row)
    }

    #[must_use]
    pub fn target_index(&self) -> Option<usize> {
        self.target.as_ref().map(|t| t.index)
    }

    #[must_use]
    pub const fn drop_target(&self) -> Option<&DropTarget<R>> {
        self.target.as_ref()
    }

    /// Record the latest pointer coordinates.
    pub fn track(&mut self, position: PointerPosition) {
        self.current_position = position;
    }

    /// Attach the activation snapshot. Replaces any previous snapshot.
    pub fn activate(&mut self, activation: Activation<R>) {
        self.activation = Some(activation);
    }

    /// Recompute displacement for the current drag offset. Returns the
    /// changed row indices, or an empty list when not activated.
    pub fn update_movements(&mut self) -> Vec<usize> {
        let dy = self.drag_offset();
        match self.activation.as_mut() {
            Some(activation) => activation.update(dy),
            None => Vec::new(),
        }
    }
}

impl<R: Clone> DragContext<R> {
    /// Resolve and record the drop target. Returns `None` when the drag was
    /// never activated.
    pub fn resolve_drop(&mut self) -> Option<&DropTarget<R>> {
        let activation = self.activation.as_ref()?;
        let index = activation.resolve();
        let row = activation.rows.get(index)?.clone();
        self.target = Some(DropTarget { index, row });
        self.target.as_ref()
    }
}
