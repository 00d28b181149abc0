#![forbid(unsafe_code)]

//! Drag-to-reorder controller.
//!
//! [`DragReorderController`] owns the lifecycle state for one row container:
//!
//! ```text
//! Idle --down on row--> Armed --move past gate--> Active --up--> Resolved --> Idle
//!                         \--up------------------------------------------> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one [`DragContext`] is in flight; a press while busy is ignored.
//! 2. `on_drop` fires exactly once per activated drag, never for a plain
//!    click and never after [`teardown`](DragReorderController::teardown).
//! 3. Row identities are snapshotted at activation and never re-read mid-drag.
//! 4. Every row displaced during a drag is presented back at offset `0` before
//!    the interaction ends.
//!
//! # Failure Modes
//!
//! - A gate returning `false` short-circuits its transition without touching
//!   the context.
//! - A row snapshot with invalid heights keeps the press armed
//!   ([`DragIgnoredReason::LayoutRejected`]); the release is then a plain click.
//! - Hooks are not guarded. A panicking hook unwinds out of the dispatch.

use rowdrag_core::{
    Activation, DragContext, DragPhase, DragState, PointerEvent, PointerEventKind,
};

use crate::dispatch::{
    DragDispatch, DragEffect, DragIgnoredReason, DragLogEntry, DragLogOutcome, DragTransition,
};
use crate::error::ControllerError;
use crate::host::{RowContainer, RowPresentation, RowPresenter};
use crate::listeners::{
    LISTENED_KINDS, ListenerCommand, ListenerId, ListenerRegistration, ListenerScope,
};
use crate::options::{DragReorderOptions, notify};

/// Host-driven drag-to-reorder controller.
pub struct DragReorderController<C: RowContainer, P> {
    container: C,
    presenter: P,
    options: DragReorderOptions<C::Row>,
    state: DragState<C::Row>,
    listeners: Vec<ListenerRegistration>,
    next_listener_id: u64,
    next_sequence: u64,
    transition_counter: u64,
}

impl<C: RowContainer, P> std::fmt::Debug for DragReorderController<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragReorderController")
            .field("phase", &self.state.phase())
            .field("attached", &!self.listeners.is_empty())
            .field("options", &self.options)
            .finish()
    }
}

impl<C, P> DragReorderController<C, P>
where
    C: RowContainer,
    P: RowPresenter<C::Row>,
{
    /// Construct a detached controller with validated thresholds.
    pub fn new(
        container: C,
        presenter: P,
        options: DragReorderOptions<C::Row>,
    ) -> Result<Self, ControllerError> {
        options.activation_gate.validate()?;
        Ok(Self {
            container,
            presenter,
            options,
            state: DragState::Idle,
            listeners: Vec::with_capacity(LISTENED_KINDS.len()),
            next_listener_id: 1,
            next_sequence: 1,
            transition_counter: 0,
        })
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.state.phase()
    }

    /// In-flight context, if any.
    #[must_use]
    pub const fn context(&self) -> Option<&DragContext<C::Row>> {
        self.state.context()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Active listener registrations.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerRegistration] {
        &self.listeners
    }

    #[must_use]
    pub const fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the container. Row order must not change while a
    /// drag is in flight.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Request the three pointer listeners: press and motion on the
    /// container, release globally. Returns nothing if already attached.
    pub fn attach(&mut self) -> Vec<ListenerCommand> {
        if self.is_attached() {
            return Vec::new();
        }
        for kind in LISTENED_KINDS {
            let id = ListenerId(self.next_listener_id);
            self.next_listener_id = self.next_listener_id.saturating_add(1);
            self.listeners.push(ListenerRegistration {
                id,
                kind,
                scope: ListenerScope::for_kind(kind),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(listeners = self.listeners.len(), "rowdrag listeners attached");

        self.listeners
            .iter()
            .copied()
            .map(ListenerCommand::Register)
            .collect()
    }

    /// Release every listener and discard any in-flight interaction without
    /// firing `on_drop`. Rows displaced by an active drag are presented back
    /// at their natural position.
    ///
    /// Returns the unregister commands plus the discard transition, if an
    /// interaction was in flight.
    pub fn teardown(&mut self) -> (Vec<ListenerCommand>, Option<DragTransition>) {
        let from = self.state.phase();
        let discarded = match self.state.take() {
            Some(ctx) => {
                clear_rows(&mut self.presenter, &ctx);
                Some(self.transition(from, DragPhase::Idle, DragEffect::Discarded))
            }
            None => None,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            listeners = self.listeners.len(),
            discarded = discarded.is_some(),
            "rowdrag listeners torn down"
        );

        let commands = self
            .listeners
            .drain(..)
            .map(ListenerCommand::Unregister)
            .collect();
        (commands, discarded)
    }

    /// Route one pointer event to the press, motion, or release handler by
    /// its kind. This is the only entry point for pointer input.
    pub fn dispatch(&mut self, event: &PointerEvent) -> DragDispatch {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up => self.pointer_up(event),
        }
    }

    /// Handle a press on the container.
    fn pointer_down(&mut self, event: &PointerEvent) -> DragDispatch {
        let before = self.state.phase();
        if let Some(reason) = self.detached_or_busy(before) {
            return self.ignored(event, before, reason);
        }
        if event.button != self.options.activation_button {
            return self.ignored(event, before, DragIgnoredReason::ButtonNotAllowed);
        }
        let Some(row) = self.container.row_at(event.position) else {
            return self.ignored(event, before, DragIgnoredReason::NotOverRow);
        };
        if !self.options.allow_start(event) {
            return self.ignored(event, before, DragIgnoredReason::StartVetoed);
        }

        let ctx = DragContext::new(row, event.position);
        notify(&mut self.options.on_drag_start, &ctx);
        self.state = DragState::Armed(ctx);

        let transition = self.transition(
            before,
            DragPhase::Armed,
            DragEffect::Armed {
                origin: event.position,
            },
        );
        self.transitioned(event, before, vec![transition], false)
    }

    /// Handle pointer motion over the container.
    fn pointer_move(&mut self, event: &PointerEvent) -> DragDispatch {
        let before = self.state.phase();
        if !self.is_attached() {
            return self.ignored(event, before, DragIgnoredReason::Detached);
        }

        match std::mem::take(&mut self.state) {
            DragState::Armed(ctx) => self.try_activate(event, ctx),
            DragState::Active(mut ctx) => {
                ctx.track(event.position);
                let transition = self.step(&mut ctx);
                self.state = DragState::Active(ctx);
                self.transitioned(event, before, vec![transition], true)
            }
            other => {
                self.state = other;
                self.ignored(event, before, DragIgnoredReason::NoActiveDrag)
            }
        }
    }

    /// Handle a release anywhere in the document.
    fn pointer_up(&mut self, event: &PointerEvent) -> DragDispatch {
        let before = self.state.phase();
        if !self.is_attached() {
            return self.ignored(event, before, DragIgnoredReason::Detached);
        }

        match std::mem::take(&mut self.state) {
            DragState::Armed(_) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rowdrag press released before activation");

                let transition = self.transition(before, DragPhase::Idle, DragEffect::Released);
                self.transitioned(event, before, vec![transition], false)
            }
            DragState::Active(ctx) => self.finish_drop(event, ctx),
            other => {
                self.state = other;
                self.ignored(event, before, DragIgnoredReason::NoActiveDrag)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Internal transitions
// ---------------------------------------------------------------------------

impl<C, P> DragReorderController<C, P>
where
    C: RowContainer,
    P: RowPresenter<C::Row>,
{
    fn try_activate(&mut self, event: &PointerEvent, ctx: DragContext<C::Row>) -> DragDispatch {
        let before = DragPhase::Armed;
        let delta = event.position.delta_from(ctx.start_position());
        if !self.options.allow_activate(event, delta, &ctx) {
            self.state = DragState::Armed(ctx);
            return self.ignored(event, before, DragIgnoredReason::ActivationGateClosed);
        }

        let container = &self.container;
        let activation = match Activation::capture(container.rows(), ctx.source(), |row| {
            container.row_height(row)
        }) {
            Ok(activation) => activation,
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_error, "rowdrag activation snapshot rejected");

                self.state = DragState::Armed(ctx);
                return self.ignored(event, before, DragIgnoredReason::LayoutRejected);
            }
        };

        let mut ctx = ctx;
        let source_index = activation.layout().source_index();
        let rows = activation.rows().len();
        ctx.activate(activation);
        ctx.track(event.position);
        self.presenter
            .present(ctx.source(), RowPresentation::dragged(0.0));
        notify(&mut self.options.on_drag_activate, &ctx);

        #[cfg(feature = "tracing")]
        tracing::debug!(source_index, rows, "rowdrag drag activated");

        let activated = self.transition(
            before,
            DragPhase::Active,
            DragEffect::Activated { source_index, rows },
        );
        let moved = self.step(&mut ctx);
        self.state = DragState::Active(ctx);
        self.transitioned(event, before, vec![activated, moved], true)
    }

    /// Recompute the displacement frame, present changed rows, notify.
    fn step(&mut self, ctx: &mut DragContext<C::Row>) -> DragTransition {
        let changed_rows = ctx.update_movements();
        present_rows(&mut self.presenter, ctx, &changed_rows);
        notify(&mut self.options.on_drag_move, ctx);

        let drag_offset = ctx.drag_offset();
        self.transition(
            DragPhase::Active,
            DragPhase::Active,
            DragEffect::Moved {
                drag_offset,
                changed_rows,
            },
        )
    }

    fn finish_drop(&mut self, event: &PointerEvent, mut ctx: DragContext<C::Row>) -> DragDispatch {
        let before = DragPhase::Active;
        let source_index = ctx.source_index().unwrap_or_default();
        let target_index = ctx
            .resolve_drop()
            .map_or(source_index, |target| target.index);
        clear_rows(&mut self.presenter, &ctx);

        #[cfg(feature = "tracing")]
        tracing::debug!(source_index, target_index, "rowdrag drop resolved");

        let dropped = self.transition(
            before,
            DragPhase::Resolved,
            DragEffect::Dropped {
                source_index,
                target_index,
            },
        );

        self.state = DragState::Resolved(ctx);
        if let Some(ctx) = self.state.context() {
            notify(&mut self.options.on_drop, ctx);
        }
        self.state = DragState::Idle;

        let cleared = self.transition(DragPhase::Resolved, DragPhase::Idle, DragEffect::Cleared);
        self.transitioned(event, before, vec![dropped, cleared], false)
    }

    fn detached_or_busy(&self, phase: DragPhase) -> Option<DragIgnoredReason> {
        if !self.is_attached() {
            Some(DragIgnoredReason::Detached)
        } else if phase != DragPhase::Idle {
            Some(DragIgnoredReason::DragAlreadyInProgress)
        } else {
            None
        }
    }

    fn transition(&mut self, from: DragPhase, to: DragPhase, effect: DragEffect) -> DragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        DragTransition {
            transition_id: self.transition_counter,
            from,
            to,
            effect,
        }
    }

    fn log(
        &mut self,
        event: &PointerEvent,
        before: DragPhase,
        outcome: DragLogOutcome,
    ) -> DragLogEntry {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        DragLogEntry {
            sequence,
            kind: event.kind,
            position: event.position,
            phase_before: before,
            phase_after: self.state.phase(),
            outcome,
        }
    }

    fn ignored(
        &mut self,
        event: &PointerEvent,
        before: DragPhase,
        reason: DragIgnoredReason,
    ) -> DragDispatch {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = ?event.kind, ?reason, "rowdrag pointer event ignored");

        DragDispatch {
            transitions: Vec::new(),
            prevent_default: false,
            log: self.log(event, before, DragLogOutcome::Ignored(reason)),
        }
    }

    fn transitioned(
        &mut self,
        event: &PointerEvent,
        before: DragPhase,
        transitions: Vec<DragTransition>,
        prevent_default: bool,
    ) -> DragDispatch {
        DragDispatch {
            transitions,
            prevent_default,
            log: self.log(event, before, DragLogOutcome::Transitioned),
        }
    }
}

fn present_rows<R, P: RowPresenter<R>>(presenter: &mut P, ctx: &DragContext<R>, indices: &[usize]) {
    let source_index = ctx.source_index();
    let rows = ctx.row_seq();
    let movements = ctx.movement_seq();
    for &index in indices {
        let (Some(row), Some(&offset)) = (rows.get(index), movements.get(index)) else {
            continue;
        };
        let presentation = if Some(index) == source_index {
            RowPresentation::dragged(offset)
        } else {
            RowPresentation::shifted(offset)
        };
        presenter.present(row, presentation);
    }
}

/// Reset every row touched by an activated drag. Armed contexts never
/// displaced anything.
fn clear_rows<R, P: RowPresenter<R>>(presenter: &mut P, ctx: &DragContext<R>) {
    for row in ctx.row_seq() {
        presenter.present(row, RowPresentation::cleared());
    }
}
