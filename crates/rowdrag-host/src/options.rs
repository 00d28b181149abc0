#![forbid(unsafe_code)]

//! Caller hooks and thresholds for [`DragReorderController`].
//!
//! Every hook is optional. Unset gates fall back to the defaults (start always
//! allowed, activation per [`ActivationGateConfig`]); unset notifications are
//! no-ops. Hooks run synchronously inside the dispatch that triggered them and
//! are not guarded: a panicking hook unwinds through the dispatch.
//!
//! [`DragReorderController`]: crate::DragReorderController

use std::fmt;

use rowdrag_core::{ActivationGateConfig, DragContext, PointerButton, PointerEvent};

/// Veto a press before arming.
pub type StartGate = Box<dyn FnMut(&PointerEvent) -> bool>;

/// Decide whether an armed press becomes a live drag, given the event, the
/// `(dx, dy)` offset from the press origin, and the armed context.
pub type ActivateGate<R> = Box<dyn FnMut(&PointerEvent, (f64, f64), &DragContext<R>) -> bool>;

/// Lifecycle notification.
pub type DragCallback<R> = Box<dyn FnMut(&DragContext<R>)>;

/// Controller options: activation thresholds plus caller hooks.
pub struct DragReorderOptions<R> {
    /// Thresholds for the default activation gate.
    pub activation_gate: ActivationGateConfig,
    /// Only presses with this button arm a drag.
    pub activation_button: PointerButton,
    pub(crate) on_before_drag_start: Option<StartGate>,
    pub(crate) on_drag_start: Option<DragCallback<R>>,
    pub(crate) on_before_drag_activate: Option<ActivateGate<R>>,
    pub(crate) on_drag_activate: Option<DragCallback<R>>,
    pub(crate) on_drag_move: Option<DragCallback<R>>,
    pub(crate) on_drop: Option<DragCallback<R>>,
}

impl<R> Default for DragReorderOptions<R> {
    fn default() -> Self {
        Self {
            activation_gate: ActivationGateConfig::default(),
            activation_button: PointerButton::Primary,
            on_before_drag_start: None,
            on_drag_start: None,
            on_before_drag_activate: None,
            on_drag_activate: None,
            on_drag_move: None,
            on_drop: None,
        }
    }
}

impl<R> fmt::Debug for DragReorderOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragReorderOptions")
            .field("activation_gate", &self.activation_gate)
            .field("activation_button", &self.activation_button)
            .field("on_before_drag_start", &self.on_before_drag_start.is_some())
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field(
                "on_before_drag_activate",
                &self.on_before_drag_activate.is_some(),
            )
            .field("on_drag_activate", &self.on_drag_activate.is_some())
            .field("on_drag_move", &self.on_drag_move.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish()
    }
}

impl<R> DragReorderOptions<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default activation thresholds.
    #[must_use]
    pub fn with_activation_gate(mut self, config: ActivationGateConfig) -> Self {
        self.activation_gate = config;
        self
    }

    #[must_use]
    pub fn with_activation_button(mut self, button: PointerButton) -> Self {
        self.activation_button = button;
        self
    }

    #[must_use]
    pub fn on_before_drag_start(mut self, gate: impl FnMut(&PointerEvent) -> bool + 'static) -> Self {
        self.on_before_drag_start = Some(Box::new(gate));
        self
    }

    #[must_use]
    pub fn on_drag_start(mut self, hook: impl FnMut(&DragContext<R>) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(hook));
        self
    }

    /// Replace the default activation gate entirely; the configured
    /// thresholds are then ignored.
    #[must_use]
    pub fn on_before_drag_activate(
        mut self,
        gate: impl FnMut(&PointerEvent, (f64, f64), &DragContext<R>) -> bool + 'static,
    ) -> Self {
        self.on_before_drag_activate = Some(Box::new(gate));
        self
    }

    #[must_use]
    pub fn on_drag_activate(mut self, hook: impl FnMut(&DragContext<R>) + 'static) -> Self {
        self.on_drag_activate = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_drag_move(mut self, hook: impl FnMut(&DragContext<R>) + 'static) -> Self {
        self.on_drag_move = Some(Box::new(hook));
        self
    }

    /// Fired once per resolved drop; the context carries source and target.
    #[must_use]
    pub fn on_drop(mut self, hook: impl FnMut(&DragContext<R>) + 'static) -> Self {
        self.on_drop = Some(Box::new(hook));
        self
    }

    pub(crate) fn allow_start(&mut self, event: &PointerEvent) -> bool {
        match self.on_before_drag_start.as_mut() {
            Some(gate) => gate(event),
            None => true,
        }
    }

    pub(crate) fn allow_activate(
        &mut self,
        event: &PointerEvent,
        delta: (f64, f64),
        ctx: &DragContext<R>,
    ) -> bool {
        match self.on_before_drag_activate.as_mut() {
            Some(gate) => gate(event, delta, ctx),
            None => self.activation_gate.allows(delta.0, delta.1),
        }
    }
}

pub(crate) fn notify<R>(hook: &mut Option<DragCallback<R>>, ctx: &DragContext<R>) {
    if let Some(hook) = hook.as_mut() {
        hook(ctx);
    }
}
