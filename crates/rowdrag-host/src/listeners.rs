#![forbid(unsafe_code)]

//! Listener registration commands for host event wiring.
//!
//! The controller never binds to an event source itself. [`attach`] and
//! [`teardown`] return commands the host executes against its own event
//! system, in the same way pointer-capture acquire/release is delegated.
//!
//! [`attach`]: crate::DragReorderController::attach
//! [`teardown`]: crate::DragReorderController::teardown

use rowdrag_core::PointerEventKind;
use serde::{Deserialize, Serialize};

/// Stable identifier for one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

/// Where a listener must be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerScope {
    /// On the row container only.
    Container,
    /// On the whole document/window, so a release outside the container is
    /// still observed.
    Global,
}

impl ListenerScope {
    /// Scope required for each pointer phase: press and motion on the
    /// container, release globally.
    #[must_use]
    pub const fn for_kind(kind: PointerEventKind) -> Self {
        match kind {
            PointerEventKind::Down | PointerEventKind::Move => Self::Container,
            PointerEventKind::Up => Self::Global,
        }
    }
}

/// One listener the host must route to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerRegistration {
    pub id: ListenerId,
    pub kind: PointerEventKind,
    pub scope: ListenerScope,
}

/// Host command emitted on attach/teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ListenerCommand {
    Register(ListenerRegistration),
    Unregister(ListenerRegistration),
}

impl ListenerCommand {
    #[must_use]
    pub const fn registration(&self) -> ListenerRegistration {
        match self {
            Self::Register(registration) | Self::Unregister(registration) => *registration,
        }
    }
}

/// Pointer phases the controller listens to, in registration order.
pub(crate) const LISTENED_KINDS: [PointerEventKind; 3] = [
    PointerEventKind::Down,
    PointerEventKind::Move,
    PointerEventKind::Up,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_global() {
        assert_eq!(
            ListenerScope::for_kind(PointerEventKind::Down),
            ListenerScope::Container
        );
        assert_eq!(
            ListenerScope::for_kind(PointerEventKind::Move),
            ListenerScope::Container
        );
        assert_eq!(
            ListenerScope::for_kind(PointerEventKind::Up),
            ListenerScope::Global
        );
    }

    #[test]
    fn command_exposes_registration() {
        let registration = ListenerRegistration {
            id: ListenerId(9),
            kind: PointerEventKind::Up,
            scope: ListenerScope::Global,
        };
        assert_eq!(
            ListenerCommand::Unregister(registration).registration(),
            registration
        );
    }
}
