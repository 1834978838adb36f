#![forbid(unsafe_code)]

//! Open/closed state and outside-interaction dismissal for one overlay.
//!
//! # State machine
//!
//! ```text
//!            open(cause), not disabled
//!   Closed ───────────────────────────▶ Open
//!     ▲                                  │
//!     └──────────── close(reason) ───────┘
//!       OutsidePointer | Escape | Commit | Disabled | Toggle | Unmount
//! ```
//!
//! # Invariants
//!
//! 1. Global listeners exist if and only if the controller is open.
//! 2. Closing drops every listener guard before returning; dropping the
//!    controller (unmount) does the same.
//! 3. The pointer-down that opened the overlay is never classified as an
//!    outside click: listeners are attached on the transition, and events
//!    with a sequence number at or before the opening one are ignored.
//! 4. Instances are independent; nothing here enforces a single open overlay.

use std::rc::Rc;

use maitre_core::element::{ElementId, InstanceId};
use maitre_core::event::{GlobalEvent, KeyCode, ListenerKind, ListenerOptions, PointerEvent};
use maitre_core::listener::{ListenerGuard, ListenerRegistry};

/// What opened the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenCause {
    /// A pointer-down on the trigger with the given sequence number.
    Pointer { seq: u64 },
    /// Enter, Space or ArrowDown on the focused trigger.
    Keyboard,
    /// Opened by code rather than by the user.
    Programmatic,
}

/// Why the overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Pointer-down outside both the trigger and the panel.
    OutsidePointer,
    /// Escape pressed anywhere in the document.
    Escape,
    /// A selection was committed inside the panel.
    Commit,
    /// The trigger became disabled while open.
    Disabled,
    /// The user toggled the trigger again.
    Toggle,
    /// The owning component went away.
    Unmount,
}

impl CloseReason {
    /// Stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutsidePointer => "outside_pointer",
            Self::Escape => "escape",
            Self::Commit => "commit",
            Self::Disabled => "disabled",
            Self::Toggle => "toggle",
            Self::Unmount => "unmount",
        }
    }

    /// Whether focus should go back to the trigger after this close.
    ///
    /// Pointer-driven closes leave focus wherever the pointer put it.
    #[must_use]
    pub const fn restores_focus(self) -> bool {
        matches!(self, Self::Escape | Self::Commit | Self::Toggle)
    }
}

/// Per-instance dismissal controller.
pub struct DismissalController {
    owner: InstanceId,
    registry: Rc<dyn ListenerRegistry>,
    disabled: bool,
    open: bool,
    opened_by_seq: Option<u64>,
    listeners: Vec<ListenerGuard>,
}

impl DismissalController {
    /// Create a closed, enabled controller.
    pub fn new(owner: InstanceId, registry: Rc<dyn ListenerRegistry>) -> Self {
        Self {
            owner,
            registry,
            disabled: false,
            open: false,
            opened_by_seq: None,
            listeners: Vec::new(),
        }
    }

    /// Whether the overlay is open.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the trigger is disabled.
    #[inline]
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Number of global listeners currently held.
    #[inline]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Transition to open and attach global listeners.
    ///
    /// Returns `false` (and does nothing) when disabled or already open.
    pub fn open(&mut self, cause: OpenCause) -> bool {
        if self.disabled || self.open {
            return false;
        }
        self.open = true;
        self.opened_by_seq = match cause {
            OpenCause::Pointer { seq } => Some(seq),
            OpenCause::Keyboard | OpenCause::Programmatic => None,
        };
        self.listeners = ListenerKind::ALL
            .iter()
            .map(|&kind| {
                ListenerGuard::acquire(&self.registry, self.owner, kind, listener_options(kind))
            })
            .collect();
        true
    }

    /// Transition to closed and release all listeners.
    ///
    /// Returns the reason if a transition happened, `None` if already closed.
    pub fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.opened_by_seq = None;
        self.listeners.clear();
        Some(reason)
    }

    /// Update the trigger's disabled flag; forces a close when it turns on.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<CloseReason> {
        self.disabled = disabled;
        if disabled {
            self.close(CloseReason::Disabled)
        } else {
            None
        }
    }

    /// Whether `event` lands outside both the trigger and the panel.
    ///
    /// `inside` answers whether an element belongs to the trigger or the
    /// panel subtree.
    pub fn is_outside(&self, event: &PointerEvent, inside: impl Fn(ElementId) -> bool) -> bool {
        if self.opened_by_seq.is_some_and(|seq| event.seq <= seq) {
            return false;
        }
        !inside(event.target)
    }

    /// Classify a global event into a dismissal, if it is one.
    pub fn dismissal_for(
        &self,
        event: &GlobalEvent,
        inside: impl Fn(ElementId) -> bool,
    ) -> Option<CloseReason> {
        if !self.open {
            return None;
        }
        match event {
            GlobalEvent::PointerDown(pointer) if self.is_outside(pointer, &inside) => {
                Some(CloseReason::OutsidePointer)
            }
            GlobalEvent::KeyDown(key) if key.code == KeyCode::Escape => Some(CloseReason::Escape),
            _ => None,
        }
    }
}

impl std::fmt::Debug for DismissalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissalController")
            .field("owner", &self.owner)
            .field("disabled", &self.disabled)
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Registration options per listener kind.
fn listener_options(kind: ListenerKind) -> ListenerOptions {
    match kind {
        ListenerKind::PointerDown => ListenerOptions::CAPTURE,
        ListenerKind::KeyDown => ListenerOptions::NONE,
        ListenerKind::Resize => ListenerOptions::PASSIVE,
        ListenerKind::Scroll => ListenerOptions::CAPTURE | ListenerOptions::PASSIVE,
    }
}
