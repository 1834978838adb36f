#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! These are the document-level events an overlay instance subscribes to
//! while it is open. A host surface translates its native events into these
//! types before routing them.
//!
//! # Design Notes
//!
//! - Pointer events carry a monotonically increasing `seq` assigned by the
//!   surface. Overlays use it to tell the pointer-down that opened them apart
//!   from later ones.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::element::ElementId;
use crate::geometry::Size;

/// A document-level event delivered to subscribed overlay instances.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalEvent {
    /// A pointer button went down somewhere in the document.
    PointerDown(PointerEvent),
    /// A key was pressed somewhere in the document.
    KeyDown(KeyEvent),
    /// The viewport was resized.
    Resize(Size),
    /// Some scrollable container (or the window) scrolled.
    Scroll {
        /// The element that scrolled, if known.
        source: Option<ElementId>,
    },
}

impl GlobalEvent {
    /// Which listener kind receives this event.
    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        match self {
            Self::PointerDown(_) => ListenerKind::PointerDown,
            Self::KeyDown(_) => ListenerKind::KeyDown,
            Self::Resize(_) => ListenerKind::Resize,
            Self::Scroll { .. } => ListenerKind::Scroll,
        }
    }
}

/// Kinds of global listeners an overlay can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
    Resize,
    Scroll,
}

impl ListenerKind {
    /// All kinds, in registration order.
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::PointerDown,
        ListenerKind::KeyDown,
        ListenerKind::Resize,
        ListenerKind::Scroll,
    ];

    /// Stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PointerDown => "pointerdown",
            Self::KeyDown => "keydown",
            Self::Resize => "resize",
            Self::Scroll => "scroll",
        }
    }
}

/// A pointer-down event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Innermost element under the pointer.
    pub target: ElementId,
    /// Viewport x coordinate.
    pub x: f64,
    /// Viewport y coordinate.
    pub y: f64,
    /// Surface-assigned sequence number, strictly increasing per document.
    pub seq: u64,
}

impl PointerEvent {
    /// Create a pointer event at the origin.
    #[must_use]
    pub const fn new(target: ElementId, seq: u64) -> Self {
        Self {
            target,
            x: 0.0,
            y: 0.0,
            seq,
        }
    }

    /// Set the pointer position.
    #[must_use]
    pub const fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Key codes the overlay engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key. Space is `Char(' ')`.
    Char(char),
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

bitflags! {
    /// Registration options for a global listener.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ListenerOptions: u8 {
        const NONE    = 0b00;
        /// Observe the event during the capture phase, so scrolls of any
        /// ancestor container are seen.
        const CAPTURE = 0b01;
        /// The handler never cancels the event; scrolling is never blocked.
        const PASSIVE = 0b10;
    }
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self::NONE
    }
}
