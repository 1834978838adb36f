#![forbid(unsafe_code)]

//! Test surface for the Maître overlay engine.
//!
//! # Role in Maître
//! Real consoles render through a browser or native toolkit. Tests do not:
//! [`Document`] is an in-memory page that implements all four capabilities
//! from `maitre-core` (`Geometry`, `ListenerRegistry`, `OverlayHost`,
//! `FocusControl`) so widgets can be opened, scrolled, resized and dismissed
//! deterministically.
//!
//! # Typical use
//!
//! ```rust,ignore
//! let doc = Rc::new(Document::new(Size::new(1280.0, 800.0)));
//! let trigger = doc.append(doc.body(), Rect::new(100.0, 100.0, 200.0, 36.0));
//! let mut select = Select::new(doc.surface(), trigger, entries);
//! select.trigger_pointer_down(&doc.pointer(trigger));
//! for owner in doc.route(&doc.pointer_down(doc.body())) { /* deliver */ }
//! ```

pub mod document;

pub use document::{DEFAULT_DIALOG_SIZE, Document, MountedPanel, ROW_HEIGHT, Registration};
