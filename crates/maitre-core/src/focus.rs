#![forbid(unsafe_code)]

//! Programmatic focus capability.

use crate::element::ElementId;

/// Moves true input focus between surface elements.
///
/// Pointer hover never goes through this trait; only keyboard navigation and
/// focus restoration after a close do.
pub trait FocusControl {
    /// Give input focus to `element`.
    fn focus(&self, element: ElementId);

    /// The element that currently holds focus, if any.
    fn focused(&self) -> Option<ElementId>;
}
