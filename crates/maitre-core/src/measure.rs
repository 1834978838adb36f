#![forbid(unsafe_code)]

//! Measurement capability.
//!
//! The positioning engine never touches a rendering tree directly. Whatever
//! draws the console (a browser bridge, a native toolkit, or the in-memory
//! test document) implements [`Geometry`] with its own "get bounding box"
//! primitive.

use crate::element::ElementId;
use crate::geometry::{Rect, Size};

/// Read-only layout queries against the host surface.
pub trait Geometry {
    /// Bounding rectangle of `element` in viewport coordinates.
    ///
    /// Returns `None` when the element is not (or no longer) laid out.
    fn measure(&self, element: ElementId) -> Option<Rect>;

    /// Current size of the visible window.
    fn viewport_size(&self) -> Size;

    /// Whether `node` is `ancestor` or lies inside its subtree.
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;
}
