#![forbid(unsafe_code)]

//! Geometric primitives and the scalar helpers the positioning engine uses.
//!
//! All values are viewport coordinates (origin at the top-left of the visible
//! window, y grows downward) measured in `f64` layout units.

/// A rectangle in viewport coordinates.
///
/// Anchor rectangles are transient: they describe where an element was at the
/// moment of measurement and must be re-measured before every reposition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Return the rectangle shifted by `(dx, dy)`.
    ///
    /// Scrolling an ancestor container moves the anchor without changing its
    /// size; this is how test surfaces model that.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Width and height of a viewport or panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `other` fits inside this size on both axes.
    #[inline]
    pub fn fits(&self, other: Size) -> bool {
        other.width <= self.width && other.height <= self.height
    }
}

/// Clamp `value` into `[min, max]`.
///
/// When the range is inverted (`min > max`, which happens when the viewport is
/// smaller than the panel plus padding) the lower bound wins, so the panel is
/// pinned to the padding edge and overflows on the far side.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Usable space between the bottom of `anchor` and the bottom of the viewport.
///
/// `viewport.height - anchor.bottom - gap - padding`; may be negative when the
/// anchor is already below the fold.
#[inline]
pub fn space_below(anchor: &Rect, viewport: Size, gap: f64, padding: f64) -> f64 {
    viewport.height - anchor.bottom() - gap - padding
}

/// Usable space between the top of the viewport and the top of `anchor`.
#[inline]
pub fn space_above(anchor: &Rect, gap: f64, padding: f64) -> f64 {
    anchor.top() - gap - padding
}
