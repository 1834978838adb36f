#![forbid(unsafe_code)]

//! Positioning engine for anchored floating panels.
//!
//! [`compute_placement`] takes the trigger's measured rectangle, the viewport
//! size and the panel's natural size, and decides where the detached panel
//! goes: which side of the anchor, at what offset, and (for scrollable list
//! panels) how tall it may grow.
//!
//! # Algorithm
//!
//! 1. Width is the largest of the configured minimum, the anchor width and
//!    the panel's natural width. `left` is the anchor's left edge plus
//!    `offset_x`, clamped so the panel stays `min_padding` away from both
//!    viewport edges.
//! 2. `space_below` and `space_above` are measured net of `gap` and
//!    `min_padding`. The panel goes above only when the space below is under
//!    the usable threshold *and* there is strictly more room above.
//! 3. List panels get `max_height = max(floor, min(preferred, available))`;
//!    content-sized panels keep their natural height and report no cap.
//!    The offset uses the height the panel will render at: the natural
//!    height once measured (never more than the cap), else the cap. `top` is
//!    clamped into the padded viewport.
//!
//! # Invariants
//!
//! - Pure: identical inputs produce a bit-identical [`PanelPlacement`].
//! - `left >= min_padding` and `top >= min_padding` always hold; when the
//!   viewport is smaller than the panel the panel is pinned to the padding
//!   and overflows on the far side instead of failing.
//! - If `space_below` meets the usable threshold the side is [`Side::Below`].
//! - A measured panel placed above ends exactly `gap` above the anchor unless
//!   clamping pins it to the padding.

use maitre_core::geometry::{Rect, Size, clamp, space_above, space_below};
use maitre_core::host::PanelFrame;

/// Default gap between anchor and panel.
pub const DEFAULT_GAP: f64 = 4.0;
/// Default distance kept from every viewport edge.
pub const DEFAULT_MIN_PADDING: f64 = 8.0;
/// Default minimum panel width.
pub const DEFAULT_MIN_WIDTH: f64 = 180.0;
/// Default space below the anchor under which flipping is considered.
pub const DEFAULT_MIN_USABLE_HEIGHT: f64 = 160.0;
/// Default lower bound for a list panel's height cap.
pub const DEFAULT_MIN_HEIGHT_FLOOR: f64 = 96.0;

/// Which side of the anchor the panel renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Above,
    #[default]
    Below,
}

impl Side {
    /// The opposite side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }

    /// Stable name, as used in `data-side` attributes and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

/// Placement constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Horizontal shift applied to the anchor's left edge.
    pub offset_x: f64,
    /// Distance kept from every viewport edge.
    pub min_padding: f64,
    /// Distance between the anchor and the panel.
    pub gap: f64,
    /// Minimum panel width.
    pub min_width: f64,
    /// Space below the anchor under which the panel may flip above.
    pub min_usable_height: f64,
    /// Lower bound for a list panel's height cap.
    pub min_height_floor: f64,
    /// Preferred height cap. `Some` marks a scrollable list panel.
    pub preferred_max_height: Option<f64>,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            min_padding: DEFAULT_MIN_PADDING,
            gap: DEFAULT_GAP,
            min_width: DEFAULT_MIN_WIDTH,
            min_usable_height: DEFAULT_MIN_USABLE_HEIGHT,
            min_height_floor: DEFAULT_MIN_HEIGHT_FLOOR,
            preferred_max_height: None,
        }
    }
}

impl PlacementOptions {
    /// Set the horizontal offset.
    #[must_use]
    pub fn offset_x(mut self, offset_x: f64) -> Self {
        self.offset_x = offset_x;
        self
    }

    /// Set the viewport padding.
    #[must_use]
    pub fn min_padding(mut self, padding: f64) -> Self {
        self.min_padding = padding;
        self
    }

    /// Set the anchor gap.
    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Mark the panel as a scrollable list capped at `height`.
    #[must_use]
    pub fn preferred_max_height(mut self, height: f64) -> Self {
        self.preferred_max_height = Some(height);
        self
    }

    /// Whether the panel is a height-budgeted list.
    #[inline]
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.preferred_max_height.is_some()
    }

    /// Space below the anchor the panel needs before it considers flipping.
    ///
    /// List panels can shrink down to their cap, so the threshold is the
    /// smaller of `min_usable_height` and the preferred cap. Content-sized
    /// panels need their whole natural height.
    #[must_use]
    pub fn usable_threshold(&self, desired: Size) -> f64 {
        match self.preferred_max_height {
            Some(preferred) => self.min_usable_height.min(preferred),
            None => desired.height,
        }
    }
}

/// Where a panel goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    /// Height cap for list panels; `None` for content-sized panels.
    pub max_height: Option<f64>,
    pub side: Side,
}

impl PanelPlacement {
    /// The absolute frame a host applies.
    #[must_use]
    pub const fn frame(&self) -> PanelFrame {
        PanelFrame {
            top: self.top,
            left: self.left,
            width: self.width,
            max_height: self.max_height,
        }
    }
}

/// Compute a placement for a panel of natural size `desired` anchored to
/// `anchor` inside `viewport`.
#[must_use]
pub fn compute_placement(
    anchor: Rect,
    viewport: Size,
    desired: Size,
    opts: &PlacementOptions,
) -> PanelPlacement {
    let pad = opts.min_padding;
    let gap = opts.gap;

    let width = opts.min_width.max(anchor.width).max(desired.width);
    let left = clamp(anchor.x + opts.offset_x, pad, viewport.width - width - pad);

    let below = space_below(&anchor, viewport, gap, pad);
    let above = space_above(&anchor, gap, pad);
    let side = if below < opts.usable_threshold(desired) && above > below {
        Side::Above
    } else {
        Side::Below
    };
    let available = match side {
        Side::Below => below,
        Side::Above => above,
    };

    let (height, max_height) = match opts.preferred_max_height {
        Some(preferred) => {
            let cap = opts.min_height_floor.max(preferred.min(available));
            (rendered_height(desired.height, cap), Some(cap))
        }
        None => (desired.height, None),
    };

    let max_top = viewport.height - height - pad;
    let top = match side {
        Side::Below => clamp(anchor.bottom() + gap, pad, max_top),
        Side::Above => clamp(anchor.top() - gap - height, pad, max_top),
    };

    PanelPlacement {
        top,
        left,
        width,
        max_height,
        side,
    }
}

/// Height a list panel renders at under `cap`.
///
/// An unmeasured panel (natural height `0`) is assumed to fill its cap.
#[inline]
#[must_use]
pub fn rendered_height(natural: f64, cap: f64) -> f64 {
    if natural > 0.0 { natural.min(cap) } else { cap }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(1280.0, 800.0)
    }

    fn list_opts() -> PlacementOptions {
        PlacementOptions::default().preferred_max_height(320.0)
    }

    #[test]
    fn below_basic_placement() {
        let anchor = Rect::new(100.0, 100.0, 220.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::new(0.0, 200.0), &list_opts());
        assert_eq!(p.side, Side::Below);
        assert_eq!(p.left, 100.0);
        assert_eq!(p.top, 136.0 + DEFAULT_GAP);
        assert_eq!(p.width, 220.0);
        assert_eq!(p.max_height, Some(320.0));
    }

    #[test]
    fn width_has_minimum() {
        let anchor = Rect::new(100.0, 100.0, 60.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::default(), &list_opts());
        assert_eq!(p.width, DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn natural_width_wins_when_larger() {
        let anchor = Rect::new(100.0, 100.0, 60.0, 36.0);
        let p = compute_placement(
            anchor,
            viewport(),
            Size::new(560.0, 300.0),
            &PlacementOptions::default(),
        );
        assert_eq!(p.width, 560.0);
        assert_eq!(p.max_height, None);
    }

    #[test]
    fn offset_x_shifts_left() {
        let anchor = Rect::new(100.0, 100.0, 200.0, 36.0);
        let p = compute_placement(
            anchor,
            viewport(),
            Size::default(),
            &list_opts().offset_x(-24.0),
        );
        assert_eq!(p.left, 76.0);
    }

    #[test]
    fn left_clamped_at_right_edge() {
        let anchor = Rect::new(1200.0, 100.0, 60.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::default(), &list_opts());
        assert_eq!(p.left, 1280.0 - DEFAULT_MIN_WIDTH - DEFAULT_MIN_PADDING);
    }

    #[test]
    fn left_clamped_at_left_edge() {
        let anchor = Rect::new(2.0, 100.0, 200.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::default(), &list_opts());
        assert_eq!(p.left, DEFAULT_MIN_PADDING);
    }

    #[test]
    fn flips_above_near_bottom() {
        let anchor = Rect::new(100.0, 740.0, 200.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::default(), &list_opts());
        assert_eq!(p.side, Side::Above);
        let cap = p.max_height.unwrap();
        assert_eq!(cap, 320.0);
        assert_eq!(p.top, 740.0 - DEFAULT_GAP - cap);
        assert!(p.top + cap <= anchor.top());
    }

    #[test]
    fn measured_short_list_hugs_anchor_above() {
        let anchor = Rect::new(100.0, 740.0, 200.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::new(200.0, 96.0), &list_opts());
        assert_eq!(p.side, Side::Above);
        assert_eq!(p.max_height, Some(320.0));
        assert_eq!(p.top + 96.0, anchor.top() - DEFAULT_GAP);
    }

    #[test]
    fn measured_tall_list_is_capped() {
        let anchor = Rect::new(100.0, 740.0, 200.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::new(200.0, 900.0), &list_opts());
        assert_eq!(p.top, 740.0 - DEFAULT_GAP - 320.0);
    }

    #[test]
    fn rendered_height_rules() {
        assert_eq!(rendered_height(0.0, 320.0), 320.0);
        assert_eq!(rendered_height(96.0, 320.0), 96.0);
        assert_eq!(rendered_height(500.0, 320.0), 320.0);
    }

    #[test]
    fn stays_below_when_above_is_not_roomier() {
        // Tiny viewport: little room either way, slightly more below.
        let vp = Size::new(400.0, 120.0);
        let anchor = Rect::new(10.0, 30.0, 100.0, 20.0);
        let p = compute_placement(anchor, vp, Size::default(), &list_opts());
        assert_eq!(p.side, Side::Below);
    }

    #[test]
    fn cap_shrinks_to_available_space() {
        let anchor = Rect::new(100.0, 500.0, 200.0, 36.0);
        let p = compute_placement(anchor, viewport(), Size::default(), &list_opts());
        let below = 800.0 - 536.0 - DEFAULT_GAP - DEFAULT_MIN_PADDING;
        assert_eq!(p.side, Side::Below);
        assert_eq!(p.max_height, Some(below));
    }

    #[test]
    fn cap_never_below_floor() {
        let vp = Size::new(400.0, 140.0);
        let anchor = Rect::new(10.0, 50.0, 100.0, 20.0);
        let p = compute_placement(anchor, vp, Size::default(), &list_opts());
        assert_eq!(p.max_height, Some(DEFAULT_MIN_HEIGHT_FLOOR));
    }

    #[test]
    fn content_panel_flips_when_it_does_not_fit() {
        let anchor = Rect::new(100.0, 450.0, 200.0, 36.0);
        let desired = Size::new(600.0, 340.0);
        let p = compute_placement(anchor, viewport(), desired, &PlacementOptions::default());
        assert_eq!(p.side, Side::Above);
        assert_eq!(p.top, 450.0 - DEFAULT_GAP - 340.0);
        assert_eq!(p.max_height, None);
    }

    #[test]
    fn degenerate_viewport_pins_to_padding() {
        let vp = Size::new(100.0, 60.0);
        let anchor = Rect::new(40.0, 20.0, 50.0, 20.0);
        let p = compute_placement(anchor, vp, Size::new(300.0, 400.0), &PlacementOptions::default());
        assert_eq!(p.left, DEFAULT_MIN_PADDING);
        assert_eq!(p.top, DEFAULT_MIN_PADDING);
    }

    #[test]
    fn identical_inputs_identical_output() {
        let anchor = Rect::new(333.3, 612.7, 141.1, 31.9);
        let a = compute_placement(anchor, viewport(), Size::new(10.0, 250.0), &list_opts());
        let b = compute_placement(anchor, viewport(), Size::new(10.0, 250.0), &list_opts());
        assert_eq!(a, b);
    }

    #[test]
    fn frame_mirrors_placement() {
        let p = PanelPlacement {
            top: 1.0,
            left: 2.0,
            width: 3.0,
            max_height: Some(4.0),
            side: Side::Above,
        };
        let frame = p.frame();
        assert_eq!((frame.top, frame.left, frame.width), (1.0, 2.0, 3.0));
        assert_eq!(frame.max_height, Some(4.0));
    }

    #[test]
    fn side_flip_roundtrip() {
        assert_eq!(Side::Above.flip(), Side::Below);
        assert_eq!(Side::Below.flip().flip(), Side::Below);
        assert_eq!(Side::default(), Side::Below);
    }

    #[test]
    fn usable_threshold_depends_on_panel_kind() {
        let desired = Size::new(10.0, 420.0);
        assert_eq!(PlacementOptions::default().usable_threshold(desired), 420.0);
        assert_eq!(list_opts().usable_threshold(desired), DEFAULT_MIN_USABLE_HEIGHT);
        let small = PlacementOptions::default().preferred_max_height(100.0);
        assert_eq!(small.usable_threshold(desired), 100.0);
    }
}
