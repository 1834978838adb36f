#![forbid(unsafe_code)]

//! Overlay engine: placement, dismissal, roving focus, and range selection.
//!
//! # Role in Maître
//! `maitre-overlay` is the behavior shared by every floating panel in the
//! back-office console: the single-select dropdown, the action dropdown, and
//! the date range picker. It decides where a detached panel goes, keeps it
//! glued to its trigger across scroll and resize, drives keyboard focus
//! inside it, and closes it on outside clicks, Escape, commit, or when the
//! trigger is disabled.
//!
//! # Primary responsibilities
//! - **Placement**: [`placement::compute_placement`], a pure function of the
//!   trigger rectangle, viewport, and panel size.
//! - **Dismissal**: [`dismiss::DismissalController`], which owns the global
//!   listeners for exactly as long as the panel is open.
//! - **Keyboard**: [`roving::RovingFocus`], clamped arrow navigation with
//!   commit and cancel.
//! - **Dates**: [`range::RangeDraft`] and [`calendar::CalendarMonth`].
//! - **Orchestration**: [`overlay::Overlay`] ties these to one trigger and
//!   the surface capabilities from `maitre-core`.
//! - **Widgets**: [`Select`], [`ActionMenu`], [`DateRangePicker`].
//! - **Policy**: [`config::OverlayConfig`] loaded from TOML or JSON.
//!
//! # How it fits in the system
//! Business payloads (bookings, menu items, wines) are opaque values carried
//! by [`entry::Entry`] and returned through callbacks. Many instances may be
//! open at once on one page; none of them share state.

pub mod aria;
pub mod calendar;
pub mod config;
pub mod dismiss;
pub mod entry;
pub mod error;
pub mod overlay;
pub mod placement;
pub mod range;
pub mod roving;
pub mod widgets;

pub use config::OverlayConfig;
pub use dismiss::{CloseReason, OpenCause};
pub use entry::Entry;
pub use error::ConfigError;
pub use overlay::{Overlay, OverlayOutcome, OverlayState};
pub use placement::{PanelPlacement, PlacementOptions, Side, compute_placement};
pub use range::{DateRange, RangeDraft, RangePreset, parse_iso_date};
pub use widgets::{ActionMenu, DateRangePicker, Select};
