#![forbid(unsafe_code)]

//! Maître overlay engine public facade.
//!
//! This crate provides the stable surface area for console screens. It
//! re-exports the widgets, value types and capability traits from the
//! internal crates and offers a prelude for day-to-day usage.

use std::path::Path;

// --- Core re-exports -------------------------------------------------------

pub use maitre_core::element::{ElementId, InstanceId};
pub use maitre_core::event::{GlobalEvent, KeyCode, KeyEvent, Modifiers, PointerEvent};
pub use maitre_core::focus::FocusControl;
pub use maitre_core::geometry::{Rect, Size};
pub use maitre_core::host::OverlayHost;
pub use maitre_core::listener::ListenerRegistry;
pub use maitre_core::measure::Geometry;
pub use maitre_core::surface::Surface;

// --- Overlay re-exports ----------------------------------------------------

pub use maitre_overlay::calendar::{CalendarMonth, DayCell};
pub use maitre_overlay::{
    ActionMenu, CloseReason, ConfigError, DateRange, DateRangePicker, Entry, OpenCause,
    OverlayConfig, OverlayOutcome, PanelPlacement, PlacementOptions, RangeDraft, RangePreset,
    Select, Side, compute_placement, parse_iso_date,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Maître APIs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading or validating an overlay configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The configuration file has an extension other than `.toml` or `.json`.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Standard result type for Maître APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Load and validate an overlay configuration, picking the format from the
/// file extension.
pub fn load_config(path: impl AsRef<Path>) -> Result<OverlayConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config = match extension.as_str() {
        "toml" => OverlayConfig::from_toml_file(path)?,
        "json" => OverlayConfig::from_json_file(path)?,
        _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };
    Ok(config.validated()?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActionMenu, CloseReason, DateRange, DateRangePicker, ElementId, Entry, Error, GlobalEvent,
        KeyCode, KeyEvent, OpenCause, OverlayConfig, OverlayOutcome, PointerEvent, Rect, Result,
        Select, Size, Surface,
    };

    pub use crate::{core, overlay};
}

pub use maitre_core as core;
pub use maitre_overlay as overlay;
