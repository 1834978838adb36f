#![forbid(unsafe_code)]

//! Layout policy for the overlay widgets, loadable from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # maitre-overlay.toml
//! [placement]
//! min_padding = 12.0
//!
//! [select]
//! max_height = 400.0
//! ```
//!
//! ```rust,ignore
//! let config = OverlayConfig::from_toml_file("maitre-overlay.toml")?;
//! let config = OverlayConfig::from_json_str(json)?.validated()?;
//! ```
//!
//! # Defaults
//!
//! Every field defaults to the built-in constant it replaces, so
//! `OverlayConfig::default()` behaves exactly like widgets built without a
//! config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use maitre_core::geometry::Size;

use crate::error::ConfigError;
use crate::placement::{
    DEFAULT_GAP, DEFAULT_MIN_HEIGHT_FLOOR, DEFAULT_MIN_PADDING, DEFAULT_MIN_USABLE_HEIGHT,
    DEFAULT_MIN_WIDTH, PlacementOptions,
};
use crate::widgets::{action_menu, date_range, select};

// ---------------------------------------------------------------------------
// Top-level OverlayConfig
// ---------------------------------------------------------------------------

/// Layout configuration for every overlay widget on a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Shared placement constraints.
    pub placement: PlacementConfig,
    /// Single-select dropdowns.
    pub select: ListConfig,
    /// Action dropdowns.
    pub action_menu: ListConfig,
    /// Date range pickers.
    pub date_range: DateRangeConfig,
}

impl OverlayConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let p = &self.placement;

        for (name, value) in [
            ("placement.min_padding", p.min_padding),
            ("placement.gap", p.gap),
            ("placement.min_width", p.min_width),
            ("placement.min_usable_height", p.min_usable_height),
            ("placement.min_height_floor", p.min_height_floor),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{name} must be finite and >= 0, got {value}"));
            }
        }
        if !p.offset_x.is_finite() {
            errors.push(format!("placement.offset_x must be finite, got {}", p.offset_x));
        }

        for (section, list) in [("select", &self.select), ("action_menu", &self.action_menu)] {
            if let Some(height) = list.max_height {
                if !height.is_finite() || height <= 0.0 {
                    errors.push(format!("{section}.max_height must be > 0, got {height}"));
                } else if height < p.min_height_floor {
                    errors.push(format!(
                        "{section}.max_height ({height}) must be >= placement.min_height_floor ({})",
                        p.min_height_floor
                    ));
                }
            }
            if let Some(width) = list.min_width {
                if !width.is_finite() || width < 0.0 {
                    errors.push(format!("{section}.min_width must be >= 0, got {width}"));
                }
            }
        }

        let d = &self.date_range;
        if !d.min_width.is_finite() || d.min_width < 0.0 {
            errors.push(format!("date_range.min_width must be >= 0, got {}", d.min_width));
        }
        if !d.estimated_height.is_finite() || d.estimated_height <= 0.0 {
            errors.push(format!(
                "date_range.estimated_height must be > 0, got {}",
                d.estimated_height
            ));
        }

        errors
    }

    /// Return `self` if it validates, else every problem found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Shared constraints as [`PlacementOptions`] (content-sized panel).
    #[must_use]
    pub fn placement_options(&self) -> PlacementOptions {
        let p = &self.placement;
        PlacementOptions {
            offset_x: p.offset_x,
            min_padding: p.min_padding,
            gap: p.gap,
            min_width: p.min_width,
            min_usable_height: p.min_usable_height,
            min_height_floor: p.min_height_floor,
            preferred_max_height: None,
        }
    }

    /// Options for single-select dropdowns.
    #[must_use]
    pub fn select_options(&self) -> PlacementOptions {
        self.select
            .apply(self.placement_options(), select::DEFAULT_MAX_HEIGHT)
    }

    /// Options for action dropdowns.
    #[must_use]
    pub fn action_menu_options(&self) -> PlacementOptions {
        self.action_menu
            .apply(self.placement_options(), action_menu::DEFAULT_MAX_HEIGHT)
    }

    /// Options for date range pickers.
    #[must_use]
    pub fn date_range_options(&self) -> PlacementOptions {
        self.placement_options().min_width(self.date_range.min_width)
    }

    /// First-pass size estimate for date range pickers.
    #[must_use]
    pub fn date_range_estimate(&self) -> Size {
        Size::new(self.date_range.min_width, self.date_range.estimated_height)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Placement constraints shared by every widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Horizontal shift from the trigger's left edge. Default: 0.
    pub offset_x: f64,
    /// Distance kept from every viewport edge. Default: 8.
    pub min_padding: f64,
    /// Distance between trigger and panel. Default: 4.
    pub gap: f64,
    /// Minimum panel width. Default: 180.
    pub min_width: f64,
    /// Space below under which a panel may flip above. Default: 160.
    pub min_usable_height: f64,
    /// Lower bound for list height caps. Default: 96.
    pub min_height_floor: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            min_padding: DEFAULT_MIN_PADDING,
            gap: DEFAULT_GAP,
            min_width: DEFAULT_MIN_WIDTH,
            min_usable_height: DEFAULT_MIN_USABLE_HEIGHT,
            min_height_floor: DEFAULT_MIN_HEIGHT_FLOOR,
        }
    }
}

/// Per-widget settings for list panels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Overrides `placement.min_width` when set.
    pub min_width: Option<f64>,
    /// Preferred height cap of the list. Default: 320 for selects, 280 for
    /// action menus.
    pub max_height: Option<f64>,
}

impl ListConfig {
    fn apply(&self, base: PlacementOptions, default_max_height: f64) -> PlacementOptions {
        let options = base.preferred_max_height(self.max_height.unwrap_or(default_max_height));
        match self.min_width {
            Some(width) => options.min_width(width),
            None => options,
        }
    }
}

/// Date range picker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeConfig {
    /// Minimum panel width. Default: 320.
    pub min_width: f64,
    /// Height assumed before the first measurement. Default: 360.
    pub estimated_height: f64,
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        Self {
            min_width: date_range::DEFAULT_MIN_WIDTH,
            estimated_height: date_range::DEFAULT_ESTIMATED_HEIGHT,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
