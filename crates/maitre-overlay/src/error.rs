#![forbid(unsafe_code)]

//! Errors from configuration loading.
//!
//! Interaction paths never fail: malformed dates fall back, geometry clamps,
//! empty lists make keys no-ops. Only loading an [`OverlayConfig`] from text
//! or disk can go wrong.
//!
//! [`OverlayConfig`]: crate::config::OverlayConfig

use thiserror::Error;

/// Errors that can occur when loading an overlay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read overlay config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse overlay config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse overlay config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("overlay config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
