#![forbid(unsafe_code)]

//! Core: geometry, input events, and host capabilities.
//!
//! # Role in Maître
//! `maitre-core` is the boundary between the overlay engine and whatever
//! actually renders the back-office console. It owns the geometric
//! primitives, the canonical document events, and the four capability traits
//! a rendering surface implements.
//!
//! # Primary responsibilities
//! - **Geometry**: [`geometry::Rect`], [`geometry::Size`], clamping and
//!   available-space helpers.
//! - **Events**: [`event::GlobalEvent`] and the key/pointer types inside it.
//! - **Capabilities**: [`measure::Geometry`], [`listener::ListenerRegistry`],
//!   [`host::OverlayHost`], [`focus::FocusControl`], bundled as
//!   [`surface::Surface`].
//! - **Scoped resources**: [`listener::ListenerGuard`] and
//!   [`host::MountHandle`] release their registration on drop.
//!
//! # How it fits in the system
//! `maitre-overlay` computes placements and drives state machines against
//! these traits only; `maitre-harness` provides an in-memory surface for
//! tests.

pub mod element;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod host;
pub mod listener;
pub mod measure;
pub mod surface;

pub use element::{ElementId, InstanceId};
pub use geometry::{Rect, Size};
pub use surface::Surface;
