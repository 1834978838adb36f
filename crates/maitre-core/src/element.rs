#![forbid(unsafe_code)]

//! Opaque handles for surface elements and overlay instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle to an element owned by the host surface.
///
/// The engine never looks inside an element; it only asks the surface to
/// measure it, focus it, or test containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Wrap a raw surface id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw surface id.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

/// Global counter for overlay instance ids.
static INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one overlay instance.
///
/// Listener registrations and mounted panels are tagged with it so a surface
/// can route events to the right instance and tests can attribute leaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        Self(INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}
