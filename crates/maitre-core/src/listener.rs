#![forbid(unsafe_code)]

//! Global listener registration with scoped release.
//!
//! An open overlay needs document-wide pointer, keyboard, resize and scroll
//! listeners. They are ambient side effects, so they are modelled as explicit
//! handles: [`ListenerGuard::acquire`] subscribes, and dropping the guard
//! unsubscribes.
//!
//! # Invariants
//!
//! 1. A guard removes exactly the registration it created, once.
//! 2. Dropping the owner of a guard (close, forced disable, unmount) releases
//!    the registration synchronously; there is no deferred cleanup.
//! 3. Registrations are tagged with the owning [`InstanceId`] so a surface
//!    can route events per instance.

use std::fmt;
use std::rc::Rc;

use crate::element::InstanceId;
use crate::event::{ListenerKind, ListenerOptions};

/// Surface-assigned id of a single listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a raw registration id.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw registration id.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Document-level listener table owned by the host surface.
///
/// Methods take `&self`: the surface is shared by every overlay instance on
/// the page and uses interior mutability for its table.
pub trait ListenerRegistry {
    /// Register a listener of `kind` on behalf of `owner`.
    fn add_listener(
        &self,
        owner: InstanceId,
        kind: ListenerKind,
        options: ListenerOptions,
    ) -> ListenerId;

    /// Remove a registration. Returns `false` if it was already gone.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// Owned listener registration; unsubscribes on drop.
pub struct ListenerGuard {
    id: ListenerId,
    owner: InstanceId,
    kind: ListenerKind,
    registry: Rc<dyn ListenerRegistry>,
}

impl ListenerGuard {
    /// Subscribe `owner` to `kind` events and return the guard that keeps the
    /// registration alive.
    pub fn acquire(
        registry: &Rc<dyn ListenerRegistry>,
        owner: InstanceId,
        kind: ListenerKind,
        options: ListenerOptions,
    ) -> Self {
        let id = registry.add_listener(owner, kind, options);
        tracing::trace!(
            message = "listener.acquire",
            owner = owner.get(),
            kind = kind.as_str(),
            id = id.get()
        );
        Self {
            id,
            owner,
            kind,
            registry: Rc::clone(registry),
        }
    }

    /// Registration id.
    #[inline]
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Listener kind.
    #[inline]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Owning instance.
    #[inline]
    pub const fn owner(&self) -> InstanceId {
        self.owner
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let removed = self.registry.remove_listener(self.id);
        tracing::trace!(
            message = "listener.release",
            owner = self.owner.get(),
            kind = self.kind.as_str(),
            id = self.id.get(),
            removed
        );
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
