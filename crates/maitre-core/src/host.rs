#![forbid(unsafe_code)]

//! Detached panel mounting.
//!
//! Every floating panel renders into one shared attachment point instead of
//! inside its trigger's layout container, so ancestor clipping
//! (`overflow: hidden`, transform contexts) never cuts it off. The host is
//! append/remove only: it does not arbitrate between simultaneously mounted
//! panels and no instance reads another's content.

use std::fmt;
use std::rc::Rc;

use crate::element::{ElementId, InstanceId};

/// Accessibility role of a mounted panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelRole {
    /// A list of options or actions (`role="listbox"`).
    Listbox,
    /// Free-form interactive content such as a calendar (`role="dialog"`).
    Dialog,
}

impl PanelRole {
    /// The ARIA role string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listbox => "listbox",
            Self::Dialog => "dialog",
        }
    }

    /// Role string for the entries of a panel with this role.
    #[must_use]
    pub const fn entry_role(self) -> Option<&'static str> {
        match self {
            Self::Listbox => Some("option"),
            Self::Dialog => None,
        }
    }
}

/// Absolute box a host applies to a mounted panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelFrame {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    /// Height cap for scrollable list panels; `None` lets content decide.
    pub max_height: Option<f64>,
}

/// What to mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDescriptor {
    /// Owning overlay instance.
    pub owner: InstanceId,
    /// Accessibility role.
    pub role: PanelRole,
    /// Number of focusable entries the panel renders, in traversal order.
    pub entries: usize,
    /// Initial frame.
    pub frame: PanelFrame,
}

/// Shared mount point for detached panels.
pub trait OverlayHost {
    /// The well-known overlay root, if the document has one.
    fn attachment_point(&self) -> Option<ElementId>;

    /// The document body.
    fn body(&self) -> ElementId;

    /// Where panels are mounted: the overlay root, else the body.
    fn mount_target(&self) -> ElementId {
        self.attachment_point().unwrap_or_else(|| self.body())
    }

    /// Mount a panel under `parent` and return the panel's root element.
    fn mount(&self, parent: ElementId, descriptor: PanelDescriptor) -> ElementId;

    /// Apply a new frame to a mounted panel.
    fn reposition(&self, panel: ElementId, frame: PanelFrame);

    /// Element of the entry at `index` inside `panel`.
    fn entry(&self, panel: ElementId, index: usize) -> Option<ElementId>;

    /// Remove a mounted panel. Returns `false` if it was not mounted.
    fn unmount(&self, panel: ElementId) -> bool;
}

/// Owned panel mount; unmounts on drop.
pub struct MountHandle {
    panel: ElementId,
    owner: InstanceId,
    host: Rc<dyn OverlayHost>,
}

impl MountHandle {
    /// Mount `descriptor` at the host's mount target.
    pub fn mount(host: &Rc<dyn OverlayHost>, descriptor: PanelDescriptor) -> Self {
        let owner = descriptor.owner;
        let parent = host.mount_target();
        let panel = host.mount(parent, descriptor);
        tracing::trace!(
            message = "host.mount",
            owner = owner.get(),
            parent = parent.get(),
            panel = panel.get()
        );
        Self {
            panel,
            owner,
            host: Rc::clone(host),
        }
    }

    /// Root element of the mounted panel.
    #[inline]
    pub const fn panel(&self) -> ElementId {
        self.panel
    }

    /// Apply a new frame.
    pub fn reposition(&self, frame: PanelFrame) {
        self.host.reposition(self.panel, frame);
    }

    /// Element of the entry at `index`.
    pub fn entry(&self, index: usize) -> Option<ElementId> {
        self.host.entry(self.panel, index)
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        let removed = self.host.unmount(self.panel);
        tracing::trace!(
            message = "host.unmount",
            owner = self.owner.get(),
            panel = self.panel.get(),
            removed
        );
    }
}

impl fmt::Debug for MountHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountHandle")
            .field("panel", &self.panel)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}
