#![forbid(unsafe_code)]

//! Per-trigger overlay orchestration.
//!
//! An [`Overlay`] ties one trigger element to one detached panel. It owns the
//! [`DismissalController`], the current [`PanelPlacement`] and the
//! [`MountHandle`], and talks to the rendering surface only through the
//! capabilities in [`Surface`].
//!
//! # Lifecycle
//!
//! 1. `open` attaches global listeners, mounts the panel at a provisional
//!    placement computed from the estimated size, then measures the mounted
//!    panel and places it again (two-pass placement).
//! 2. While open, resize and scroll events and explicit content changes call
//!    [`Overlay::invalidate`], which re-measures both the trigger and the
//!    panel. Nothing is cached between passes.
//! 3. `close` releases listeners and the mount, and returns focus to the
//!    trigger for keyboard-originated closes.
//!
//! Dropping an open overlay closes it with [`CloseReason::Unmount`].

use std::rc::Rc;

use maitre_core::element::{ElementId, InstanceId};
use maitre_core::event::{GlobalEvent, ListenerKind};
use maitre_core::geometry::{Rect, Size};
use maitre_core::host::{MountHandle, PanelDescriptor, PanelRole};
use maitre_core::surface::Surface;

use crate::aria::{PanelAria, TriggerAria};
use crate::dismiss::{CloseReason, DismissalController, OpenCause};
use crate::placement::{PanelPlacement, PlacementOptions, compute_placement};

/// Observable state of one overlay instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub open: bool,
    /// Last applied placement; `None` while closed.
    pub placement: Option<PanelPlacement>,
}

/// What [`Overlay::handle_global`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// Not relevant to this instance (closed, inside click, other keys).
    Ignored,
    /// The event closed the overlay.
    Dismissed(CloseReason),
    /// The panel was re-measured and placed again.
    Repositioned,
}

/// One trigger's floating panel.
pub struct Overlay {
    id: InstanceId,
    trigger: ElementId,
    role: PanelRole,
    surface: Surface,
    dismissal: DismissalController,
    mount: Option<MountHandle>,
    state: OverlayState,
    options: PlacementOptions,
    estimate: Size,
    entries: usize,
}

impl Overlay {
    /// Create a closed overlay for `trigger`.
    pub fn new(surface: Surface, trigger: ElementId, role: PanelRole) -> Self {
        let id = InstanceId::next();
        let dismissal = DismissalController::new(id, Rc::clone(&surface.listeners));
        Self {
            id,
            trigger,
            role,
            surface,
            dismissal,
            mount: None,
            state: OverlayState::default(),
            options: PlacementOptions::default(),
            estimate: Size::default(),
            entries: 0,
        }
    }

    /// Set placement constraints.
    #[must_use]
    pub fn with_options(mut self, options: PlacementOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the size assumed for the first placement pass.
    #[must_use]
    pub fn with_estimate(mut self, estimate: Size) -> Self {
        self.estimate = estimate;
        self
    }

    #[inline]
    pub const fn id(&self) -> InstanceId {
        self.id
    }

    #[inline]
    pub const fn trigger(&self) -> ElementId {
        self.trigger
    }

    #[inline]
    pub const fn role(&self) -> PanelRole {
        self.role
    }

    #[inline]
    pub const fn state(&self) -> OverlayState {
        self.state
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        self.state.open
    }

    #[inline]
    pub const fn is_disabled(&self) -> bool {
        self.dismissal.is_disabled()
    }

    #[inline]
    pub const fn placement(&self) -> Option<PanelPlacement> {
        self.state.placement
    }

    #[inline]
    pub const fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Replace placement constraints. An open panel is placed again.
    pub fn set_options(&mut self, options: PlacementOptions) {
        self.options = options;
        self.invalidate();
    }

    /// Replace the first-pass size estimate. An open panel is placed again.
    pub fn set_estimate(&mut self, estimate: Size) {
        self.estimate = estimate;
        self.invalidate();
    }

    /// Number of global listeners held by this instance.
    pub fn listener_count(&self) -> usize {
        self.dismissal.listener_count()
    }

    /// Root element of the mounted panel while open.
    pub fn panel(&self) -> Option<ElementId> {
        self.mount.as_ref().map(MountHandle::panel)
    }

    /// Set how many focusable entries the next mount renders.
    pub fn set_entries(&mut self, entries: usize) {
        self.entries = entries;
    }

    /// Element of the entry at `index` in the mounted panel.
    pub fn entry(&self, index: usize) -> Option<ElementId> {
        self.mount.as_ref().and_then(|mount| mount.entry(index))
    }

    /// Move input focus to the entry at `index`.
    pub fn focus_entry(&self, index: usize) -> bool {
        match self.entry(index) {
            Some(element) => {
                self.surface.focus.focus(element);
                true
            }
            None => false,
        }
    }

    /// Whether `element` is the trigger, the panel, or inside either.
    pub fn contains(&self, element: ElementId) -> bool {
        let geometry = &self.surface.geometry;
        geometry.contains(self.trigger, element)
            || self
                .panel()
                .is_some_and(|panel| geometry.contains(panel, element))
    }

    /// Open the panel. Returns `false` when disabled or already open.
    pub fn open(&mut self, cause: OpenCause) -> bool {
        if !self.dismissal.open(cause) {
            return false;
        }
        let anchor = self
            .surface
            .geometry
            .measure(self.trigger)
            .unwrap_or_default();
        let provisional = self.compute(anchor, self.estimate);
        let descriptor = PanelDescriptor {
            owner: self.id,
            role: self.role,
            entries: self.entries,
            frame: provisional.frame(),
        };
        self.mount = Some(MountHandle::mount(&self.surface.host, descriptor));
        self.state = OverlayState {
            open: true,
            placement: Some(provisional),
        };
        self.invalidate();

        if let Some(placement) = self.state.placement {
            tracing::debug!(
                message = "overlay.open",
                id = self.id.get(),
                cause = ?cause,
                side = placement.side.as_str(),
                top = placement.top,
                left = placement.left,
                width = placement.width
            );
        }
        true
    }

    /// Re-measure the trigger and the panel and place the panel again.
    ///
    /// No-op while closed. Returns the placement in effect afterwards.
    pub fn invalidate(&mut self) -> Option<PanelPlacement> {
        let mount = self.mount.as_ref()?;
        // A trigger that is no longer laid out keeps the last placement.
        let Some(anchor) = self.surface.geometry.measure(self.trigger) else {
            return self.state.placement;
        };
        let desired = self
            .surface
            .geometry
            .measure(mount.panel())
            .map_or(self.estimate, |rect| rect.size());
        let next = self.compute(anchor, desired);
        if self.state.placement != Some(next) {
            mount.reposition(next.frame());
            tracing::debug!(
                message = "overlay.reposition",
                id = self.id.get(),
                side = next.side.as_str(),
                top = next.top,
                left = next.left,
                max_height = ?next.max_height
            );
            self.state.placement = Some(next);
        }
        self.state.placement
    }

    /// Close the panel. Returns the reason if the overlay was open.
    pub fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        let reason = self.dismissal.close(reason)?;
        self.finish_close(reason);
        Some(reason)
    }

    /// Close if open, else open.
    pub fn toggle(&mut self, cause: OpenCause) -> bool {
        if self.is_open() {
            self.close(CloseReason::Toggle);
            false
        } else {
            self.open(cause)
        }
    }

    /// Update the trigger's disabled state; disabling an open overlay closes
    /// it.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<CloseReason> {
        let reason = self.dismissal.set_disabled(disabled)?;
        self.finish_close(reason);
        Some(reason)
    }

    /// Route a document-level event to this instance.
    pub fn handle_global(&mut self, event: &GlobalEvent) -> OverlayOutcome {
        if !self.is_open() {
            return OverlayOutcome::Ignored;
        }
        tracing::trace!(
            message = "overlay.route",
            id = self.id.get(),
            kind = event.kind().as_str()
        );
        let reason = self
            .dismissal
            .dismissal_for(event, |element| self.contains(element));
        if let Some(reason) = reason {
            self.close(reason);
            return OverlayOutcome::Dismissed(reason);
        }
        match event.kind() {
            ListenerKind::Resize | ListenerKind::Scroll => {
                self.invalidate();
                OverlayOutcome::Repositioned
            }
            ListenerKind::PointerDown | ListenerKind::KeyDown => OverlayOutcome::Ignored,
        }
    }

    /// Attributes for the trigger.
    pub fn trigger_aria(&self) -> TriggerAria {
        TriggerAria {
            haspopup: self.role.as_str(),
            expanded: self.is_open(),
            controls: self.panel(),
            disabled: self.is_disabled(),
        }
    }

    /// Attributes for the panel while open.
    pub fn panel_aria(&self) -> Option<PanelAria> {
        self.state
            .placement
            .map(|placement| PanelAria::new(self.role, self.trigger, placement.side))
    }

    fn compute(&self, anchor: Rect, desired: Size) -> PanelPlacement {
        let viewport = self.surface.geometry.viewport_size();
        compute_placement(anchor, viewport, desired, &self.options)
    }

    fn finish_close(&mut self, reason: CloseReason) {
        self.mount = None;
        self.state = OverlayState::default();
        if reason.restores_focus() {
            self.surface.focus.focus(self.trigger);
        }
        tracing::debug!(
            message = "overlay.close",
            id = self.id.get(),
            reason = reason.as_str()
        );
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.close(CloseReason::Unmount);
    }
}

impl std::fmt::Debug for Overlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overlay")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .field("role", &self.role)
            .field("state", &self.state)
            .field("dismissal", &self.dismissal)
            .finish_non_exhaustive()
    }
}
