#![forbid(unsafe_code)]

//! Action dropdown ("…" row menus, bulk actions).
//!
//! Same placement, dismissal and roving focus as [`Select`](super::Select),
//! but there is no selection: the highlight starts at the first entry on
//! every open and committing an entry fires `on_action`.

use std::fmt;

use maitre_core::element::ElementId;
use maitre_core::event::{GlobalEvent, KeyEvent, PointerEvent};
use maitre_core::host::PanelRole;
use maitre_core::surface::Surface;

use crate::aria::{OptionAria, TriggerAria};
use crate::config::OverlayConfig;
use crate::dismiss::{CloseReason, OpenCause};
use crate::entry::Entry;
use crate::overlay::{Overlay, OverlayOutcome};
use crate::placement::{PanelPlacement, PlacementOptions};

use super::list::ListPanel;
use super::opens_panel;

/// Default menu height cap.
pub const DEFAULT_MAX_HEIGHT: f64 = 280.0;

type ActionFn<A> = Box<dyn FnMut(A)>;

/// A dropdown of actions.
pub struct ActionMenu<A> {
    list: ListPanel<A>,
    on_action: Option<ActionFn<A>>,
}

impl<A: Clone> ActionMenu<A> {
    pub fn new(surface: Surface, trigger: ElementId, actions: Vec<Entry<A>>) -> Self {
        let mut list = ListPanel::new(surface, trigger, PanelRole::Listbox, actions);
        list.overlay
            .set_options(PlacementOptions::default().preferred_max_height(DEFAULT_MAX_HEIGHT));
        Self {
            list,
            on_action: None,
        }
    }

    /// Apply `[placement]` and `[action_menu]` from a config.
    #[must_use]
    pub fn with_config(mut self, config: &OverlayConfig) -> Self {
        self.list.overlay.set_options(config.action_menu_options());
        self
    }

    #[must_use]
    pub fn on_action(mut self, f: impl FnMut(A) + 'static) -> Self {
        self.on_action = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn min_width(mut self, width: f64) -> Self {
        let options = self.list.overlay.options().min_width(width);
        self.list.overlay.set_options(options);
        self
    }

    #[must_use]
    pub fn max_height(mut self, height: f64) -> Self {
        let options = self.list.overlay.options().preferred_max_height(height);
        self.list.overlay.set_options(options);
        self
    }

    #[must_use]
    pub fn offset_x(mut self, offset_x: f64) -> Self {
        let options = self.list.overlay.options().offset_x(offset_x);
        self.list.overlay.set_options(options);
        self
    }

    pub fn overlay(&self) -> &Overlay {
        &self.list.overlay
    }

    pub fn actions(&self) -> &[Entry<A>] {
        self.list.entries()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.list.active()
    }

    pub fn is_open(&self) -> bool {
        self.list.overlay.is_open()
    }

    pub fn set_actions(&mut self, actions: Vec<Entry<A>>) {
        self.list.set_entries(actions);
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Option<CloseReason> {
        self.list.overlay.set_disabled(disabled)
    }

    pub fn open(&mut self, cause: OpenCause) -> bool {
        self.list.open(cause, None)
    }

    pub fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        self.list.overlay.close(reason)
    }

    pub fn trigger_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.is_open() {
            self.close(CloseReason::Toggle);
            false
        } else {
            self.open(OpenCause::Pointer { seq: event.seq })
        }
    }

    pub fn trigger_key(&mut self, key: &KeyEvent) -> bool {
        !self.is_open() && opens_panel(key) && self.open(OpenCause::Keyboard)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(index) = self.list.handle_key(key) {
            self.invoke(index);
        }
    }

    pub fn hover(&mut self, index: usize) -> bool {
        self.list.hover(index)
    }

    pub fn click_entry(&mut self, index: usize) {
        self.invoke(index);
    }

    pub fn handle_global(&mut self, event: &GlobalEvent) -> OverlayOutcome {
        self.list.overlay.handle_global(event)
    }

    pub fn trigger_aria(&self) -> TriggerAria {
        self.list.overlay.trigger_aria()
    }

    /// Measure the panel and place it again after its content changed size.
    pub fn invalidate(&mut self) -> Option<PanelPlacement> {
        self.list.overlay.invalidate()
    }

    pub fn option_aria(&self, index: usize) -> Option<OptionAria> {
        self.list.option_aria(index, false)
    }

    fn invoke(&mut self, index: usize) {
        let Some(action) = self.list.commit(index).map(|e| e.value.clone()) else {
            return;
        };
        tracing::trace!(
            message = "action_menu.invoke",
            id = self.list.overlay.id().get(),
            index
        );
        if let Some(on_action) = self.on_action.as_mut() {
            on_action(action);
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for ActionMenu<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionMenu")
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}
