#![forbid(unsafe_code)]

//! Single-select dropdown.
//!
//! The committed value is owned by the caller: `Select` shows whatever was
//! last passed to [`Select::set_value`] (or committed through it) and reports
//! new choices through `on_change`. Opening highlights and focuses the
//! selected entry, or the first one when nothing matches.

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

/// Default list height cap.
pub const DEFAULT_MAX_HEIGHT: f64 = 320.0;

type ChangeFn<V> = Box<dyn FnMut(V)>;

/// A dropdown that picks one value out of a list.
pub struct Select<V> {
    list: ListPanel<V>,
    value: Option<V>,
    placeholder: String,
    on_change: Option<ChangeFn<V>>,
}

impl<V: Clone + PartialEq> Select<V> {
    /// Create a closed select over `entries` with no value.
    pub fn new(surface: Surface, trigger: ElementId, entries: Vec<Entry<V>>) -> Self {
        let mut list = ListPanel::new(surface, trigger, PanelRole::Listbox, entries);
        list.overlay
            .set_options(PlacementOptions::default().preferred_max_height(DEFAULT_MAX_HEIGHT));
        Self {
            list,
            value: None,
            placeholder: String::new(),
            on_change: None,
        }
    }

    /// Apply `[placement]` and `[select]` from a config.
    #[must_use]
    pub fn with_config(mut self, config: &OverlayConfig) -> Self {
        self.list.overlay.set_options(config.select_options());
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    /// Text shown on the trigger when nothing is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Callback invoked with the new value on commit.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(V) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Minimum panel width.
    #[must_use]
    pub fn min_width(mut self, width: f64) -> Self {
        let options = self.list.overlay.options().min_width(width);
        self.list.overlay.set_options(options);
        self
    }

    /// Height cap of the option list.
    #[must_use]
    pub fn max_height(mut self, height: f64) -> Self {
        let options = self.list.overlay.options().preferred_max_height(height);
        self.list.overlay.set_options(options);
        self
    }

    /// Horizontal offset from the trigger's left edge.
    #[must_use]
    pub fn offset_x(mut self, offset_x: f64) -> Self {
        let options = self.list.overlay.options().offset_x(offset_x);
        self.list.overlay.set_options(options);
        self
    }

    /// Start disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.list.overlay.set_disabled(disabled);
        self
    }

    /// The underlying overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.list.overlay
    }

    pub fn entries(&self) -> &[Entry<V>] {
        self.list.entries()
    }

    /// The current value.
    pub fn current(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Index of the current value in the entry list.
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.value.as_ref()?;
        self.list.entries().iter().position(|e| &e.value == value)
    }

    /// Highlighted index while open.
    pub fn active_index(&self) -> Option<usize> {
        self.list.active()
    }

    pub fn is_open(&self) -> bool {
        self.list.overlay.is_open()
    }

    /// Trigger text: the selected label, else the placeholder.
    pub fn label(&self) -> &str {
        self.selected_index()
            .and_then(|i| self.list.entries().get(i))
            .map_or(self.placeholder.as_str(), |e| e.label.as_str())
    }

    /// Replace the value without notifying.
    pub fn set_value(&mut self, value: Option<V>) {
        self.value = value;
    }

    /// Replace the entries.
    pub fn set_entries(&mut self, entries: Vec<Entry<V>>) {
        self.list.set_entries(entries);
    }

    /// Update the disabled state; disabling closes an open panel.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<CloseReason> {
        self.list.overlay.set_disabled(disabled)
    }

    /// Open the panel. Returns `false` when disabled or already open.
    pub fn open(&mut self, cause: OpenCause) -> bool {
        let selected = self.selected_index();
        self.list.open(cause, selected)
    }

    /// Close the panel without committing.
    pub fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        self.list.overlay.close(reason)
    }

    /// Pointer-down on the trigger toggles the panel.
    pub fn trigger_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.is_open() {
            self.close(CloseReason::Toggle);
            false
        } else {
            self.open(OpenCause::Pointer { seq: event.seq })
        }
    }

    /// Key pressed while the trigger has focus.
    pub fn trigger_key(&mut self, key: &KeyEvent) -> bool {
        !self.is_open() && opens_panel(key) && self.open(OpenCause::Keyboard)
    }

    /// Key pressed inside the open panel.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(index) = self.list.handle_key(key) {
            self.commit(index);
        }
    }

    /// Pointer moved over entry `index`.
    pub fn hover(&mut self, index: usize) -> bool {
        self.list.hover(index)
    }

    /// Pointer click on entry `index`.
    pub fn click_entry(&mut self, index: usize) {
        self.commit(index);
    }

    /// Route a document-level event.
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

    /// Attributes for entry `index`.
    pub fn option_aria(&self, index: usize) -> Option<OptionAria> {
        let selected = self.selected_index() == Some(index);
        self.list.option_aria(index, selected)
    }

    fn commit(&mut self, index: usize) {
        let Some(value) = self.list.commit(index).map(|e| e.value.clone()) else {
            return;
        };
        tracing::trace!(
            message = "select.commit",
            id = self.list.overlay.id().get(),
            index
        );
        self.value = Some(value.clone());
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(value);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Select<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("list", &self.list)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
