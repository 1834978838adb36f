#![forbid(unsafe_code)]

//! Shared list-panel plumbing for [`Select`](super::Select) and
//! [`ActionMenu`](super::ActionMenu).

use maitre_core::element::ElementId;
use maitre_core::event::KeyEvent;
use maitre_core::host::PanelRole;
use maitre_core::surface::Surface;

use crate::aria::OptionAria;
use crate::dismiss::{CloseReason, OpenCause};
use crate::entry::Entry;
use crate::overlay::Overlay;
use crate::roving::{RovingAction, RovingFocus};

#[derive(Debug)]
pub(crate) struct ListPanel<V> {
    pub(crate) overlay: Overlay,
    entries: Vec<Entry<V>>,
    roving: RovingFocus,
}

impl<V> ListPanel<V> {
    pub(crate) fn new(
        surface: Surface,
        trigger: ElementId,
        role: PanelRole,
        entries: Vec<Entry<V>>,
    ) -> Self {
        let mut overlay = Overlay::new(surface, trigger, role);
        overlay.set_entries(entries.len());
        Self {
            overlay,
            roving: RovingFocus::new(entries.len()),
            entries,
        }
    }

    pub(crate) fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.roving.active()
    }

    /// Replace the entries. An open panel keeps its highlight where possible
    /// and is placed again.
    pub(crate) fn set_entries(&mut self, entries: Vec<Entry<V>>) {
        self.entries = entries;
        self.overlay.set_entries(self.entries.len());
        if self.overlay.is_open() {
            let active = self.roving.active();
            self.roving.reset(self.entries.len(), active);
            self.overlay.invalidate();
        }
    }

    /// Open with the highlight on `selected` and focus on that entry.
    pub(crate) fn open(&mut self, cause: OpenCause, selected: Option<usize>) -> bool {
        if !self.overlay.open(cause) {
            return false;
        }
        self.roving.reset(self.entries.len(), selected);
        if let Some(index) = self.roving.active() {
            self.overlay.focus_entry(index);
        }
        true
    }

    /// Feed a key pressed inside the panel. Returns the index to commit.
    pub(crate) fn handle_key(&mut self, key: &KeyEvent) -> Option<usize> {
        if !self.overlay.is_open() {
            return None;
        }
        match self.roving.handle_key(key.code) {
            RovingAction::Moved(index) => {
                self.overlay.focus_entry(index);
                None
            }
            RovingAction::Commit(index) => Some(index),
            RovingAction::Cancel => {
                self.overlay.close(CloseReason::Escape);
                None
            }
            RovingAction::None => None,
        }
    }

    pub(crate) fn hover(&mut self, index: usize) -> bool {
        self.overlay.is_open() && self.roving.hover(index)
    }

    /// Close with `Commit` and hand back the committed entry.
    pub(crate) fn commit(&mut self, index: usize) -> Option<&Entry<V>> {
        if index >= self.entries.len() {
            return None;
        }
        self.overlay.close(CloseReason::Commit)?;
        self.entries.get(index)
    }

    pub(crate) fn option_aria(&self, index: usize, selected: bool) -> Option<OptionAria> {
        if index >= self.entries.len() {
            return None;
        }
        Some(OptionAria {
            role: self.overlay.role().entry_role().unwrap_or("option"),
            selected,
            active: self.overlay.is_open() && self.roving.active() == Some(index),
        })
    }
}
