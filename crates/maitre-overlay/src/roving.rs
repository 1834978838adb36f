#![forbid(unsafe_code)]

//! Roving keyboard focus over an ordered entry list.
//!
//! One logical index is "active". Arrow keys move it and clamp at the ends
//! rather than wrapping. Enter commits the active entry and Escape cancels.
//! Keyboard moves ask the owner to move real focus
//! ([`RovingAction::Moved`]); pointer hover only moves the highlight
//! ([`RovingFocus::hover`]) so it never fights the user's pointer.

use maitre_core::event::KeyCode;

/// Result of feeding a key to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RovingAction {
    /// The key did nothing (empty list, already at the edge, unhandled key).
    None,
    /// The active index changed; focus the entry at this index.
    Moved(usize),
    /// Commit the entry at this index.
    Commit(usize),
    /// Close without committing.
    Cancel,
}

/// Active-index state for one open session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RovingFocus {
    len: usize,
    active: Option<usize>,
}

impl RovingFocus {
    /// Create a controller over `len` entries with nothing active.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    /// Reset for a new open session.
    ///
    /// Activates `selected` when it is in range, else the first entry, else
    /// nothing (empty list).
    pub fn reset(&mut self, len: usize, selected: Option<usize>) {
        self.len = len;
        self.active = if len == 0 {
            None
        } else {
            Some(selected.filter(|&i| i < len).unwrap_or(0))
        };
    }

    /// The active index.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the list is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer hover: update the highlight only.
    ///
    /// Returns `true` if the active index changed. Out-of-range indices are
    /// ignored.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.len || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Map a key to a transition.
    pub fn handle_key(&mut self, code: KeyCode) -> RovingAction {
        if code == KeyCode::Escape {
            return RovingAction::Cancel;
        }
        let Some(active) = self.active else {
            return RovingAction::None;
        };
        let last = self.len - 1;
        let target = match code {
            KeyCode::Down => (active + 1).min(last),
            KeyCode::Up => active.saturating_sub(1),
            KeyCode::Home => 0,
            KeyCode::End => last,
            KeyCode::Enter => return RovingAction::Commit(active),
            _ => return RovingAction::None,
        };
        self.move_to(target)
    }

    fn move_to(&mut self, target: usize) -> RovingAction {
        if self.active == Some(target) {
            return RovingAction::None;
        }
        self.active = Some(target);
        RovingAction::Moved(target)
    }
}
