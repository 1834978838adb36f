#![forbid(unsafe_code)]

//! Accessibility attributes derived from overlay state.
//!
//! Renderers copy these values onto the trigger, the panel and each entry.
//! They are recomputed from state on every call and never stored.

use maitre_core::element::ElementId;
use maitre_core::host::PanelRole;

use crate::placement::Side;

/// Attributes for the trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerAria {
    /// `aria-haspopup`: `"listbox"` or `"dialog"`.
    pub haspopup: &'static str,
    /// `aria-expanded`.
    pub expanded: bool,
    /// `aria-controls`: the mounted panel while open.
    pub controls: Option<ElementId>,
    /// `aria-disabled`.
    pub disabled: bool,
}

/// Attributes for the mounted panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAria {
    pub role: &'static str,
    /// `aria-labelledby`: the trigger.
    pub labelled_by: ElementId,
    /// `data-side`.
    pub side: Side,
}

impl PanelAria {
    pub(crate) fn new(role: PanelRole, trigger: ElementId, side: Side) -> Self {
        Self {
            role: role.as_str(),
            labelled_by: trigger,
            side,
        }
    }
}

/// Attributes for one entry of a list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionAria {
    /// Always `"option"`.
    pub role: &'static str,
    /// `aria-selected`; always `false` in action menus.
    pub selected: bool,
    /// Highlighted by roving focus or hover.
    pub active: bool,
}
