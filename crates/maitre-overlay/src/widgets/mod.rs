#![forbid(unsafe_code)]

//! The three overlay widgets of the console.
//!
//! | Widget            | Panel role | Commit callback        |
//! |-------------------|------------|------------------------|
//! | [`Select`]        | `listbox`  | `on_change(V)`         |
//! | [`ActionMenu`]    | `listbox`  | `on_action(A)`         |
//! | [`DateRangePicker`] | `dialog` | `on_change(DateRange)` |
//!
//! [`DateRange`]: crate::range::DateRange

pub mod action_menu;
pub mod date_range;
mod list;
pub mod select;

pub use action_menu::ActionMenu;
pub use date_range::DateRangePicker;
pub use select::Select;

use maitre_core::event::{KeyCode, KeyEvent};

/// Keys on a focused, closed trigger that open its panel.
pub(crate) fn opens_panel(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Down | KeyCode::Char(' '))
}
