#![forbid(unsafe_code)]

//! Date range picker.
//!
//! The trigger shows the committed range; the panel is a content-sized
//! dialog holding a month grid, presets, and Apply/Clear. Every open reseeds
//! the draft from the committed value, so an abandoned draft never leaks into
//! the next session and an inverted committed pair is shown sorted.
//!
//! Month navigation changes the grid's row count and therefore the panel's
//! height; the picker places the panel again after each navigation.

use std::fmt;

use chrono::NaiveDate;

use maitre_core::element::ElementId;
use maitre_core::event::{GlobalEvent, KeyCode, KeyEvent, PointerEvent};
use maitre_core::host::PanelRole;
use maitre_core::surface::Surface;

use crate::aria::TriggerAria;
use crate::calendar::{CalendarMonth, DayCell};
use crate::config::OverlayConfig;
use crate::dismiss::{CloseReason, OpenCause};
use crate::overlay::{Overlay, OverlayOutcome};
use crate::placement::PanelPlacement;
use crate::range::{DateRange, RangeDraft, RangePreset, format_iso_date};

/// Default panel width.
pub const DEFAULT_MIN_WIDTH: f64 = 320.0;
/// Height assumed before the panel is first measured.
pub const DEFAULT_ESTIMATED_HEIGHT: f64 = 360.0;

type ChangeFn = Box<dyn FnMut(DateRange)>;

/// A two-click date range picker.
pub struct DateRangePicker {
    overlay: Overlay,
    value: DateRange,
    draft: RangeDraft,
    /// Month chosen by the last open or navigation; `None` until then.
    month: Option<CalendarMonth>,
    today: Option<NaiveDate>,
    placeholder: String,
    on_change: Option<ChangeFn>,
}

impl DateRangePicker {
    pub fn new(surface: Surface, trigger: ElementId) -> Self {
        let config = OverlayConfig::default();
        let overlay = Overlay::new(surface, trigger, PanelRole::Dialog)
            .with_options(config.date_range_options())
            .with_estimate(config.date_range_estimate());
        Self {
            overlay,
            value: DateRange::EMPTY,
            draft: RangeDraft::Empty,
            month: None,
            today: None,
            placeholder: String::new(),
            on_change: None,
        }
    }

    /// Apply `[placement]` and `[date_range]` from a config.
    #[must_use]
    pub fn with_config(mut self, config: &OverlayConfig) -> Self {
        self.overlay.set_options(config.date_range_options());
        self.overlay.set_estimate(config.date_range_estimate());
        self
    }

    /// Set the initial committed value.
    #[must_use]
    pub fn value(mut self, value: DateRange) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(DateRange) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn min_width(mut self, width: f64) -> Self {
        let options = self.overlay.options().min_width(width);
        self.overlay.set_options(options);
        self
    }

    #[must_use]
    pub fn offset_x(mut self, offset_x: f64) -> Self {
        let options = self.overlay.options().offset_x(offset_x);
        self.overlay.set_options(options);
        self
    }

    /// Pin "today" instead of reading the local clock.
    #[must_use]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// The committed value.
    pub fn current(&self) -> DateRange {
        self.value
    }

    /// The uncommitted selection of the open session.
    pub fn draft(&self) -> RangeDraft {
        self.draft
    }

    /// The month on display. Before the first open this is the month
    /// containing today.
    pub fn month(&self) -> CalendarMonth {
        self.month.unwrap_or_else(|| CalendarMonth::containing(self.resolve_today()))
    }

    /// Replace the committed value without notifying.
    pub fn set_value(&mut self, value: DateRange) {
        self.value = value;
    }

    pub fn set_disabled(&mut self, disabled: bool) -> Option<CloseReason> {
        self.overlay.set_disabled(disabled)
    }

    /// Trigger text such as `"2024-05-03 – 2024-05-10"`, else the placeholder.
    pub fn label(&self) -> String {
        match (self.value.from, self.value.to) {
            (None, None) => self.placeholder.clone(),
            (Some(day), None) | (None, Some(day)) => format_iso_date(day),
            (Some(from), Some(to)) if from == to => format_iso_date(from),
            (Some(from), Some(to)) => {
                format!("{} – {}", format_iso_date(from), format_iso_date(to))
            }
        }
    }

    /// Open the panel, reseeding the draft from the committed value.
    pub fn open(&mut self, cause: OpenCause) -> bool {
        if self.overlay.is_open() || self.overlay.is_disabled() {
            return false;
        }
        self.draft = RangeDraft::seed(&self.value);
        self.month = Some(CalendarMonth::for_draft(&self.draft, self.resolve_today()));
        self.overlay.open(cause)
    }

    pub fn close(&mut self, reason: CloseReason) -> Option<CloseReason> {
        self.overlay.close(reason)
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
        !self.is_open() && super::opens_panel(key) && self.open(OpenCause::Keyboard)
    }

    /// Key pressed inside the panel: Enter applies, Escape cancels.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.apply();
            }
            KeyCode::Escape => {
                self.overlay.close(CloseReason::Escape);
            }
            _ => {}
        }
    }

    /// Click on a day cell.
    pub fn click_day(&mut self, day: NaiveDate) {
        if self.is_open() {
            self.draft.click(day);
            self.overlay.invalidate();
        }
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) {
        self.navigate(self.month().prev());
    }

    /// Show the next month.
    pub fn next_month(&mut self) {
        self.navigate(self.month().next());
    }

    /// Commit the draft. Returns `false` when closed or nothing is anchored.
    pub fn apply(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.draft.apply() {
            Some(range) => {
                self.commit(range);
                true
            }
            None => false,
        }
    }

    /// Clear and commit the empty range. Returns `false` when closed, leaving
    /// the value untouched.
    pub fn clear(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        let range = self.draft.clear();
        self.commit(range);
        true
    }

    /// Commit a preset range.
    pub fn apply_preset(&mut self, preset: RangePreset) {
        if !self.is_open() {
            return;
        }
        self.draft = preset.draft(self.resolve_today());
        self.apply();
    }

    /// Week rows of the displayed month.
    pub fn weeks(&self) -> Vec<[DayCell; 7]> {
        self.month().weeks(&self.draft, self.resolve_today())
    }

    pub fn handle_global(&mut self, event: &GlobalEvent) -> OverlayOutcome {
        self.overlay.handle_global(event)
    }

    pub fn trigger_aria(&self) -> TriggerAria {
        self.overlay.trigger_aria()
    }

    /// Measure the panel and place it again, e.g. after the host re-rendered
    /// it at a different size.
    pub fn invalidate(&mut self) -> Option<PanelPlacement> {
        self.overlay.invalidate()
    }

    fn navigate(&mut self, month: CalendarMonth) {
        if !self.is_open() {
            return;
        }
        self.month = Some(month);
        self.overlay.invalidate();
    }

    fn commit(&mut self, range: DateRange) {
        if self.overlay.close(CloseReason::Commit).is_none() {
            return;
        }
        tracing::trace!(
            message = "date_range.commit",
            id = self.overlay.id().get(),
            from = ?range.from,
            to = ?range.to
        );
        self.value = range;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(range);
        }
    }

    fn resolve_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("overlay", &self.overlay)
            .field("value", &self.value)
            .field("draft", &self.draft)
            .field("month", &self.month())
            .finish_non_exhaustive()
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
