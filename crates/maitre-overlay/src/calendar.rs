#![forbid(unsafe_code)]

//! Month grid for the range picker.
//!
//! The grid is Monday-first and spans four to six week rows depending on the
//! month, so navigating months changes the panel's rendered height. The
//! picker repositions its panel after every navigation for that reason.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::range::RangeDraft;

/// Rendering state of one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Belongs to the displayed month (leading/trailing days do not).
    pub in_month: bool,
    pub is_today: bool,
    /// First day of the draft range.
    pub is_start: bool,
    /// Last day of the draft range.
    pub is_end: bool,
    /// Inside the draft range, inclusive of both ends.
    pub in_range: bool,
}

/// The month currently shown by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// The month containing `day`.
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        Self {
            first: day.with_day(1).unwrap_or(day),
        }
    }

    /// The month to show when a draft opens: the draft's start, else today.
    #[must_use]
    pub fn for_draft(draft: &RangeDraft, today: NaiveDate) -> Self {
        Self::containing(draft.from().unwrap_or(today))
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Header label such as `"May 2024"`.
    #[must_use]
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The previous month.
    #[must_use]
    pub fn prev(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// The next month.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// Number of days in the month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            return 31;
        }
        next.signed_duration_since(self.first).num_days() as u32
    }

    /// Number of week rows in the grid (4 to 6).
    #[must_use]
    pub fn week_count(&self) -> usize {
        let lead = self.first.weekday().num_days_from_monday();
        (lead + self.days_in_month()).div_ceil(7) as usize
    }

    /// Monday-first week rows with per-cell highlight state.
    #[must_use]
    pub fn weeks(&self, draft: &RangeDraft, today: NaiveDate) -> Vec<[DayCell; 7]> {
        let lead = u64::from(self.first.weekday().num_days_from_monday());
        let start = self
            .first
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.first);
        let (range_start, range_end) = (draft.from(), draft.to().or(draft.from()));

        (0..self.week_count())
            .map(|week| {
                std::array::from_fn(|weekday| {
                    let offset = (week * 7 + weekday) as u64;
                    let date = start.checked_add_days(Days::new(offset)).unwrap_or(start);
                    DayCell {
                        date,
                        in_month: date.month() == self.month() && date.year() == self.year(),
                        is_today: date == today,
                        is_start: range_start == Some(date),
                        is_end: range_end == Some(date),
                        in_range: draft.contains(date),
                    }
                })
            })
            .collect()
    }
}
