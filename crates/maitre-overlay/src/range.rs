#![forbid(unsafe_code)]

//! Two-click date range selection.
//!
//! # States
//!
//! | State      | `from` | `to`  |
//! |------------|--------|-------|
//! | `Empty`    | –      | –     |
//! | `Anchored` | set    | –     |
//! | `Complete` | set    | set, `from <= to` |
//!
//! A day click from `Empty` or `Complete` anchors a new range; a click while
//! anchored completes it, ordering the two dates. Equal dates give a one-day
//! range.
//!
//! # Normalization
//!
//! Committed values are `{from, to}` ISO strings owned by the caller. Every
//! time the picker opens, the draft is reseeded through [`RangeDraft::seed`],
//! which sorts the pair and fills a missing `to` from `from`. An externally
//! inverted pair therefore heals itself on open instead of being rejected.
//! Applying an anchored draft commits a single-day range.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parse a strict ISO `YYYY-MM-DD` date.
///
/// Anything else (wrong shape, impossible date, surrounding whitespace)
/// yields `None`; callers substitute a default instead of surfacing an error.
#[must_use]
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a date as ISO `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A committed date range, as exchanged with the data layer.
///
/// Serializes as `{"from": "YYYY-MM-DD", "to": "YYYY-MM-DD"}` with `""` for
/// an absent bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "IsoRange", into = "IsoRange")]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// The empty range `{from: "", to: ""}`.
    pub const EMPTY: DateRange = DateRange {
        from: None,
        to: None,
    };

    /// A range with both bounds set, as given (not reordered).
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// A one-day range.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Build from ISO strings; malformed or empty strings become absent bounds.
    #[must_use]
    pub fn from_iso(from: &str, to: &str) -> Self {
        Self {
            from: parse_iso_date(from),
            to: parse_iso_date(to),
        }
    }

    /// ISO strings, `""` for absent bounds.
    #[must_use]
    pub fn to_iso(&self) -> (String, String) {
        (
            self.from.map(format_iso_date).unwrap_or_default(),
            self.to.map(format_iso_date).unwrap_or_default(),
        )
    }

    /// Whether neither bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether both bounds are set and `from > to`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(f), Some(t)) if f > t)
    }
}

/// Wire form of [`DateRange`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct IsoRange {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
}

impl From<IsoRange> for DateRange {
    fn from(wire: IsoRange) -> Self {
        DateRange::from_iso(&wire.from, &wire.to)
    }
}

impl From<DateRange> for IsoRange {
    fn from(range: DateRange) -> Self {
        let (from, to) = range.to_iso();
        IsoRange { from, to }
    }
}

/// Uncommitted range selection local to one open picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeDraft {
    #[default]
    Empty,
    Anchored(NaiveDate),
    Complete {
        from: NaiveDate,
        to: NaiveDate,
    },
}

impl RangeDraft {
    /// Seed a draft from a committed range, sorting and normalizing it.
    #[must_use]
    pub fn seed(committed: &DateRange) -> Self {
        match (committed.from, committed.to) {
            (None, None) => Self::Empty,
            (Some(day), None) | (None, Some(day)) => Self::Complete { from: day, to: day },
            (Some(a), Some(b)) => {
                if a > b {
                    tracing::trace!(
                        message = "range.seed.reordered",
                        from = %a,
                        to = %b
                    );
                }
                Self::Complete {
                    from: a.min(b),
                    to: a.max(b),
                }
            }
        }
    }

    /// Apply a day click.
    pub fn click(&mut self, day: NaiveDate) {
        *self = match *self {
            Self::Empty | Self::Complete { .. } => Self::Anchored(day),
            Self::Anchored(anchor) => Self::Complete {
                from: anchor.min(day),
                to: anchor.max(day),
            },
        };
    }

    /// The range to commit on Apply, or `None` when nothing is anchored.
    #[must_use]
    pub fn apply(&self) -> Option<DateRange> {
        match *self {
            Self::Empty => None,
            Self::Anchored(day) => Some(DateRange::single(day)),
            Self::Complete { from, to } => Some(DateRange::new(from, to)),
        }
    }

    /// Reset to empty; the returned empty range is committed immediately.
    pub fn clear(&mut self) -> DateRange {
        *self = Self::Empty;
        DateRange::EMPTY
    }

    /// Start of the draft, if any.
    #[must_use]
    pub const fn from(&self) -> Option<NaiveDate> {
        match *self {
            Self::Empty => None,
            Self::Anchored(day) => Some(day),
            Self::Complete { from, .. } => Some(from),
        }
    }

    /// End of the draft, if complete.
    #[must_use]
    pub const fn to(&self) -> Option<NaiveDate> {
        match *self {
            Self::Complete { to, .. } => Some(to),
            Self::Empty | Self::Anchored(_) => None,
        }
    }

    /// The draft as a raw `{from, to}` pair (no single-day fill).
    #[must_use]
    pub const fn as_range(&self) -> DateRange {
        DateRange {
            from: self.from(),
            to: self.to(),
        }
    }

    /// Whether `day` lies within the draft (inclusive).
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        match *self {
            Self::Empty => false,
            Self::Anchored(anchor) => anchor == day,
            Self::Complete { from, to } => from <= day && day <= to,
        }
    }
}

/// Quick-pick ranges offered next to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePreset {
    Today,
    Last7Days,
    ThisMonth,
}

impl RangePreset {
    /// All presets in display order.
    pub const ALL: [RangePreset; 3] = [Self::Today, Self::Last7Days, Self::ThisMonth];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::ThisMonth => "This month",
        }
    }

    /// Resolve against `today` into a draft.
    #[must_use]
    pub fn draft(self, today: NaiveDate) -> RangeDraft {
        let (from, to) = match self {
            Self::Today => (today, today),
            Self::Last7Days => (today.checked_sub_days(Days::new(6)).unwrap_or(today), today),
            Self::ThisMonth => (today.with_day(1).unwrap_or(today), today),
        };
        RangeDraft::seed(&DateRange::new(from, to))
    }
}
