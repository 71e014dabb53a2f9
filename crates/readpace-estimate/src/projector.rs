//! Day offset to calendar date projection.

use chrono::{NaiveDate, TimeDelta};
use readpace_types::DATE_FORMAT;

/// Maps day offsets to calendar dates anchored at a session's first
/// observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateProjector {
    origin: NaiveDate,
}

impl DateProjector {
    /// Creates a projector anchored at `origin` (day offset 0).
    #[must_use]
    pub const fn new(origin: NaiveDate) -> Self {
        Self { origin }
    }

    /// Returns the date `offset` whole days after the origin.
    ///
    /// Returns `None` if the result is outside chrono's date range.
    #[must_use]
    pub fn project(&self, offset: i64) -> Option<NaiveDate> {
        TimeDelta::try_days(offset).and_then(|delta| self.origin.checked_add_signed(delta))
    }
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
