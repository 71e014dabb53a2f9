//! Reading observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged data point: how many pages had been read by a given date.
///
/// Page counts are cumulative. They are expected to grow over a session but a
/// decrease (e.g. a corrected entry) is kept as ordinary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Date the page count was recorded.
    pub date: NaiveDate,
    /// Cumulative pages read by `date`.
    pub pages: u32,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(date: NaiveDate, pages: u32) -> Self {
        Self { date, pages }
    }

    /// Returns whole days elapsed from `origin` to this observation.
    #[must_use]
    pub fn days_since(&self, origin: NaiveDate) -> i64 {
        (self.date - origin).num_days()
    }
}
