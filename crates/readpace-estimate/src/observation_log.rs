//! Observation log with day offsets.

use chrono::NaiveDate;
use readpace_types::{Observation, ReadingStore, SessionId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One observation together with its day offset from the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Date the page count was recorded.
    pub date: NaiveDate,
    /// Cumulative pages read by `date`.
    pub pages: u32,
    /// Whole days since the first observation of the session.
    pub day: i64,
}

/// A session's observations in date order, paired with day offsets.
///
/// Offsets are measured from the first observation, so the first entry is
/// always day 0. Two observations on the same date share an offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationLog {
    observations: Vec<Observation>,
    days: Vec<i64>,
}

impl ObservationLog {
    /// Builds a log from observations already ordered by date ascending.
    #[must_use]
    pub fn new(observations: Vec<Observation>) -> Self {
        let days = observations.first().map_or_else(Vec::new, |first| {
            observations
                .iter()
                .map(|obs| obs.days_since(first.date))
                .collect()
        });
        Self { observations, days }
    }

    /// Loads a session's log from the store.
    ///
    /// A failed lookup yields an empty log; the failure is logged and not
    /// propagated, so callers see it as "no reading data".
    pub fn load<S: ReadingStore>(store: &S, session: SessionId) -> Self {
        match store.read_observations(session) {
            Ok(observations) => {
                debug!(%session, count = observations.len(), "loaded observations");
                Self::new(observations)
            }
            Err(err) => {
                warn!(%session, error = %err, "observations unavailable");
                Self::default()
            }
        }
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the log holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the date of the first observation, the origin of all offsets.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|obs| obs.date)
    }

    /// Returns the cumulative page counts, index-paired with [`days`](Self::days).
    #[must_use]
    pub fn pages(&self) -> Vec<i64> {
        self.observations
            .iter()
            .map(|obs| i64::from(obs.pages))
            .collect()
    }

    /// Returns the day offsets from the first observation.
    #[must_use]
    pub fn days(&self) -> &[i64] {
        &self.days
    }

    /// Returns an iterator over (date, pages, day offset) records.
    pub fn records(&self) -> impl Iterator<Item = DayRecord> + '_ {
        self.observations
            .iter()
            .zip(&self.days)
            .map(|(obs, &day)| DayRecord {
                date: obs.date,
                pages: obs.pages,
                day,
            })
    }
}
