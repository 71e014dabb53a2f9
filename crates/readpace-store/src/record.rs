//! Stored session documents.

use chrono::NaiveDate;
use readpace_types::{Observation, ReadingSession, StoredEstimate};
use serde::{Deserialize, Serialize};

/// Everything stored for one reading session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The session itself.
    #[serde(flatten)]
    pub session: ReadingSession,
    /// Observations in date order, ties in insertion order.
    #[serde(default)]
    pub observations: Vec<Observation>,
    /// Last recorded completion estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<StoredEstimate>,
}

impl SessionRecord {
    /// Creates a record with no observations or estimate.
    #[must_use]
    pub const fn new(session: ReadingSession) -> Self {
        Self {
            session,
            observations: Vec::new(),
            estimate: None,
        }
    }

    /// Adds an observation after any existing one on the same or an earlier
    /// date.
    pub fn insert_observation(&mut self, observation: Observation) {
        let at = self
            .observations
            .partition_point(|existing| existing.date <= observation.date);
        self.observations.insert(at, observation);
    }

    /// Returns the most recent observation.
    #[must_use]
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Returns the date the session was last touched: its latest
    /// observation, or the start date if nothing has been logged.
    #[must_use]
    pub fn last_activity(&self) -> NaiveDate {
        self.latest()
            .map_or(self.session.start_date, |obs| obs.date)
    }
}
