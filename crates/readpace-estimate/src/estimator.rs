//! Completion-date estimation.

use chrono::{DateTime, NaiveDate, Utc};
use readpace_types::{BookId, ReadingStore, SessionId, StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    DateProjector, ObservationLog, PaceError, fit_pace, format_date, publish, resolve_target,
};

/// Why no estimate could be delivered for a session.
///
/// The display strings are the user-facing reasons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Fewer than two observations are available.
    #[error("inadequate reading data")]
    InadequateReadingData,

    /// The session record or its target page is missing.
    #[error("inadequate book data")]
    InadequateBookData,

    /// Every observation has the same page count.
    #[error("no usable pace data")]
    NoUsablePace,

    /// A projected date falls outside the representable calendar.
    #[error("projected date out of range")]
    DateOutOfRange,

    /// The estimate was computed but could not be recorded.
    #[error("book reading data failure: {0}")]
    Publish(StorageError),
}

impl From<PaceError> for EstimateError {
    fn from(err: PaceError) -> Self {
        match err {
            PaceError::TooFewObservations(_) | PaceError::LengthMismatch { .. } => {
                Self::InadequateReadingData
            }
            PaceError::NoUsablePace => Self::NoUsablePace,
        }
    }
}

/// Projected completion dates for a reading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    /// Most likely completion date, from the overall trend.
    pub likely: NaiveDate,
    /// Earliest plausible completion date.
    pub earliest: NaiveDate,
    /// Latest plausible completion date.
    pub latest: NaiveDate,
}

impl CompletionEstimate {
    /// Returns the likely, earliest and latest dates as `YYYY-MM-DD` strings.
    #[must_use]
    pub fn formatted(&self) -> [String; 3] {
        [
            format_date(self.likely),
            format_date(self.earliest),
            format_date(self.latest),
        ]
    }
}

impl std::fmt::Display for CompletionEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [likely, earliest, latest] = self.formatted();
        write!(f, "{likely} (earliest {earliest}, latest {latest})")
    }
}

/// Outcome of estimating one session of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEstimate {
    /// The session estimated.
    pub session: SessionId,
    /// Date the session started.
    pub start_date: NaiveDate,
    /// Projected dates, or the reason there are none.
    pub outcome: Result<CompletionEstimate, EstimateError>,
}

/// Runs the estimation pipeline against a storage collaborator.
///
/// The estimator holds no state of its own. Each call reads a fresh snapshot
/// of the session from the store.
#[derive(Debug, Clone)]
pub struct Estimator<S> {
    store: S,
}

impl<S: ReadingStore> Estimator<S> {
    /// Creates an estimator over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Estimates a session's completion and records the likely date.
    ///
    /// # Errors
    ///
    /// Returns the reason no estimate can be delivered; see [`EstimateError`].
    pub fn estimate(&self, session: SessionId) -> Result<CompletionEstimate, EstimateError> {
        self.estimate_at(session, Utc::now())
    }

    /// Like [`estimate`](Self::estimate) with an explicit computation time.
    ///
    /// # Errors
    ///
    /// Returns the reason no estimate can be delivered; see [`EstimateError`].
    pub fn estimate_at(
        &self,
        session: SessionId,
        now: DateTime<Utc>,
    ) -> Result<CompletionEstimate, EstimateError> {
        let log = ObservationLog::load(&self.store, session);
        let target =
            resolve_target(&self.store, session).ok_or(EstimateError::InadequateBookData)?;
        let Some(origin) = log.first_date().filter(|_| log.len() >= 2) else {
            debug!(%session, observations = log.len(), "not enough observations");
            return Err(EstimateError::InadequateReadingData);
        };

        let pace = fit_pace(&log.pages(), log.days(), i64::from(target))?;

        let projector = DateProjector::new(origin);
        let project = |offset| projector.project(offset).ok_or(EstimateError::DateOutOfRange);
        let estimate = CompletionEstimate {
            likely: project(pace.likely_day)?,
            earliest: project(pace.earliest_day)?,
            latest: project(pace.latest_day)?,
        };

        publish(&self.store, session, now, estimate.likely)?;
        info!(%session, %estimate, "estimated completion");

        Ok(estimate)
    }

    /// Estimates every session of a book, ordered by start date.
    ///
    /// Per-session failures are carried in each [`SessionEstimate::outcome`].
    ///
    /// # Errors
    ///
    /// Returns an error if the book's sessions cannot be listed.
    pub fn estimate_book(&self, book: BookId) -> StorageResult<Vec<SessionEstimate>> {
        self.estimate_book_at(book, Utc::now())
    }

    /// Like [`estimate_book`](Self::estimate_book) with an explicit
    /// computation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the book's sessions cannot be listed.
    pub fn estimate_book_at(
        &self,
        book: BookId,
        now: DateTime<Utc>,
    ) -> StorageResult<Vec<SessionEstimate>> {
        let mut sessions = self.store.sessions_for_book(book)?;
        sessions.sort_by_key(|s| (s.start_date, s.id));

        Ok(sessions
            .into_iter()
            .map(|s| SessionEstimate {
                session: s.id,
                start_date: s.start_date,
                outcome: self.estimate_at(s.id, now),
            })
            .collect())
    }
}
