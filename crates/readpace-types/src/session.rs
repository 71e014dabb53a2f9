//! Reading sessions and the estimates recorded against them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{BookId, SessionId};

/// One reading of a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSession {
    /// Session identifier.
    pub id: SessionId,
    /// Book being read.
    pub book_id: BookId,
    /// Date the reading started.
    pub start_date: NaiveDate,
    /// Last readable page of the book, the page count that marks completion.
    pub target_page: u32,
}

impl ReadingSession {
    /// Creates a new reading session.
    #[must_use]
    pub const fn new(
        id: SessionId,
        book_id: BookId,
        start_date: NaiveDate,
        target_page: u32,
    ) -> Self {
        Self {
            id,
            book_id,
            start_date,
            target_page,
        }
    }
}

/// A projected finish date as persisted by the estimate publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEstimate {
    /// When the estimate was computed.
    pub computed_at: DateTime<Utc>,
    /// Most likely completion date.
    pub projected_finish: NaiveDate,
}

impl StoredEstimate {
    /// Creates a new stored estimate.
    #[must_use]
    pub const fn new(computed_at: DateTime<Utc>, projected_finish: NaiveDate) -> Self {
        Self {
            computed_at,
            projected_finish,
        }
    }
}
