//! In-memory [`ReadingStore`] for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::NaiveDate;
use readpace_types::{
    BookId, Observation, ReadingSession, ReadingStore, SessionId, StorageError, StorageResult,
    StoredEstimate,
};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    sessions: HashMap<SessionId, ReadingSession>,
    observations: HashMap<SessionId, Vec<Observation>>,
    estimates: RefCell<HashMap<SessionId, StoredEstimate>>,
    writes: Cell<usize>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_session(mut self, id: u64, book: u64, target_page: u32) -> Self {
        let id = SessionId::new(id);
        let session = ReadingSession::new(id, BookId::new(book), date(2024, 1, 1), target_page);
        self.sessions.insert(id, session);
        self
    }

    pub(crate) fn with_start_date(mut self, id: u64, start: NaiveDate) -> Self {
        if let Some(session) = self.sessions.get_mut(&SessionId::new(id)) {
            session.start_date = start;
        }
        self
    }

    /// Adds observations as (day offset from `origin`, pages) pairs.
    pub(crate) fn with_observations(
        mut self,
        id: u64,
        origin: NaiveDate,
        points: &[(i64, u32)],
    ) -> Self {
        let log = points
            .iter()
            .map(|&(day, pages)| Observation::new(origin + chrono::TimeDelta::days(day), pages))
            .collect();
        self.observations.insert(SessionId::new(id), log);
        self
    }

    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }

    pub(crate) fn stored(&self, id: u64) -> Option<StoredEstimate> {
        self.estimates.borrow().get(&SessionId::new(id)).copied()
    }
}

impl ReadingStore for MemoryStore {
    fn read_observations(&self, session: SessionId) -> StorageResult<Vec<Observation>> {
        if self.fail_reads {
            return Err(StorageError::Backend("connection refused".to_string()));
        }
        Ok(self.observations.get(&session).cloned().unwrap_or_default())
    }

    fn read_session(&self, session: SessionId) -> StorageResult<ReadingSession> {
        if self.fail_reads {
            return Err(StorageError::Backend("connection refused".to_string()));
        }
        self.sessions
            .get(&session)
            .cloned()
            .ok_or(StorageError::SessionNotFound(session))
    }

    fn write_estimate(&self, session: SessionId, estimate: StoredEstimate) -> StorageResult<()> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::Backend("disk full".to_string()));
        }
        self.estimates.borrow_mut().insert(session, estimate);
        Ok(())
    }

    fn sessions_for_book(&self, book: BookId) -> StorageResult<Vec<ReadingSession>> {
        Ok(self
            .sessions
            .values()
            .filter(|s| s.book_id == book)
            .cloned()
            .collect())
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
