//! The storage collaborator seam.

use crate::{BookId, Observation, ReadingSession, SessionId, StorageResult, StoredEstimate};

/// Read/write access to reading sessions and their observations.
///
/// The estimator never owns its inputs; it is handed an implementation of
/// this trait at call time. Implementations need no locking for the
/// estimator's sake: the only write is an unconditional overwrite of one
/// session's estimate, so the last writer wins.
pub trait ReadingStore {
    /// Returns a session's observations ordered by date ascending, ties in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the observations cannot be read.
    fn read_observations(&self, session: SessionId) -> StorageResult<Vec<Observation>>;

    /// Returns the session record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SessionNotFound`](crate::StorageError::SessionNotFound)
    /// if no such session exists, or a backend error if it cannot be read.
    fn read_session(&self, session: SessionId) -> StorageResult<ReadingSession>;

    /// Records a projected finish date against a session, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimate cannot be persisted.
    fn write_estimate(&self, session: SessionId, estimate: StoredEstimate) -> StorageResult<()>;

    /// Returns every session of a book, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the sessions cannot be listed.
    fn sessions_for_book(&self, book: BookId) -> StorageResult<Vec<ReadingSession>>;
}

impl<S: ReadingStore + ?Sized> ReadingStore for &S {
    fn read_observations(&self, session: SessionId) -> StorageResult<Vec<Observation>> {
        (**self).read_observations(session)
    }

    fn read_session(&self, session: SessionId) -> StorageResult<ReadingSession> {
        (**self).read_session(session)
    }

    fn write_estimate(&self, session: SessionId, estimate: StoredEstimate) -> StorageResult<()> {
        (**self).write_estimate(session, estimate)
    }

    fn sessions_for_book(&self, book: BookId) -> StorageResult<Vec<ReadingSession>> {
        (**self).sessions_for_book(book)
    }
}
