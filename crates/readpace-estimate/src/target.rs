//! Target page lookup.

use readpace_types::{ReadingStore, SessionId, StorageError};
use tracing::warn;

/// Returns the page count that marks a session as complete.
///
/// `None` means there is no usable session record: it does not exist, could
/// not be read, or has a zero target.
pub fn resolve_target<S: ReadingStore>(store: &S, session: SessionId) -> Option<u32> {
    match store.read_session(session) {
        Ok(record) if record.target_page > 0 => Some(record.target_page),
        Ok(_) => {
            warn!(%session, "session has no target page");
            None
        }
        Err(StorageError::SessionNotFound(_)) => {
            warn!(%session, "no session record");
            None
        }
        Err(err) => {
            warn!(%session, error = %err, "session record unavailable");
            None
        }
    }
}
