//! Error types for readpace storage collaborators.

use thiserror::Error;

use crate::SessionId;

/// Result type alias for [`ReadingStore`](crate::ReadingStore) operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors reported by a storage collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No reading session with the given id exists.
    #[error("no reading session with id {0}")]
    SessionNotFound(SessionId),

    /// The backing store failed to read or write.
    #[error("{0}")]
    Backend(String),
}

/// Error returned when parsing an invalid identifier string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} id '{value}', expected a non-negative integer")]
pub struct IdParseError {
    pub(crate) kind: &'static str,
    pub(crate) value: String,
}
