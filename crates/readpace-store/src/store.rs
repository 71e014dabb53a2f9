//! File-backed session storage.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use readpace_types::{
    BookId, Observation, ReadingSession, ReadingStore, SessionId, StorageError, StorageResult,
    StoredEstimate,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::SessionRecord;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse session file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize session: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Session not found.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// A session needs a positive target page.
    #[error("Target page must be greater than zero")]
    InvalidTarget,
}

impl From<StoreError> for StorageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SessionNotFound(id) => Self::SessionNotFound(id),
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Stores reading sessions as JSON files.
///
/// Sessions live in `<base>/sessions/<id>.json`. Every write replaces the
/// whole file, so concurrent writers to one session resolve as last writer
/// wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Directory for session files.
    sessions_path: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `base_path`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let sessions_path = base_path.join("sessions");

        for path in [&base_path, &sessions_path] {
            if !path.exists() {
                fs::create_dir_all(path).map_err(|e| StoreError::CreateDir {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }
        debug!(path = %base_path.display(), "opened session store");

        Ok(Self { sessions_path })
    }

    /// Returns the default location of the store.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/readpace/`
    /// - macOS: `~/Library/Application Support/readpace/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\readpace\`
    ///
    /// Falls back to `~/.readpace/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "readpace").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Opens the store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the path to a session's file.
    #[must_use]
    pub fn session_path(&self, id: SessionId) -> PathBuf {
        self.sessions_path.join(format!("{id}.json"))
    }

    /// Registers a new reading session and returns it.
    ///
    /// The id is one past the highest id with a session file, whether or not
    /// that file parses. `start_date` defaults to today.
    ///
    /// # Errors
    ///
    /// Returns an error if `target_page` is zero or the session cannot be
    /// written.
    pub fn add_session(
        &self,
        book: BookId,
        target_page: u32,
        start_date: Option<NaiveDate>,
    ) -> Result<ReadingSession> {
        if target_page == 0 {
            return Err(StoreError::InvalidTarget);
        }

        let id = self
            .stored_ids()?
            .into_iter()
            .max()
            .map_or(SessionId::new(1), |last| last.next());
        let start = start_date.unwrap_or_else(|| Local::now().date_naive());
        let session = ReadingSession::new(id, book, start, target_page);

        self.save(&SessionRecord::new(session.clone()))?;
        debug!(%id, %book, target_page, "added session");
        Ok(session)
    }

    /// Logs cumulative pages read by `date` for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or cannot be updated.
    pub fn add_observation(&self, id: SessionId, observation: Observation) -> Result<()> {
        let mut record = self.load(id)?;
        record.insert_observation(observation);
        self.save(&record)
    }

    /// Writes a session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written to disk.
    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let path = self.session_path(record.session.id);
        let json = serde_json::to_string_pretty(record)?;

        fs::write(&path, json).map_err(|e| StoreError::WriteFile { path, source: e })
    }

    /// Loads a session record.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file is missing or cannot be read or
    /// parsed.
    pub fn load(&self, id: SessionId) -> Result<SessionRecord> {
        let path = self.session_path(id);

        if !path.exists() {
            return Err(StoreError::SessionNotFound(id));
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::ParseJson { path, source: e })
    }

    /// Lists all session records, ordered by id.
    ///
    /// Files that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the sessions directory cannot be read.
    pub fn list(&self) -> Result<Vec<SessionRecord>> {
        let entries = fs::read_dir(&self.sessions_path).map_err(|e| StoreError::ReadDir {
            path: self.sessions_path.clone(),
            source: e,
        })?;

        let mut records = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadDir {
                path: self.sessions_path.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path).map_err(|e| StoreError::ReadFile {
                    path: path.clone(),
                    source: e,
                })?;

                match serde_json::from_str::<SessionRecord>(&content) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping unreadable session file");
                    }
                }
            }
        }

        records.sort_by_key(|r| r.session.id);

        Ok(records)
    }

    /// Ids of every `<id>.json` file in the sessions directory.
    fn stored_ids(&self) -> Result<Vec<SessionId>> {
        let entries = fs::read_dir(&self.sessions_path).map_err(|e| StoreError::ReadDir {
            path: self.sessions_path.clone(),
            source: e,
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadDir {
                path: self.sessions_path.clone(),
                source: e,
            })?;
            let path = entry.path();
            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|_| path.extension().is_some_and(|ext| ext == "json"))
                .and_then(|stem| stem.parse::<SessionId>().ok());
            ids.extend(id);
        }
        Ok(ids)
    }

    /// Deletes a session and everything logged against it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist or cannot be deleted.
    pub fn delete(&self, id: SessionId) -> Result<()> {
        let path = self.session_path(id);

        if !path.exists() {
            return Err(StoreError::SessionNotFound(id));
        }

        fs::remove_file(&path).map_err(|e| StoreError::DeleteFile { path, source: e })
    }
}

impl ReadingStore for JsonStore {
    fn read_observations(&self, session: SessionId) -> StorageResult<Vec<Observation>> {
        Ok(self.load(session)?.observations)
    }

    fn read_session(&self, session: SessionId) -> StorageResult<ReadingSession> {
        Ok(self.load(session)?.session)
    }

    fn write_estimate(&self, session: SessionId, estimate: StoredEstimate) -> StorageResult<()> {
        let mut record = self.load(session)?;
        record.estimate = Some(estimate);
        Ok(self.save(&record)?)
    }

    fn sessions_for_book(&self, book: BookId) -> StorageResult<Vec<ReadingSession>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.session.book_id == book)
            .map(|r| r.session)
            .collect())
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".readpace")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn open() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_store_creation() {
        let (temp_dir, store) = open();

        assert!(temp_dir.path().join("sessions").is_dir());
        assert!(store.session_path(SessionId::new(1)).starts_with(temp_dir.path()));
    }

    #[test]
    fn test_add_session_allocates_ids() {
        let (_dir, store) = open();

        let first = store.add_session(BookId::new(5), 300, Some(date(1, 2))).unwrap();
        let second = store.add_session(BookId::new(5), 300, None).unwrap();

        assert_eq!(first.id, SessionId::new(1));
        assert_eq!(second.id, SessionId::new(2));
        assert_eq!(first.start_date, date(1, 2));
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_add_session_rejects_zero_target() {
        let (_dir, store) = open();

        let result = store.add_session(BookId::new(5), 0, None);
        assert!(matches!(result, Err(StoreError::InvalidTarget)));
    }

    #[test]
    fn test_add_observation_and_read_back() {
        let (_dir, store) = open();
        let session = store.add_session(BookId::new(5), 300, None).unwrap();

        store
            .add_observation(session.id, Observation::new(date(3, 4), 40))
            .unwrap();
        store
            .add_observation(session.id, Observation::new(date(3, 1), 10))
            .unwrap();

        let observations = store.read_observations(session.id).unwrap();
        assert_eq!(
            observations,
            vec![
                Observation::new(date(3, 1), 10),
                Observation::new(date(3, 4), 40)
            ]
        );
    }

    #[test]
    fn test_missing_session() {
        let (_dir, store) = open();
        let id = SessionId::new(77);

        assert!(matches!(store.load(id), Err(StoreError::SessionNotFound(_))));
        assert!(matches!(
            store.add_observation(id, Observation::new(date(1, 1), 1)),
            Err(StoreError::SessionNotFound(_))
        ));
        assert_eq!(
            store.read_session(id),
            Err(StorageError::SessionNotFound(id))
        );
    }

    #[test]
    fn test_write_estimate() {
        let (_dir, store) = open();
        let session = store.add_session(BookId::new(5), 300, None).unwrap();
        let estimate = StoredEstimate::new(Utc::now(), date(9, 30));

        store.write_estimate(session.id, estimate).unwrap();
        assert_eq!(store.load(session.id).unwrap().estimate, Some(estimate));

        let missing = store.write_estimate(SessionId::new(99), estimate);
        assert_eq!(missing, Err(StorageError::SessionNotFound(SessionId::new(99))));
    }

    #[test]
    fn test_sessions_for_book() {
        let (_dir, store) = open();
        store.add_session(BookId::new(1), 100, None).unwrap();
        store.add_session(BookId::new(2), 200, None).unwrap();
        store.add_session(BookId::new(1), 150, None).unwrap();

        let sessions = store.sessions_for_book(BookId::new(1)).unwrap();
        let targets: Vec<_> = sessions.iter().map(|s| s.target_page).collect();
        assert_eq!(targets, vec![100, 150]);
    }

    #[test]
    fn test_corrupt_file_is_skipped() {
        let (_dir, store) = open();
        store.add_session(BookId::new(1), 100, None).unwrap();
        fs::write(store.session_path(SessionId::new(2)), "{ not json").unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
        assert!(matches!(
            store.load(SessionId::new(2)),
            Err(StoreError::ParseJson { .. })
        ));
        assert!(matches!(
            store.read_session(SessionId::new(2)),
            Err(StorageError::Backend(_))
        ));
    }

    #[test]
    fn test_add_session_skips_id_of_corrupt_file() {
        let (_dir, store) = open();
        store.add_session(BookId::new(1), 100, None).unwrap();
        let corrupt = store.session_path(SessionId::new(2));
        fs::write(&corrupt, "{ not json").unwrap();

        let session = store.add_session(BookId::new(1), 100, None).unwrap();

        assert_eq!(session.id, SessionId::new(3));
        assert_eq!(fs::read_to_string(&corrupt).unwrap(), "{ not json");
    }

    #[test]
    fn test_delete_session() {
        let (_dir, store) = open();
        let session = store.add_session(BookId::new(1), 100, None).unwrap();

        store.delete(session.id).unwrap();
        assert!(matches!(
            store.delete(session.id),
            Err(StoreError::SessionNotFound(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_session_path() {
        let (_dir, store) = open();
        let path = store.session_path(SessionId::new(12));

        assert!(path.to_string_lossy().contains("sessions"));
        assert!(path.to_string_lossy().ends_with("12.json"));
    }
}
