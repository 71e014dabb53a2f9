//! Benchmark fixtures for readpace.

use chrono::{NaiveDate, TimeDelta};
use readpace_lib::prelude::*;
use tempfile::TempDir;

/// Target page used by every synthetic session.
pub const TARGET_PAGE: u32 = 1_000_000;

/// Builds a synthetic reading log of `len` observations.
///
/// Page counts grow by a varying daily amount and every seventh entry
/// repeats the previous count, so the log includes skipped pairs.
#[must_use]
pub fn synthetic_log(len: usize) -> Vec<Observation> {
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let mut pages = 0u32;

    (0..len)
        .map(|i| {
            if i % 7 != 6 {
                pages += 10 + (i as u32 * 13) % 40;
            }
            Observation::new(origin + TimeDelta::days(i as i64), pages)
        })
        .collect()
}

/// Day offsets and page counts of a synthetic log, as fed to the pace model.
#[must_use]
pub fn synthetic_series(len: usize) -> (Vec<i64>, Vec<i64>) {
    let log = ObservationLog::new(synthetic_log(len));
    (log.pages(), log.days().to_vec())
}

/// A JSON store in a temporary directory holding one synthetic session.
#[derive(Debug)]
pub struct StoreFixture {
    /// Keeps the store directory alive.
    pub dir: TempDir,
    /// The store.
    pub store: JsonStore,
    /// The synthetic session.
    pub session: SessionId,
}

impl StoreFixture {
    /// Creates a store with one session of `len` observations.
    ///
    /// # Panics
    ///
    /// Panics if the temporary store cannot be written.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = JsonStore::new(dir.path().to_path_buf()).expect("open store");
        let session = store
            .add_session(BookId::new(1), TARGET_PAGE, None)
            .expect("add session");

        let mut record = store.load(session.id).expect("load session");
        record.observations = synthetic_log(len);
        store.save(&record).expect("save session");

        Self {
            dir,
            store,
            session: session.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_log_is_ordered() {
        let log = synthetic_log(30);
        assert_eq!(log.len(), 30);
        assert!(log.windows(2).all(|w| w[0].date < w[1].date));
        assert!(log.windows(2).all(|w| w[0].pages <= w[1].pages));
        assert_eq!(log[5].pages, log[6].pages);
    }

    #[test]
    fn test_store_fixture_estimates() {
        let fixture = StoreFixture::new(20);
        assert!(Estimator::new(&fixture.store).estimate(fixture.session).is_ok());
    }
}
