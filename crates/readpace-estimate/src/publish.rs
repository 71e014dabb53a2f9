//! Estimate publishing.

use chrono::{DateTime, NaiveDate, Utc};
use readpace_types::{ReadingStore, SessionId, StoredEstimate};
use tracing::{debug, error};

use crate::EstimateError;

/// Records the likely finish date against a session.
///
/// There is no retry. A failed write is returned as
/// [`EstimateError::Publish`] so that an estimate which was not recorded is
/// never reported as a success.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn publish<S: ReadingStore>(
    store: &S,
    session: SessionId,
    computed_at: DateTime<Utc>,
    likely: NaiveDate,
) -> Result<(), EstimateError> {
    store
        .write_estimate(session, StoredEstimate::new(computed_at, likely))
        .map_err(|err| {
            error!(%session, error = %err, "failed to record estimate");
            EstimateError::Publish(err)
        })?;
    debug!(%session, %likely, "recorded estimate");
    Ok(())
}
