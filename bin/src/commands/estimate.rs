//! Estimate command implementation.

use anyhow::{Context, Result};
use readpace_lib::prelude::*;
use serde_json::{Value, json};

use crate::display::print_json;

/// Estimate a session's completion and record the likely date.
///
/// With `json`, a failure reason is also printed as `{"session", "error"}`
/// before the command fails.
pub(crate) fn estimate(store: &JsonStore, session: SessionId, json: bool) -> Result<()> {
    let outcome = Estimator::new(store).estimate(session);

    if json && let Err(reason) = &outcome {
        print_json(&failure_json(session, reason))?;
    }
    let estimate = outcome.with_context(|| format!("Cannot estimate session {session}"))?;

    if json {
        return print_json(&estimate);
    }

    let [likely, earliest, latest] = estimate.formatted();
    println!("Session:  {session}");
    println!("Likely:   {likely}");
    println!("Earliest: {earliest}");
    println!("Latest:   {latest}");
    Ok(())
}

fn failure_json(session: SessionId, reason: &EstimateError) -> Value {
    json!({ "session": session, "error": reason.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_failure_json() {
        let value = failure_json(SessionId::new(4), &EstimateError::InadequateReadingData);
        assert_eq!(value, json!({ "session": 4, "error": "inadequate reading data" }));
    }

    #[test]
    fn test_estimate_without_records_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();
        let session = store.add_session(BookId::new(3), 200, None).unwrap();

        for json in [false, true] {
            let err = estimate(&store, session.id, json).unwrap_err();
            assert_eq!(err.root_cause().to_string(), "inadequate reading data");
        }
    }
}
