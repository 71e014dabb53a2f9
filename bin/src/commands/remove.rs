//! Remove command implementation.

use anyhow::{Context, Result};
use readpace_lib::prelude::*;
use serde_json::json;

use crate::display::print_json;

/// Delete a reading session and its page records.
pub(crate) fn remove_session(store: &JsonStore, session: SessionId, json: bool) -> Result<()> {
    store
        .delete(session)
        .with_context(|| format!("Cannot remove session {session}"))?;

    if json {
        return print_json(&json!({ "session": session, "removed": true }));
    }

    println!("Removed session {session}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_session() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf()).unwrap();
        let session = store.add_session(BookId::new(3), 200, None).unwrap();

        remove_session(&store, session.id, false).unwrap();

        assert!(!store.session_path(session.id).exists());
        let err = remove_session(&store, session.id, false).unwrap_err();
        assert_eq!(err.to_string(), format!("Cannot remove session {}", session.id));
    }
}
