//! Sessions command implementation.

use anyhow::{Context, Result};
use readpace_lib::prelude::*;

use crate::display::{percent, print_json};

/// List stored reading sessions with progress and last recorded estimate.
pub(crate) fn list_sessions(store: &JsonStore, book: Option<BookId>, json: bool) -> Result<()> {
    let records: Vec<SessionRecord> = store
        .list()
        .context("Cannot list sessions")?
        .into_iter()
        .filter(|r| book.is_none_or(|b| r.session.book_id == b))
        .collect();

    if json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No reading sessions found.");
        return Ok(());
    }

    println!(
        "{:<8} {:<8} {:<12} {:<12} {:>14} {:<12}",
        "SESSION", "BOOK", "STARTED", "LAST READ", "PROGRESS", "FINISH"
    );
    println!("{}", "-".repeat(71));

    for record in &records {
        let pages = record.latest().map_or(0, |obs| obs.pages);
        let finish = record
            .estimate
            .map_or_else(|| "-".to_string(), |e| format_date(e.projected_finish));
        println!(
            "{:<8} {:<8} {:<12} {:<12} {:>8} {:>4.0}% {:<12}",
            record.session.id,
            record.session.book_id,
            format_date(record.session.start_date),
            format_date(record.last_activity()),
            format!("{}/{}", pages, record.session.target_page),
            percent(pages, record.session.target_page),
            finish
        );
    }

    println!("\nTotal: {} sessions", records.len());
    Ok(())
}
