//! Records command implementation.
//!
//! Shows the dated page counts logged for a session together with the day
//! offsets the estimator works from.

use anyhow::{Context, Result};
use readpace_lib::prelude::*;

use crate::display::{percent, print_json};

/// Print a session's observations as (date, pages, day) rows.
pub(crate) fn show_records(store: &JsonStore, session: SessionId, json: bool) -> Result<()> {
    let record = store
        .load(session)
        .with_context(|| format!("Cannot load session {session}"))?;
    let log = ObservationLog::new(record.observations.clone());

    if json {
        let records: Vec<DayRecord> = log.records().collect();
        return print_json(&records);
    }

    println!(
        "Session {} (book {}), target page {}",
        record.session.id, record.session.book_id, record.session.target_page
    );

    if log.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    println!("\n{:<12} {:>8} {:>6}", "DATE", "PAGES", "DAY");
    println!("{}", "-".repeat(28));
    for row in log.records() {
        println!(
            "{:<12} {:>8} {:>6}",
            format_date(row.date),
            row.pages,
            row.day
        );
    }

    if let Some(latest) = record.latest() {
        println!(
            "\nProgress: {}/{} pages ({:.1}%)",
            latest.pages,
            record.session.target_page,
            percent(latest.pages, record.session.target_page)
        );
    }
    Ok(())
}
