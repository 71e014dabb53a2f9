//! Book command implementation.
//!
//! Estimates every reading session of a book, oldest first.

use anyhow::{Context, Result};
use readpace_lib::prelude::*;
use serde_json::json;

use crate::display::print_json;

/// Estimate all sessions of a book.
pub(crate) fn estimate_book(store: &JsonStore, book: BookId, json: bool) -> Result<()> {
    let results = Estimator::new(store)
        .estimate_book(book)
        .with_context(|| format!("Cannot list sessions of book {book}"))?;

    if json {
        let rows: Vec<_> = results
            .iter()
            .map(|r| match &r.outcome {
                Ok(estimate) => json!({
                    "session": r.session,
                    "start_date": r.start_date,
                    "estimate": estimate,
                }),
                Err(reason) => json!({
                    "session": r.session,
                    "start_date": r.start_date,
                    "error": reason.to_string(),
                }),
            })
            .collect();
        return print_json(&json!({ "book": book, "sessions": rows }));
    }

    if results.is_empty() {
        println!("No reading sessions for book {book}.");
        return Ok(());
    }

    println!(
        "{:<8} {:<12} {:<12} {:<12} {:<12}",
        "SESSION", "STARTED", "LIKELY", "EARLIEST", "LATEST"
    );
    println!("{}", "-".repeat(60));

    for result in &results {
        let started = format_date(result.start_date);
        match &result.outcome {
            Ok(estimate) => {
                let [likely, earliest, latest] = estimate.formatted();
                println!(
                    "{:<8} {:<12} {:<12} {:<12} {:<12}",
                    result.session, started, likely, earliest, latest
                );
            }
            Err(reason) => {
                println!("{:<8} {:<12} {}", result.session, started, reason);
            }
        }
    }

    println!("\nTotal: {} sessions", results.len());
    Ok(())
}
