//! Session bookkeeping commands.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use readpace_lib::prelude::*;

use crate::display::print_json;

/// Register a new reading session for a book.
pub(crate) fn add_session(
    store: &JsonStore,
    book: BookId,
    target_page: u32,
    start: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let session = store
        .add_session(book, target_page, start)
        .with_context(|| format!("Cannot add a session for book {book}"))?;

    if json {
        return print_json(&session);
    }

    println!(
        "Added session {} for book {} (target page {}, started {})",
        session.id,
        session.book_id,
        session.target_page,
        format_date(session.start_date)
    );
    Ok(())
}

/// Log the cumulative pages read in a session by a date (default today).
pub(crate) fn add_page(
    store: &JsonStore,
    session: SessionId,
    pages: u32,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let observation = Observation::new(date.unwrap_or_else(|| Local::now().date_naive()), pages);
    store
        .add_observation(session, observation)
        .with_context(|| format!("Cannot add a page record to session {session}"))?;

    if json {
        return print_json(&observation);
    }

    println!(
        "Session {session}: {pages} pages by {}",
        format_date(observation.date)
    );
    Ok(())
}
