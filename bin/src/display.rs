//! Display utilities and argument parsing for the readpace CLI.

use anyhow::Result;
use chrono::NaiveDate;
use readpace_lib::DATE_FORMAT;
use serde::Serialize;

/// Parse a `YYYY-MM-DD` command-line date.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Percentage of `target` pages covered by `pages`.
pub(crate) fn percent(pages: u32, target: u32) -> f64 {
    if target == 0 {
        0.0
    } else {
        f64::from(pages) / f64::from(target) * 100.0
    }
}
