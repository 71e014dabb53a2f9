//! Reading-pace model.
//!
//! Pace is expressed as days per page. The global pace is the least-squares
//! slope of day offsets against page counts over the whole log; local paces
//! are the slopes between adjacent observations. Every projection is anchored
//! at the furthest page and latest day observed so far, not at the fitted
//! intercept.

use thiserror::Error;
use tracing::{debug, warn};

/// Errors from [`fit_pace`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceError {
    /// Fewer than two observations; no slope can be fitted.
    #[error("at least two observations are required, got {0}")]
    TooFewObservations(usize),

    /// Page and day sequences differ in length.
    #[error("{pages} page counts but {days} day offsets")]
    LengthMismatch {
        /// Number of page counts.
        pages: usize,
        /// Number of day offsets.
        days: usize,
    },

    /// Every page count is the same, so no pace can be derived.
    #[error("no usable pace data")]
    NoUsablePace,
}

/// Projected completion, in day offsets from the first observation.
///
/// `earliest_day <= likely_day <= latest_day` usually holds but is not
/// guaranteed: the global trend can fall outside the range of local paces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaceEstimate {
    /// Projection from the least-squares trend.
    pub likely_day: i64,
    /// Smallest projection over adjacent-pair paces.
    pub earliest_day: i64,
    /// Largest projection over adjacent-pair paces.
    pub latest_day: i64,
    /// Least-squares pace in days per page.
    pub global_pace: f64,
}

/// Projects the day offset at which `target` pages will be reached.
///
/// `pages` and `days` are index-paired and ordered by date. Adjacent pairs
/// with equal page counts are skipped when computing the bounds.
///
/// # Errors
///
/// Returns an error if fewer than two points are given, the sequences differ
/// in length, or all page counts are equal.
pub fn fit_pace(pages: &[i64], days: &[i64], target: i64) -> Result<PaceEstimate, PaceError> {
    if pages.len() != days.len() {
        return Err(PaceError::LengthMismatch {
            pages: pages.len(),
            days: days.len(),
        });
    }
    if pages.len() < 2 {
        return Err(PaceError::TooFewObservations(pages.len()));
    }

    let max_page = pages.iter().copied().max().unwrap_or_default();
    let max_day = days.iter().copied().max().unwrap_or_default();
    let remaining = (target - max_page) as f64;
    let project = |pace: f64| pace * remaining + max_day as f64;

    let global_pace = least_squares_slope(pages, days).ok_or(PaceError::NoUsablePace)?;
    let likely = project(global_pace);

    let mut bounds: Option<(f64, f64)> = None;
    for (i, (p, d)) in pages.windows(2).zip(days.windows(2)).enumerate() {
        let page_delta = p[1] - p[0];
        if page_delta == 0 {
            warn!(
                index = i,
                pages = p[0],
                "same page count logged twice in a row, skipping pair"
            );
            continue;
        }
        let local = project((d[1] - d[0]) as f64 / page_delta as f64);
        bounds = Some(bounds.map_or((local, local), |(lo, hi)| (lo.min(local), hi.max(local))));
    }
    let (earliest, latest) = bounds.ok_or(PaceError::NoUsablePace)?;

    debug!(
        likely,
        earliest, latest, global_pace, "projected completion day offsets"
    );

    Ok(PaceEstimate {
        likely_day: likely as i64,
        earliest_day: earliest as i64,
        latest_day: latest as i64,
        global_pace,
    })
}

/// Ordinary least-squares slope of `y` against `x`.
///
/// Returns `None` when `x` has no variance.
fn least_squares_slope(x: &[i64], y: &[i64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<i64>() as f64 / n;
    let mean_y = y.iter().sum::<i64>() as f64 / n;

    let (sxy, sxx) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxy, sxx), (&xi, &yi)| {
            let dx = xi as f64 - mean_x;
            (sxy + dx * (yi as f64 - mean_y), sxx + dx * dx)
        });

    (sxx != 0.0).then(|| sxy / sxx)
}
