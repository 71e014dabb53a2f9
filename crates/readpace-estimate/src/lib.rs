//! Reading-pace model and completion-date estimation for readpace.
//!
//! This crate turns a reading session's observation log into projected
//! completion dates:
//!
//! - [`ObservationLog`] - Observations paired with day offsets from the first entry
//! - [`resolve_target`] - Looks up the page count that marks completion
//! - [`fit_pace`] - Least-squares trend plus local-pace bounds, in day offsets
//! - [`DateProjector`] - Maps day offsets back to calendar dates
//! - [`publish`] - Records the likely finish date with the store
//! - [`Estimator`] - Runs the whole pipeline for a session or a book

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readpace/readpace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod observation_log;
mod pace;
mod projector;
mod publish;
mod target;

#[cfg(test)]
mod testing;

pub use estimator::{CompletionEstimate, EstimateError, Estimator, SessionEstimate};
pub use observation_log::{DayRecord, ObservationLog};
pub use pace::{PaceError, PaceEstimate, fit_pace};
pub use projector::{DateProjector, format_date};
pub use publish::publish;
pub use target::resolve_target;
