//! Core types for the readpace reading-pace estimator.
//!
//! This crate provides the fundamental data structures used throughout readpace:
//!
//! - [`SessionId`] / [`BookId`] - Identifiers for reading sessions and books
//! - [`Observation`] - A logged (date, cumulative pages) data point
//! - [`ReadingSession`] - One reading of a book, with its target page
//! - [`StoredEstimate`] - The projected finish date recorded against a session
//! - [`ReadingStore`] - Storage collaborator the estimator reads from and writes to

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readpace/readpace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod ids;
mod observation;
mod session;
mod store;

pub use error::{IdParseError, StorageError, StorageResult};
pub use ids::{BookId, SessionId};
pub use observation::Observation;
pub use session::{ReadingSession, StoredEstimate};
pub use store::ReadingStore;

/// Date format used for every calendar date readpace prints or parses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
