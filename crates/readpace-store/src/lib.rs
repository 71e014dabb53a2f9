//! JSON-file storage of reading sessions for readpace.
//!
//! - [`JsonStore`] - Session files on disk, implementing [`ReadingStore`]
//! - [`SessionRecord`] - One session with its observations and last estimate
//! - [`StoreError`] - Errors from store operations
//!
//! [`ReadingStore`]: readpace_types::ReadingStore

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readpace/readpace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod record;
mod store;

pub use record::SessionRecord;
pub use store::{JsonStore, Result, StoreError};
