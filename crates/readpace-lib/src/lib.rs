//! Reading-pace estimation for a personal library catalog.
//!
//! This is a facade crate that re-exports functionality from the readpace
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use readpace_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonStore::with_default_path()?;
//!     let estimator = Estimator::new(&store);
//!
//!     match estimator.estimate(SessionId::new(1)) {
//!         Ok(estimate) => println!("Finish around {estimate}"),
//!         Err(reason) => println!("{reason}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readpace/readpace/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use readpace_types::*;

// Re-export estimation
pub use readpace_estimate::{
    CompletionEstimate, DateProjector, DayRecord, EstimateError, Estimator, ObservationLog,
    PaceError, PaceEstimate, SessionEstimate, fit_pace, format_date, publish, resolve_target,
};

// Re-export storage
#[cfg(feature = "store")]
pub use readpace_store::{JsonStore, SessionRecord, StoreError};

/// Prelude module for convenient imports.
///
/// ```
/// use readpace_lib::prelude::*;
/// ```
pub mod prelude {
    pub use readpace_types::{
        BookId, DATE_FORMAT, Observation, ReadingSession, ReadingStore, SessionId, StorageError,
        StoredEstimate,
    };

    pub use readpace_estimate::{
        CompletionEstimate, DayRecord, EstimateError, Estimator, ObservationLog, SessionEstimate,
        format_date,
    };

    #[cfg(feature = "store")]
    pub use readpace_store::{JsonStore, SessionRecord, StoreError};
}
