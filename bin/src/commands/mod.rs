//! CLI command implementations.

pub(crate) mod add;
pub(crate) mod book;
pub(crate) mod estimate;
pub(crate) mod records;
pub(crate) mod remove;
pub(crate) mod sessions;
