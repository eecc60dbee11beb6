//! Error currency for the crate.
//!
//! There is no typed taxonomy here: the only failure the program can see is
//! the output write, which is reported as-is.

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
