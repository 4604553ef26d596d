//! Reporting utilities: per-student reports and roster summaries.

pub mod format;

pub use format::*;
