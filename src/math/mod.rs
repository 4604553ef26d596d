//! Numerical helpers.
//!
//! - arithmetic mean over a score slice (`mean`)

pub mod mean;

pub use mean::*;
