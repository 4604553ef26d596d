//! `grade-tracker` library crate.
//!
//! The binary (`grades`) is a thin wrapper around this library so that:
//!
//! - record and report logic is testable without spawning processes
//! - the demo scenario can be checked against its exact transcript

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
