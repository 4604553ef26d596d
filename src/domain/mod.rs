//! Domain types used throughout the tracker.
//!
//! This module defines:
//!
//! - the per-student record (`StudentRecord`)
//! - an ordered collection of records (`Roster`) and its on-disk form (`RosterFile`)
//! - runtime configuration read from the environment (`TrackerConfig`)

pub mod types;

pub use types::*;
