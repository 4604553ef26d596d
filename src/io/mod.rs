//! Input/output helpers.
//!
//! - roster JSON read/write (`roster`)
//! - CSV summary export (`export`)

pub mod export;
pub mod roster;

pub use export::*;
pub use roster::*;
