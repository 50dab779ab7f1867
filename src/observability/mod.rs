//! Operator-visible diagnostics.
//!
//! Load failures are logged before the error propagates, so a broken
//! fixture is visible even when the caller swallows the error at a
//! presentation boundary.

mod logger;

pub use logger::{Level, Logger};
