//! Error handling and export issue tracking.
//!
//! This module provides:
//! - Error type definitions for initialization, API calls, record shape and runs
//! - Counters for issues that are recovered without stopping the export
//!
//! Only [`RunError`] ends a run early. [`ShapeError`]s stay with the record
//! being built and are tallied as [`IssueType`]s.

mod stats;
mod types;

// Re-export public API
pub use stats::IssueStats;
pub use types::{FetchError, InitializationError, IssueType, RunError, ShapeError};
