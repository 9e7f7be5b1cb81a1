//! Main application modules.
//!
//! This module provides the cost prompt, lookup input reading, progress
//! logging and statistics printing used by the exports.

pub mod confirm;
pub mod input;
pub mod logging;
pub mod statistics;

// Re-export public API
pub use confirm::{ask_yes_no, confirm_cost, estimate_cost, estimate_lookup_cost};
pub use input::read_url_list;
pub use logging::log_progress;
pub use statistics::print_export_statistics;
