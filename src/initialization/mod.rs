//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Live or fixture fetchers, depending on test mode

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, init_fetcher};
pub use logger::init_logger_with;
