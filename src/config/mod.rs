//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, pricing, JSON keys, defaults)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    parse_country_code, Cli, Command, LogFormat, LogLevel, LookupConfig, TopSitesConfig,
};
