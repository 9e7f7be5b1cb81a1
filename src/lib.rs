//! top_sites_export library: ranking API to CSV exports
//!
//! This library pages through the paid "top sites" ranking listing, optionally
//! enriches every site with a per-URL detail lookup, and writes flat CSV rows.
//! A second export looks up a list of URLs and writes their country ranks.
//!
//! # Example
//!
//! ```no_run
//! use top_sites_export::{run_top_sites, TopSitesConfig};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TopSitesConfig {
//!     results: 150,
//!     ats_api_key: "my-key".to_string(),
//!     test: true,
//!     ..Default::default()
//! };
//!
//! let report = run_top_sites(&config).await?;
//! println!("Wrote {} rows with {} requests", report.rows_written, report.requests);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
mod run;

// Re-export public API
pub use app::{ask_yes_no, confirm_cost, estimate_cost, estimate_lookup_cost, read_url_list};
pub use config::{Cli, Command, LogFormat, LogLevel, LookupConfig, TopSitesConfig};
pub use error_handling::{IssueStats, IssueType, RunError};
pub use run::{export_lookups, export_top_sites, run_lookup, run_top_sites, ExportReport};
