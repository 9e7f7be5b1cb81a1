//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. The export configs are plain structs as well, so the
//! library can be driven without going through the CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_ATS_ENDPOINT, DEFAULT_ATS_FIXTURE, DEFAULT_AWIS_ENDPOINT, DEFAULT_AWIS_FIXTURE,
    DEFAULT_LOOKUP_INPUT, DEFAULT_LOOKUP_OUTPUT, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_SITES_OUTPUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Export the top 500 sites in Germany
/// top_sites_export top-sites --results 500 --country DE --ats-api-key KEY
///
/// # Same, with per-site detail columns
/// top_sites_export top-sites --results 500 --ats-api-key KEY --awis-api-key KEY2
///
/// # Country ranks for every URL in awis-input.csv
/// top_sites_export lookup --awis-api-key KEY2
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "top_sites_export",
    about = "Exports ranked sites and per-URL country ranks into CSV."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Export to run
    #[command(subcommand)]
    pub command: Command,
}

/// The two export tools.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Page through the top sites listing, one row per site
    #[command(name = "top-sites")]
    TopSites(TopSitesConfig),
    /// Look up country ranks for each URL in an input CSV
    #[command(name = "lookup")]
    Lookup(LookupConfig),
}

/// Configuration for the top sites export.
#[derive(Debug, Clone, Args)]
pub struct TopSitesConfig {
    /// How many results to export
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub results: u64,

    /// Top sites API key
    #[arg(long, alias = "ats_api_key", env = "ATS_API_KEY", hide_env_values = true)]
    pub ats_api_key: String,

    /// Detail API key; when set, every site is enriched with a detail lookup
    #[arg(long, alias = "awis_api_key", env = "AWIS_API_KEY", hide_env_values = true)]
    pub awis_api_key: Option<String>,

    /// Filter top sites by 2-letter country code, e.g. US
    #[arg(long, value_parser = parse_country_code)]
    pub country: Option<String>,

    /// Result to start from (1-based), to resume an earlier export
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub start: Option<u64>,

    /// Read the fixture files instead of calling the API, and skip the cost prompt
    #[arg(long)]
    pub test: bool,

    /// CSV file to append results to
    #[arg(long, default_value = DEFAULT_TOP_SITES_OUTPUT)]
    pub output: PathBuf,

    /// Listing fixture used in test mode
    #[arg(long, default_value = DEFAULT_ATS_FIXTURE)]
    pub ats_fixture: PathBuf,

    /// Detail fixture used in test mode
    #[arg(long, default_value = DEFAULT_AWIS_FIXTURE)]
    pub awis_fixture: PathBuf,

    /// Listing API base URL
    #[arg(long, default_value = DEFAULT_ATS_ENDPOINT)]
    pub ats_endpoint: String,

    /// Detail API base URL
    #[arg(long, default_value = DEFAULT_AWIS_ENDPOINT)]
    pub awis_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

impl TopSitesConfig {
    /// Whether each site gets a detail lookup.
    pub fn enrichment_enabled(&self) -> bool {
        self.awis_api_key.is_some()
    }
}

impl Default for TopSitesConfig {
    fn default() -> Self {
        Self {
            results: 100,
            ats_api_key: String::new(),
            awis_api_key: None,
            country: None,
            start: None,
            test: false,
            output: PathBuf::from(DEFAULT_TOP_SITES_OUTPUT),
            ats_fixture: PathBuf::from(DEFAULT_ATS_FIXTURE),
            awis_fixture: PathBuf::from(DEFAULT_AWIS_FIXTURE),
            ats_endpoint: DEFAULT_ATS_ENDPOINT.to_string(),
            awis_endpoint: DEFAULT_AWIS_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Configuration for the per-URL lookup export.
#[derive(Debug, Clone, Args)]
pub struct LookupConfig {
    /// Detail API key
    #[arg(long, alias = "awis_api_key", env = "AWIS_API_KEY", hide_env_values = true)]
    pub awis_api_key: String,

    /// CSV file listing one URL per row (first column)
    #[arg(long, default_value = DEFAULT_LOOKUP_INPUT)]
    pub input: PathBuf,

    /// CSV file to write results to (overwritten)
    #[arg(long, default_value = DEFAULT_LOOKUP_OUTPUT)]
    pub output: PathBuf,

    /// Read the detail fixture instead of calling the API, and skip the cost prompt
    #[arg(long)]
    pub test: bool,

    /// Detail fixture used in test mode
    #[arg(long, default_value = DEFAULT_AWIS_FIXTURE)]
    pub awis_fixture: PathBuf,

    /// Detail API base URL
    #[arg(long, default_value = DEFAULT_AWIS_ENDPOINT)]
    pub awis_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            awis_api_key: String::new(),
            input: PathBuf::from(DEFAULT_LOOKUP_INPUT),
            output: PathBuf::from(DEFAULT_LOOKUP_OUTPUT),
            test: false,
            awis_fixture: PathBuf::from(DEFAULT_AWIS_FIXTURE),
            awis_endpoint: DEFAULT_AWIS_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Validates a two-letter country code and upper-cases it.
pub fn parse_country_code(value: &str) -> Result<String, String> {
    let code = value.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!(
            "expected a 2-letter country code such as US, got `{value}`"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_country_code() {
        assert_eq!(parse_country_code("us"), Ok("US".to_string()));
        assert_eq!(parse_country_code(" De "), Ok("DE".to_string()));
        assert!(parse_country_code("USA").is_err());
        assert!(parse_country_code("1A").is_err());
        assert!(parse_country_code("").is_err());
    }

    #[test]
    fn test_top_sites_config_default() {
        let config = TopSitesConfig::default();
        assert_eq!(config.results, 100);
        assert_eq!(config.start, None);
        assert!(!config.test);
        assert!(!config.enrichment_enabled());
        assert_eq!(config.output, PathBuf::from("top-sites.csv"));
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_enrichment_enabled_by_detail_key() {
        let config = TopSitesConfig {
            awis_api_key: Some("key".to_string()),
            ..Default::default()
        };
        assert!(config.enrichment_enabled());
    }

    #[test]
    fn test_lookup_config_default() {
        let config = LookupConfig::default();
        assert_eq!(config.input, PathBuf::from("awis-input.csv"));
        assert_eq!(config.output, PathBuf::from("awis-results.csv"));
        assert_eq!(config.awis_endpoint, "https://awis.api.alexa.com");
    }
}
