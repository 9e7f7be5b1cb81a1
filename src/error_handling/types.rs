//! Error type definitions.
//!
//! This module defines the error types and issue categories used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of a single API call.
///
/// A non-success status on its own is not a `FetchError` for listing pages:
/// the body is still handed back so paging can continue with whatever the
/// API returned. Detail lookups turn it into [`FetchError::Status`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network or protocol failure reported by the HTTP client.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The API answered with a non-success status code.
    #[error("API returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be parsed as JSON.
    #[error("Response (status {status}) is not valid JSON: {source}")]
    Json {
        /// HTTP status code of the response
        status: u16,
        /// Parser error
        source: serde_json::Error,
    },

    /// A request URL could not be built from the configured endpoint.
    #[error("Invalid API endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A fixture file could not be read.
    #[error("Failed to read fixture {}: {source}", path.display())]
    Fixture {
        /// Fixture path
        path: PathBuf,
        /// I/O error
        source: std::io::Error,
    },

    /// A fixture file does not contain valid JSON.
    #[error("Fixture {} is not valid JSON: {source}", path.display())]
    FixtureJson {
        /// Fixture path
        path: PathBuf,
        /// Parser error
        source: serde_json::Error,
    },

    /// The detail response has no `Awis.Results.Result.Alexa` object.
    #[error("Detail response has no site data")]
    MissingSiteData,
}

/// Problems with the shape of a single site record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A field every site record must carry is absent or not a scalar.
    #[error("Missing mandatory field `{0}`")]
    MissingField(&'static str),

    /// A rank that is neither null nor a positive integer.
    #[error("Malformed rank value: {0}")]
    MalformedRank(String),
}

/// Errors that end an export run early.
#[derive(Error, Debug)]
pub enum RunError {
    /// The user declined the cost confirmation prompt.
    #[error("Export cancelled at cost confirmation")]
    UserAbort,

    /// A listing page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A listing page has no site list, so paging cannot advance.
    #[error("Top sites page starting at {start} has no site list")]
    MissingSiteList {
        /// 1-based start offset of the page
        start: u64,
    },

    /// Writing or reading CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Issues recovered locally during an export.
///
/// None of these stop the run; they are counted and summarized at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum IssueType {
    /// A site record missing a mandatory field was skipped
    SkippedRecord,
    /// A detail lookup failed and the row was written without enrichment
    EnrichmentFailed,
    /// A country rank entry had an unusable rank or no country code
    MalformedRank,
    /// An API call answered with a non-success status
    NonSuccessStatus,
    /// A listing page came back without any sites
    EmptyPage,
}

impl IssueType {
    /// Human-readable label used in the end-of-run summary.
    pub fn label(self) -> &'static str {
        match self {
            IssueType::SkippedRecord => "Skipped site records",
            IssueType::EnrichmentFailed => "Failed detail lookups",
            IssueType::MalformedRank => "Malformed country ranks",
            IssueType::NonSuccessStatus => "Non-success API responses",
            IssueType::EmptyPage => "Empty listing pages",
        }
    }
}
