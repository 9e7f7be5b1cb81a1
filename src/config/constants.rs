//! Configuration constants.
//!
//! Endpoints, JSON keys, pricing and defaults used throughout the application.

/// Top sites (ATS) listing endpoint.
pub const DEFAULT_ATS_ENDPOINT: &str = "https://ats.api.alexa.com";
/// Per-URL detail (AWIS) endpoint.
pub const DEFAULT_AWIS_ENDPOINT: &str = "https://awis.api.alexa.com";
/// Path of the API under both endpoints.
pub const API_PATH: &str = "/api";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Response groups requested for each detail lookup.
pub const AWIS_RESPONSE_GROUPS: &str = "AdultContent,SiteData,Categories,RankByCountry";

/// The listing API returns at most this many sites per request.
pub const MAX_PAGE_SIZE: u64 = 100;

// Pricing (USD)
/// Cost of one listed site.
pub const ATS_COST_PER_RESULT: f64 = 0.0025;
/// Cost of one detail lookup ($0.036 per ten).
pub const AWIS_COST_PER_LOOKUP: f64 = 0.0036;

// Country rank entry keys
/// Country code attribute of a rank entry
pub const COUNTRY_CODE_KEY: &str = "@Code";
/// Rank field of a rank entry
pub const RANK_KEY: &str = "Rank";
/// Country code filling the UK rank column
pub const UK_COUNTRY_CODE: &str = "GB";
/// Country code filling the US rank column
pub const US_COUNTRY_CODE: &str = "US";

// Default files
/// Top sites output, appended to
pub const DEFAULT_TOP_SITES_OUTPUT: &str = "top-sites.csv";
/// URL list read by the lookup export
pub const DEFAULT_LOOKUP_INPUT: &str = "awis-input.csv";
/// Lookup output, overwritten
pub const DEFAULT_LOOKUP_OUTPUT: &str = "awis-results.csv";
/// Listing response served in test mode
pub const DEFAULT_ATS_FIXTURE: &str = "fixtures/example-ats.json";
/// Detail response served in test mode
pub const DEFAULT_AWIS_FIXTURE: &str = "fixtures/example-awis.json";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every API request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
