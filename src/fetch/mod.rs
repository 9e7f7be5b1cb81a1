//! API access.
//!
//! The exports talk to the ranking API only through the [`Fetch`] trait: a
//! GET of a URL with headers, answered by a status code and a parsed JSON
//! body. [`HttpFetcher`] does that over the network; [`FixtureFetcher`]
//! serves a local JSON file so test mode costs nothing.
//!
//! On top of that sit the two endpoint clients, [`TopSitesClient`] for the
//! paged listing and [`UrlInfoClient`] for per-URL detail lookups.

mod fixture;
mod http;
mod request;
mod top_sites;
mod url_info;

use serde_json::Value;

use crate::error_handling::FetchError;

// Re-export public API
pub use fixture::FixtureFetcher;
pub use http::HttpFetcher;
pub use request::{top_sites_url, url_info_url};
pub use top_sites::{page_sites, TopSitesClient};
pub use url_info::{detail_site_data, UrlInfoClient};

/// Status code and parsed body of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed JSON body
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one API call.
///
/// Calls are made one at a time; nothing here retries.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// GETs `url` with the given headers and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure or when the body is not
    /// valid JSON. A non-success status is not an error at this level.
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<ApiResponse, FetchError>;
}

/// The fetcher selected at startup: live HTTP or fixture files.
#[derive(Debug, Clone)]
pub enum Fetcher {
    /// Live API calls
    Http(HttpFetcher),
    /// Test mode, no network
    Fixture(FixtureFetcher),
}

impl Fetch for Fetcher {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        match self {
            Fetcher::Http(fetcher) => fetcher.fetch(url, headers).await,
            Fetcher::Fixture(fetcher) => fetcher.fetch(url, headers).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_response_is_success() {
        let ok = ApiResponse {
            status: 200,
            body: json!({}),
        };
        let forbidden = ApiResponse {
            status: 403,
            body: json!({"message": "Forbidden"}),
        };
        let redirect = ApiResponse {
            status: 301,
            body: json!({}),
        };
        assert!(ok.is_success());
        assert!(!forbidden.is_success());
        assert!(!redirect.is_success());
    }
}
