//! Top sites listing client.

use log::warn;
use serde_json::Value;

use super::{request::top_sites_url, ApiResponse, Fetch};
use crate::config::API_KEY_HEADER;
use crate::error_handling::FetchError;
use crate::extract::{lookup_path, one_or_many};

const COUNTRY_LISTING: &[&str] = &["Ats", "Results", "Result", "Alexa", "TopSites", "Country"];
const SITES: &[&str] = &["Sites", "Site"];

/// Requests pages of the top sites listing.
#[derive(Debug, Clone)]
pub struct TopSitesClient<F> {
    fetcher: F,
    endpoint: String,
    api_key: String,
    country: Option<String>,
}

impl<F: Fetch> TopSitesClient<F> {
    /// Creates a client for `endpoint`, optionally restricted to one country.
    pub fn new(
        fetcher: F,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        country: Option<String>,
    ) -> Self {
        TopSitesClient {
            fetcher,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            country,
        }
    }

    /// Fetches `count` sites starting at the 1-based offset `start`.
    ///
    /// A non-success status is logged and the body returned anyway; the
    /// caller decides whether it still holds a usable site list.
    pub async fn fetch_page(&self, start: u64, count: u64) -> Result<ApiResponse, FetchError> {
        let url = top_sites_url(&self.endpoint, self.country.as_deref(), start, count)?;
        let response = self
            .fetcher
            .fetch(url.as_str(), &[(API_KEY_HEADER, self.api_key.as_str())])
            .await?;
        if !response.is_success() {
            warn!(
                "Top sites page at {start} returned status {}",
                response.status
            );
        }
        Ok(response)
    }
}

/// Returns the site entries of a listing page.
///
/// `None` means the page has no listing at all (typically an error body).
/// A listing without sites yields an empty slice, which marks the end of
/// the data set.
pub fn page_sites(page: &Value) -> Option<&[Value]> {
    let listing = lookup_path(page, COUNTRY_LISTING)?;
    Some(one_or_many(lookup_path(listing, SITES)))
}
