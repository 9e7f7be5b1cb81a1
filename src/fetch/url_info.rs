//! Per-URL detail client.

use serde_json::Value;

use super::{request::url_info_url, Fetch};
use crate::config::API_KEY_HEADER;
use crate::error_handling::FetchError;
use crate::extract::lookup_path;

const SITE_DATA: &[&str] = &["Awis", "Results", "Result", "Alexa"];

/// Looks up detail data for one URL at a time.
#[derive(Debug, Clone)]
pub struct UrlInfoClient<F> {
    fetcher: F,
    endpoint: String,
    api_key: String,
}

impl<F: Fetch> UrlInfoClient<F> {
    /// Creates a client for `endpoint`.
    pub fn new(fetcher: F, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        UrlInfoClient {
            fetcher,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches the `Alexa` detail object for `site`.
    ///
    /// # Errors
    ///
    /// Besides transport failures, a non-success status and a body without
    /// site data are errors here: there is nothing to enrich the row with.
    pub async fn fetch_detail(&self, site: &str) -> Result<Value, FetchError> {
        let url = url_info_url(&self.endpoint, site)?;
        let response = self
            .fetcher
            .fetch(url.as_str(), &[(API_KEY_HEADER, self.api_key.as_str())])
            .await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }
        detail_site_data(&response.body)
            .cloned()
            .ok_or(FetchError::MissingSiteData)
    }
}

/// Returns the `Awis.Results.Result.Alexa` object of a detail response.
pub fn detail_site_data(response: &Value) -> Option<&Value> {
    lookup_path(response, SITE_DATA)
}
