//! HTTP client and fetcher initialization.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::USER_AGENT;
use crate::error_handling::InitializationError;
use crate::fetch::{Fetcher, FixtureFetcher, HttpFetcher};

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` with the crate's User-Agent and the given
/// per-request timeout.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(timeout_seconds: u64) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}

/// Selects the fetcher for one endpoint.
///
/// In test mode the endpoint is answered from `fixture` and no client is
/// built; otherwise requests go over `client`, created on first use and
/// shared between endpoints.
pub fn init_fetcher(
    test_mode: bool,
    fixture: &Path,
    client: &mut Option<Arc<reqwest::Client>>,
    timeout_seconds: u64,
) -> Result<Fetcher, InitializationError> {
    if test_mode {
        return Ok(Fetcher::Fixture(FixtureFetcher::new(fixture)));
    }
    let shared = match client.as_ref() {
        Some(existing) => Arc::clone(existing),
        None => init_client(timeout_seconds)?,
    };
    *client = Some(Arc::clone(&shared));
    Ok(Fetcher::Http(HttpFetcher::new(shared)))
}
