//! Fixture fetcher for test mode.
//!
//! The API is paid per result, so test mode answers every request from a
//! local JSON file instead.

use std::path::{Path, PathBuf};

use log::info;

use super::{ApiResponse, Fetch};
use crate::error_handling::FetchError;

/// Answers every request with the contents of one JSON file and status 200.
#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    path: PathBuf,
}

impl FixtureFetcher {
    /// Creates a fetcher answering every request with the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FixtureFetcher { path: path.into() }
    }

    /// Fixture file served.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Fetch for FixtureFetcher {
    async fn fetch(&self, url: &str, _headers: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        info!("Dummy Request: {url}");
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Fixture {
                path: self.path.clone(),
                source,
            })?;
        let body = serde_json::from_str(&text).map_err(|source| FetchError::FixtureJson {
            path: self.path.clone(),
            source,
        })?;
        Ok(ApiResponse { status: 200, body })
    }
}
