//! Live HTTP fetcher.

use std::sync::Arc;

use log::info;

use super::{ApiResponse, Fetch};
use crate::error_handling::FetchError;

/// Fetches API responses over HTTP with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Creates a fetcher using the shared `client`.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        HttpFetcher { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        info!("Request: {url} (status: {status})");

        let text = response.text().await?;
        let body =
            serde_json::from_str(&text).map_err(|source| FetchError::Json { status, source })?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Arc::new(reqwest::Client::new()))
    }

    #[tokio::test]
    async fn test_fetch_sends_headers_and_parses_json() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api"),
                request::headers(contains(key("x-api-key"))),
            ])
            .respond_with(status_code(200).body(r#"{"Ats": {"Results": null}}"#)),
        );

        let url = server.url_str("/api");
        let response = fetcher()
            .fetch(&url, &[("x-api-key", "secret")])
            .await
            .expect("fetch should succeed");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({"Ats": {"Results": null}}));
    }

    #[tokio::test]
    async fn test_fetch_returns_non_success_status_with_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api"))
                .respond_with(status_code(403).body(r#"{"message": "Forbidden"}"#)),
        );

        let response = fetcher()
            .fetch(&server.url_str("/api"), &[])
            .await
            .expect("non-success status is not a fetch error");
        assert_eq!(response.status, 403);
        assert!(!response.is_success());
        assert_eq!(response.body["message"], "Forbidden");
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api"))
                .respond_with(status_code(502).body("<html>Bad Gateway</html>")),
        );

        let result = fetcher().fetch(&server.url_str("/api"), &[]).await;
        match result {
            Err(FetchError::Json { status, .. }) => assert_eq!(status, 502),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }
}
