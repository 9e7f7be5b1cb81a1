// Shared test helpers: a scripted fetcher and API response builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use top_sites_export::error_handling::FetchError;
use top_sites_export::fetch::{ApiResponse, Fetch};

type Responder = dyn Fn(&str) -> Result<ApiResponse, FetchError> + Send + Sync;

/// Fetcher answering from a closure and recording every requested URL.
#[derive(Clone)]
pub struct MockFetcher {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(
        responder: impl Fn(&str) -> Result<ApiResponse, FetchError> + Send + Sync + 'static,
    ) -> Self {
        MockFetcher {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Values of query parameter `name` across all requests.
    pub fn params(&self, name: &str) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|url| query_param(url, name))
            .collect()
    }
}

impl Fetch for MockFetcher {
    async fn fetch(&self, url: &str, _headers: &[(&str, &str)]) -> Result<ApiResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        (self.responder)(url)
    }
}

pub fn query_param(url: &str, name: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

pub fn ok(body: Value) -> ApiResponse {
    ApiResponse { status: 200, body }
}

/// A listing site entry ranked `n`, with URL `site<n>.com`.
pub fn site(n: u64) -> Value {
    json!({
        "DataUrl": format!("site{n}.com"),
        "Country": {
            "Rank": n.to_string(),
            "Reach": {"PerMillion": "10"},
            "PageViews": {"PerMillion": "20"}
        },
        "Global": {"Rank": n.to_string()}
    })
}

pub fn listing_page(sites: Vec<Value>) -> Value {
    json!({
        "Ats": {"Results": {"Result": {"Alexa": {"TopSites": {"Country": {
            "CountryCode": "GB",
            "Sites": {"Site": sites}
        }}}}}}
    })
}

/// A listing of `available` sites that honors `Start` and `Count`.
pub fn paged_listing(available: u64) -> MockFetcher {
    MockFetcher::new(move |url| {
        let start: u64 = query_param(url, "Start").unwrap().parse().unwrap();
        let count: u64 = query_param(url, "Count").unwrap().parse().unwrap();
        let end = (start + count - 1).min(available);
        Ok(ok(listing_page((start..=end).map(site).collect())))
    })
}

/// A detail response with the given `RankByCountry.Country` node.
pub fn detail(ranks: Value) -> Value {
    json!({
        "Awis": {"Results": {"Result": {"Alexa": {
            "ContentData": {
                "SiteData": {"OnlineSince": "01-Jan-2000", "Description": "A site"},
                "AdultContent": "no"
            },
            "Related": {"Categories": {"CategoryData": {"Title": "News"}}},
            "TrafficData": {"RankByCountry": {"Country": ranks}}
        }}}}
    })
}
