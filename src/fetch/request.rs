//! Request URL construction for both API endpoints.

use url::Url;

use crate::config::{API_PATH, AWIS_RESPONSE_GROUPS};

fn api_url(endpoint: &str) -> Result<Url, url::ParseError> {
    Url::parse(endpoint)?.join(API_PATH)
}

/// Builds a top sites listing request for `count` sites starting at `start`.
///
/// # Examples
///
/// ```
/// use top_sites_export::fetch::top_sites_url;
///
/// let url = top_sites_url("https://ats.api.alexa.com", Some("DE"), 101, 50).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://ats.api.alexa.com/api?Action=TopSites&CountryCode=DE&ResponseGroup=Country&Start=101&Count=50&Output=json"
/// );
/// ```
pub fn top_sites_url(
    endpoint: &str,
    country: Option<&str>,
    start: u64,
    count: u64,
) -> Result<Url, url::ParseError> {
    let mut url = api_url(endpoint)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("Action", "TopSites");
        if let Some(country) = country {
            query.append_pair("CountryCode", country);
        }
        query
            .append_pair("ResponseGroup", "Country")
            .append_pair("Start", &start.to_string())
            .append_pair("Count", &count.to_string())
            .append_pair("Output", "json");
    }
    Ok(url)
}

/// Builds a detail lookup request for one site.
pub fn url_info_url(endpoint: &str, site: &str) -> Result<Url, url::ParseError> {
    let mut url = api_url(endpoint)?;
    url.query_pairs_mut()
        .append_pair("Action", "UrlInfo")
        .append_pair("Output", "json")
        .append_pair("ResponseGroup", AWIS_RESPONSE_GROUPS)
        .append_pair("Url", site);
    Ok(url)
}
