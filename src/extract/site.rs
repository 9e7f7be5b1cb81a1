//! Per-site field mapping.
//!
//! Turns one site entry of a top sites page, and optionally its detail
//! lookup, into the flat record the CSV sink writes.

use serde_json::Value;

use super::country_rank::{decode_country_ranks, summarize, ExtractedRankSummary};
use super::json::{lookup_path, one_or_many, text_at};
use crate::error_handling::ShapeError;

/// A listing field every site record must carry.
struct MandatoryField {
    name: &'static str,
    path: &'static [&'static str],
}

const DATA_URL: MandatoryField = MandatoryField {
    name: "DataUrl",
    path: &["DataUrl"],
};
const GLOBAL_RANK: MandatoryField = MandatoryField {
    name: "Global.Rank",
    path: &["Global", "Rank"],
};
const REACH_PER_MILLION: MandatoryField = MandatoryField {
    name: "Country.Reach.PerMillion",
    path: &["Country", "Reach", "PerMillion"],
};
const PAGE_VIEWS_PER_MILLION: MandatoryField = MandatoryField {
    name: "Country.PageViews.PerMillion",
    path: &["Country", "PageViews", "PerMillion"],
};

// Optional detail fields
const ONLINE_SINCE: &[&str] = &["ContentData", "SiteData", "OnlineSince"];
const ADULT_CONTENT: &[&str] = &["ContentData", "AdultContent"];
const DESCRIPTION: &[&str] = &["ContentData", "SiteData", "Description"];
const CATEGORY_DATA: &[&str] = &["Related", "Categories", "CategoryData"];
const CATEGORY_TITLE: &[&str] = &["Title"];
const RANK_BY_COUNTRY: &[&str] = &["TrafficData", "RankByCountry", "Country"];

/// One row of the top sites export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    /// Site domain (`DataUrl`)
    pub url: String,
    /// Global rank as returned
    pub global_rank: String,
    /// Country reach per million users
    pub reach_per_million: String,
    /// Country page views per million
    pub page_views_per_million: String,
    /// Present when detail lookups are enabled
    pub enrichment: Option<SiteEnrichment>,
}

/// Detail fields for one site. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnrichment {
    /// Date the site came online
    pub online_since: Option<String>,
    /// Adult content flag (`yes`/`no`)
    pub adult_content: Option<String>,
    /// Title of the first category
    pub category_1: Option<String>,
    /// Title of the second category
    pub category_2: Option<String>,
    /// Country rank summary
    pub ranks: ExtractedRankSummary,
    /// Site description
    pub description: Option<String>,
    /// Country rank entries that had to be dropped or treated as unranked
    pub rank_issues: usize,
}

/// One row of the per-URL lookup export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRecord {
    /// URL as read from the input list
    pub url: String,
    /// Country rank summary, empty if the lookup failed
    pub ranks: ExtractedRankSummary,
    /// Country rank entries that had to be dropped or treated as unranked
    pub rank_issues: usize,
}

fn mandatory(site: &Value, field: &MandatoryField) -> Result<String, ShapeError> {
    text_at(site, field.path).ok_or(ShapeError::MissingField(field.name))
}

/// Maps a site entry from a top sites page.
///
/// `enrichment` is the `Alexa` object of the site's detail lookup, if one
/// was made.
///
/// # Errors
///
/// Returns [`ShapeError::MissingField`] when the URL, global rank, reach or
/// page views are absent. The caller skips that record only.
pub fn map_site(site: &Value, enrichment: Option<&Value>) -> Result<SiteRecord, ShapeError> {
    Ok(SiteRecord {
        url: mandatory(site, &DATA_URL)?,
        global_rank: mandatory(site, &GLOBAL_RANK)?,
        reach_per_million: mandatory(site, &REACH_PER_MILLION)?,
        page_views_per_million: mandatory(site, &PAGE_VIEWS_PER_MILLION)?,
        enrichment: enrichment.map(map_enrichment),
    })
}

/// Maps the detail fields of a site's `Alexa` object.
pub fn map_enrichment(detail: &Value) -> SiteEnrichment {
    let categories = one_or_many(lookup_path(detail, CATEGORY_DATA));
    let decoded = decode_country_ranks(lookup_path(detail, RANK_BY_COUNTRY));

    SiteEnrichment {
        online_since: text_at(detail, ONLINE_SINCE),
        adult_content: text_at(detail, ADULT_CONTENT),
        category_1: categories.first().and_then(|c| text_at(c, CATEGORY_TITLE)),
        category_2: categories.get(1).and_then(|c| text_at(c, CATEGORY_TITLE)),
        ranks: summarize(&decoded.entries),
        description: text_at(detail, DESCRIPTION),
        rank_issues: decoded.malformed,
    }
}

/// Builds a lookup row for `url` from its detail `Alexa` object.
///
/// Without a detail object (the lookup failed) every rank column is empty.
pub fn map_lookup(url: &str, detail: Option<&Value>) -> LookupRecord {
    let decoded = decode_country_ranks(detail.and_then(|d| lookup_path(d, RANK_BY_COUNTRY)));
    LookupRecord {
        url: url.to_string(),
        ranks: summarize(&decoded.entries),
        rank_issues: decoded.malformed,
    }
}
