//! Shared CSV row building logic.
//!
//! Converts extracted records into the fixed column order of each export.
//! Missing optional values become empty strings.

use crate::extract::{ExtractedRankSummary, LookupRecord, SiteEnrichment, SiteRecord};

/// Columns every top sites row carries.
pub const SITE_COLUMNS: [&str; 4] = [
    "URL",
    "Global rank",
    "Reach per million",
    "Page views per million",
];

/// Columns appended when detail lookups are enabled.
pub const ENRICHMENT_COLUMNS: [&str; 9] = [
    "Online since",
    "Adult",
    "Category 1",
    "Category 2",
    "Top country",
    "Top country rank",
    "UK rank",
    "US rank",
    "Description",
];

/// Columns of the per-URL lookup export.
pub const LOOKUP_COLUMNS: [&str; 5] = [
    "URL",
    "Top country",
    "Top country rank",
    "UK rank",
    "US rank",
];

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn rank_fields(ranks: &ExtractedRankSummary) -> [String; 4] {
    [
        text(&ranks.top_country),
        number(ranks.top_country_rank),
        number(ranks.uk_rank),
        number(ranks.us_rank),
    ]
}

/// Builds a top sites row.
///
/// With `enriched` set the detail columns are always written, empty when the
/// record carries no enrichment (its lookup failed).
pub fn site_row(record: &SiteRecord, enriched: bool) -> Vec<String> {
    let mut row = vec![
        record.url.clone(),
        record.global_rank.clone(),
        record.reach_per_million.clone(),
        record.page_views_per_million.clone(),
    ];
    if enriched {
        let empty = SiteEnrichment::default();
        let enrichment = record.enrichment.as_ref().unwrap_or(&empty);
        row.extend([
            text(&enrichment.online_since),
            text(&enrichment.adult_content),
            text(&enrichment.category_1),
            text(&enrichment.category_2),
        ]);
        row.extend(rank_fields(&enrichment.ranks));
        row.push(text(&enrichment.description));
    }
    row
}

/// Builds a lookup row.
pub fn lookup_row(record: &LookupRecord) -> Vec<String> {
    let mut row = vec![record.url.clone()];
    row.extend(rank_fields(&record.ranks));
    row
}
