//! Extraction of flat export fields from ranking API responses.
//!
//! Everything in this module is pure: JSON in, records out. The API returns
//! repeated elements either as a list or, when there is only one, as a bare
//! object; [`one_or_many`] normalizes that at the boundary so the rest of the
//! extraction never branches on shape.

mod country_rank;
mod json;
mod site;

// Re-export public API
pub use country_rank::{
    decode_country_ranks, extract_country_ranks, parse_rank, summarize, DecodedRanks,
    ExtractedRankSummary, RawCountryRank,
};
pub use json::{lookup_path, one_or_many, scalar_text, text_at};
pub use site::{map_enrichment, map_lookup, map_site, LookupRecord, SiteEnrichment, SiteRecord};
