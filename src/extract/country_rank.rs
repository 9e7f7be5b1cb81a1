//! Country rank extraction.
//!
//! Reduces a site's per-country rank breakdown to the handful of columns the
//! exports carry: the country the site ranks best in, and its UK and US ranks.

use log::debug;
use serde_json::Value;

use super::json::one_or_many;
use crate::config::{COUNTRY_CODE_KEY, RANK_KEY, UK_COUNTRY_CODE, US_COUNTRY_CODE};
use crate::error_handling::ShapeError;

/// One entry of a site's per-country rank breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCountryRank {
    /// Two-letter ISO country code
    pub country_code: String,
    /// Rank in that country; `None` when the site is unranked there
    pub rank: Option<u64>,
}

impl RawCountryRank {
    /// Creates an entry for `country_code`.
    pub fn new(country_code: impl Into<String>, rank: Option<u64>) -> Self {
        RawCountryRank {
            country_code: country_code.into(),
            rank,
        }
    }
}

/// The flattened rank columns for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRankSummary {
    /// Country with the numerically lowest rank
    pub top_country: Option<String>,
    /// Rank in `top_country`
    pub top_country_rank: Option<u64>,
    /// Rank of the `GB` entry
    pub uk_rank: Option<u64>,
    /// Rank of the `US` entry
    pub us_rank: Option<u64>,
}

/// Country rank entries decoded from JSON, plus a count of entries that
/// could not be used as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedRanks {
    /// Usable entries, in input order
    pub entries: Vec<RawCountryRank>,
    /// Entries dropped or with a rank treated as unranked
    pub malformed: usize,
}

/// Parses a rank value.
///
/// `null` and empty strings mean "unranked". Positive integers are accepted
/// either as JSON numbers or as decimal strings, since the API emits both.
pub fn parse_rank(value: &Value) -> Result<Option<u64>, ShapeError> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_u64(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    match parsed {
        Some(rank) if rank > 0 => Ok(Some(rank)),
        _ => Err(ShapeError::MalformedRank(value.to_string())),
    }
}

/// Decodes a scalar-or-list rank set into an ordered sequence of entries.
///
/// Entries without a country code are dropped and malformed ranks become
/// `None`; both are counted in [`DecodedRanks::malformed`].
pub fn decode_country_ranks(rank_set: Option<&Value>) -> DecodedRanks {
    let mut decoded = DecodedRanks::default();
    for entry in one_or_many(rank_set) {
        let Some(code) = entry.get(COUNTRY_CODE_KEY).and_then(Value::as_str) else {
            debug!("Dropping country rank entry without a country code: {entry}");
            decoded.malformed += 1;
            continue;
        };
        let rank = match entry.get(RANK_KEY).map(parse_rank).unwrap_or(Ok(None)) {
            Ok(rank) => rank,
            Err(e) => {
                debug!("Treating rank for {code} as unranked: {e}");
                decoded.malformed += 1;
                None
            }
        };
        decoded.entries.push(RawCountryRank::new(code, rank));
    }
    decoded
}

/// Summarizes an ordered sequence of country ranks.
///
/// The top country is the first entry holding the lowest non-null rank. When
/// the US rank equals that lowest rank, `US` is reported as the top country
/// instead, whichever tied country was seen first.
pub fn summarize(entries: &[RawCountryRank]) -> ExtractedRankSummary {
    let mut summary = ExtractedRankSummary::default();

    for entry in entries {
        match entry.country_code.as_str() {
            UK_COUNTRY_CODE => summary.uk_rank = entry.rank,
            US_COUNTRY_CODE => summary.us_rank = entry.rank,
            _ => {}
        }

        let Some(rank) = entry.rank else {
            continue;
        };
        let improves = summary.top_country_rank.map_or(true, |best| rank < best);
        if improves {
            summary.top_country = Some(entry.country_code.clone());
            summary.top_country_rank = Some(rank);
        }
    }

    if summary.us_rank.is_some() && summary.us_rank == summary.top_country_rank {
        summary.top_country = Some(US_COUNTRY_CODE.to_string());
    }

    summary
}

/// Extracts the rank summary straight from a `RankByCountry.Country` node.
pub fn extract_country_ranks(rank_set: Option<&Value>) -> ExtractedRankSummary {
    summarize(&decode_country_ranks(rank_set).entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(raw: &[(&str, Option<u64>)]) -> Vec<RawCountryRank> {
        raw.iter()
            .map(|(code, rank)| RawCountryRank::new(*code, *rank))
            .collect()
    }

    #[test]
    fn test_us_wins_exact_tie() {
        let summary = summarize(&entries(&[("GB", Some(5)), ("US", Some(5))]));
        assert_eq!(summary.top_country.as_deref(), Some("US"));
        assert_eq!(summary.top_country_rank, Some(5));
        assert_eq!(summary.uk_rank, Some(5));
        assert_eq!(summary.us_rank, Some(5));
    }

    #[test]
    fn test_lowest_rank_wins() {
        let summary = summarize(&entries(&[("FR", Some(3)), ("GB", Some(10))]));
        assert_eq!(summary.top_country.as_deref(), Some("FR"));
        assert_eq!(summary.top_country_rank, Some(3));
        assert_eq!(summary.uk_rank, Some(10));
        assert_eq!(summary.us_rank, None);
    }

    #[test]
    fn test_scalar_entry() {
        let summary = extract_country_ranks(Some(&json!({"@Code": "DE", "Rank": "1"})));
        assert_eq!(summary.top_country.as_deref(), Some("DE"));
        assert_eq!(summary.top_country_rank, Some(1));
        assert_eq!(summary.uk_rank, None);
        assert_eq!(summary.us_rank, None);
    }

    #[test]
    fn test_null_us_rank_is_skipped() {
        let summary = summarize(&entries(&[("US", None), ("CA", Some(7))]));
        assert_eq!(summary.top_country.as_deref(), Some("CA"));
        assert_eq!(summary.top_country_rank, Some(7));
        assert_eq!(summary.us_rank, None);
    }

    #[test]
    fn test_first_seen_wins_without_us() {
        let summary = summarize(&entries(&[
            ("IN", Some(9)),
            ("JP", Some(2)),
            ("BR", Some(2)),
        ]));
        assert_eq!(summary.top_country.as_deref(), Some("JP"));
        assert_eq!(summary.top_country_rank, Some(2));
    }

    #[test]
    fn test_us_tie_not_at_minimum_does_not_override() {
        let summary = summarize(&entries(&[
            ("FR", Some(1)),
            ("US", Some(5)),
            ("DE", Some(5)),
        ]));
        assert_eq!(summary.top_country.as_deref(), Some("FR"));
        assert_eq!(summary.us_rank, Some(5));
    }

    #[test]
    fn test_empty_and_null_inputs() {
        assert_eq!(summarize(&[]), ExtractedRankSummary::default());
        assert_eq!(extract_country_ranks(None), ExtractedRankSummary::default());
        assert_eq!(
            extract_country_ranks(Some(&Value::Null)),
            ExtractedRankSummary::default()
        );
        assert_eq!(
            extract_country_ranks(Some(&json!([]))),
            ExtractedRankSummary::default()
        );
    }

    #[test]
    fn test_all_ranks_null() {
        let summary = summarize(&entries(&[("GB", None), ("US", None), ("FR", None)]));
        assert_eq!(summary, ExtractedRankSummary::default());
    }

    #[test]
    fn test_parse_rank_accepts_numbers_and_strings() {
        assert_eq!(parse_rank(&json!(12)), Ok(Some(12)));
        assert_eq!(parse_rank(&json!("12")), Ok(Some(12)));
        assert_eq!(parse_rank(&json!(" 7 ")), Ok(Some(7)));
        assert_eq!(parse_rank(&json!(null)), Ok(None));
        assert_eq!(parse_rank(&json!("")), Ok(None));
    }

    #[test]
    fn test_parse_rank_rejects_malformed() {
        for value in [json!("n/a"), json!(1.5), json!(-3), json!(0), json!(true), json!({})] {
            assert!(
                matches!(parse_rank(&value), Err(ShapeError::MalformedRank(_))),
                "{value} should be malformed"
            );
        }
    }

    #[test]
    fn test_malformed_rank_does_not_fail_extraction() {
        let rank_set = json!([
            {"@Code": "FR", "Rank": "abc"},
            {"@Code": "GB", "Rank": "4"},
            {"Rank": "1"}
        ]);
        let decoded = decode_country_ranks(Some(&rank_set));
        assert_eq!(decoded.malformed, 2);
        assert_eq!(
            decoded.entries,
            entries(&[("FR", None), ("GB", Some(4))])
        );

        let summary = summarize(&decoded.entries);
        assert_eq!(summary.top_country.as_deref(), Some("GB"));
        assert_eq!(summary.uk_rank, Some(4));
    }

    #[test]
    fn test_missing_rank_key_is_unranked() {
        let decoded = decode_country_ranks(Some(&json!([{"@Code": "US"}])));
        assert_eq!(decoded.malformed, 0);
        assert_eq!(decoded.entries, entries(&[("US", None)]));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn rank_entry() -> impl Strategy<Value = RawCountryRank> {
            (
                prop::sample::select(vec!["US", "GB", "FR", "DE", "JP", "CA"]),
                prop::option::of(1u64..20),
            )
                .prop_map(|(code, rank)| RawCountryRank::new(code, rank))
        }

        fn to_json(entry: &RawCountryRank) -> Value {
            json!({"@Code": entry.country_code, "Rank": entry.rank})
        }

        proptest! {
            #[test]
            fn test_scalar_matches_singleton(entry in rank_entry()) {
                let scalar = to_json(&entry);
                let wrapped = json!([scalar.clone()]);
                prop_assert_eq!(
                    extract_country_ranks(Some(&scalar)),
                    extract_country_ranks(Some(&wrapped))
                );
            }

            #[test]
            fn test_top_rank_is_minimum(list in prop::collection::vec(rank_entry(), 0..12)) {
                let summary = summarize(&list);
                let minimum = list.iter().filter_map(|e| e.rank).min();
                prop_assert_eq!(summary.top_country_rank, minimum);
                if minimum.is_none() {
                    prop_assert_eq!(summary.top_country, None);
                }
            }

            #[test]
            fn test_top_country_tie_break(list in prop::collection::vec(rank_entry(), 1..12)) {
                let summary = summarize(&list);
                let Some(minimum) = list.iter().filter_map(|e| e.rank).min() else {
                    return Ok(());
                };
                let last_us = list
                    .iter()
                    .filter(|e| e.country_code == "US")
                    .last()
                    .and_then(|e| e.rank);

                if last_us == Some(minimum) {
                    prop_assert_eq!(summary.top_country.as_deref(), Some("US"));
                } else {
                    let first = list.iter().find(|e| e.rank == Some(minimum)).map(|e| e.country_code.as_str());
                    prop_assert_eq!(summary.top_country.as_deref(), first);
                }
            }

            #[test]
            fn test_extraction_is_idempotent(list in prop::collection::vec(rank_entry(), 0..12)) {
                let rank_set = Value::Array(list.iter().map(to_json).collect());
                prop_assert_eq!(
                    extract_country_ranks(Some(&rank_set)),
                    extract_country_ranks(Some(&rank_set))
                );
            }
        }
    }
}
