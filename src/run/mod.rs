//! Export runs.
//!
//! Each run estimates its cost, asks for confirmation, selects live or
//! fixture fetchers and then works through its records one request at a
//! time, writing a CSV row as soon as a record is complete.

mod lookup;
mod top_sites;

use std::io;

use anyhow::{Context, Result};
use log::info;

use crate::app::{
    confirm_cost, estimate_cost, estimate_lookup_cost, print_export_statistics, read_url_list,
};
use crate::config::{LookupConfig, TopSitesConfig};
use crate::error_handling::{IssueStats, IssueType};
use crate::export::{CsvSink, ExportLayout};
use crate::fetch::{TopSitesClient, UrlInfoClient};
use crate::initialization::init_fetcher;

pub use lookup::export_lookups;
pub use top_sites::export_top_sites;

/// Results of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// API requests issued, listing pages and detail lookups together
    pub requests: usize,
    /// Data rows written to the CSV file
    pub rows_written: usize,
    /// Issues recovered during the run
    pub issues: IssueStats,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ExportReport {
    /// Site records skipped for missing mandatory fields.
    pub fn rows_skipped(&self) -> usize {
        self.issues.count(IssueType::SkippedRecord)
    }

    /// Detail lookups that failed; their rows have empty detail columns.
    pub fn enrichment_failures(&self) -> usize {
        self.issues.count(IssueType::EnrichmentFailed)
    }
}

/// Runs the top sites export.
///
/// Results `1..start` are treated as exported by an earlier run, so the cost
/// covers only the rest and the header is written only on a fresh run.
///
/// # Errors
///
/// Returns an error if the user declines the cost, the output file cannot be
/// opened, a listing page cannot be fetched or carries no site list, or
/// writing a row fails. Rows written before the error stay in the file.
pub async fn run_top_sites(config: &TopSitesConfig) -> Result<ExportReport> {
    let already_exported = config.start.map_or(0, |start| start.saturating_sub(1));
    let remaining = config.results.saturating_sub(already_exported);
    let enriched = config.enrichment_enabled();

    confirm_cost(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        remaining,
        estimate_cost(remaining, enriched),
        config.test,
    )?;

    let mut client = None;
    let pages = TopSitesClient::new(
        init_fetcher(config.test, &config.ats_fixture, &mut client, config.timeout_seconds)
            .context("Failed to initialize top sites fetcher")?,
        config.ats_endpoint.as_str(),
        config.ats_api_key.as_str(),
        config.country.clone(),
    );
    let details = match &config.awis_api_key {
        Some(api_key) => Some(UrlInfoClient::new(
            init_fetcher(config.test, &config.awis_fixture, &mut client, config.timeout_seconds)
                .context("Failed to initialize detail fetcher")?,
            config.awis_endpoint.as_str(),
            api_key.as_str(),
        )),
        None => None,
    };

    let mut sink = CsvSink::append(
        &config.output,
        ExportLayout::TopSites { enriched },
        config.start.is_none(),
    )
    .with_context(|| format!("Failed to open output file {}", config.output.display()))?;

    info!("Exporting {} top sites to {}", remaining, config.output.display());
    let report = export_top_sites(config, &pages, details.as_ref(), &mut sink).await?;
    sink.flush().context("Failed to flush output file")?;

    print_export_statistics(&report);
    Ok(report)
}

/// Runs the per-URL lookup export.
///
/// # Errors
///
/// Returns an error if the input list cannot be read, the user declines the
/// cost, or the output file cannot be written.
pub async fn run_lookup(config: &LookupConfig) -> Result<ExportReport> {
    let urls = read_url_list(&config.input)
        .with_context(|| format!("Failed to read input file {}", config.input.display()))?;
    info!("Total URLs in file: {}", urls.len());

    let lookups = urls.len() as u64;
    confirm_cost(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        lookups,
        estimate_lookup_cost(lookups),
        config.test,
    )?;

    let mut client = None;
    let details = UrlInfoClient::new(
        init_fetcher(config.test, &config.awis_fixture, &mut client, config.timeout_seconds)
            .context("Failed to initialize detail fetcher")?,
        config.awis_endpoint.as_str(),
        config.awis_api_key.as_str(),
    );

    let mut sink = CsvSink::create(&config.output, ExportLayout::Lookup)
        .with_context(|| format!("Failed to create output file {}", config.output.display()))?;

    let report = export_lookups(&urls, &details, &mut sink).await?;
    sink.flush().context("Failed to flush output file")?;

    print_export_statistics(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_derived_counts() {
        let mut report = ExportReport::default();
        report.issues.record(IssueType::SkippedRecord);
        report.issues.record(IssueType::SkippedRecord);
        report.issues.record(IssueType::EnrichmentFailed);
        assert_eq!(report.rows_skipped(), 2);
        assert_eq!(report.enrichment_failures(), 1);
    }
}
