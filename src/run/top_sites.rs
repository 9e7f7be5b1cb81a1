//! Top sites pagination loop.

use std::io::Write;
use std::time::Instant;

use log::{info, warn};
use serde_json::Value;

use super::ExportReport;
use crate::app::log_progress;
use crate::config::{TopSitesConfig, MAX_PAGE_SIZE};
use crate::error_handling::{FetchError, IssueType, RunError};
use crate::export::CsvSink;
use crate::extract::{map_enrichment, map_site, SiteEnrichment};
use crate::fetch::{page_sites, Fetch, TopSitesClient, UrlInfoClient};

/// Pages through the listing until `config.results` sites are exported.
///
/// Each page asks for at most [`MAX_PAGE_SIZE`] sites and never more than
/// are still wanted. The offset advances by the number of entries a page
/// actually returned, skipped records included, and entries beyond the
/// requested count are ignored. A page without entries ends the run early:
/// the data set is exhausted. A `start` of 0 is read as 1.
///
/// With `details`, every site gets a detail lookup before its row is
/// written. A failed lookup still writes the row, with empty detail columns.
///
/// # Errors
///
/// Returns [`RunError::Fetch`] if a page cannot be fetched or parsed,
/// [`RunError::MissingSiteList`] if a page has no listing, and a CSV or I/O
/// error if a row cannot be written.
pub async fn export_top_sites<P: Fetch, D: Fetch, W: Write>(
    config: &TopSitesConfig,
    pages: &TopSitesClient<P>,
    details: Option<&UrlInfoClient<D>>,
    sink: &mut CsvSink<W>,
) -> Result<ExportReport, RunError> {
    let started = Instant::now();
    let mut report = ExportReport::default();
    let mut exported = config.start.map_or(0, |start| start.saturating_sub(1));
    let mut start = exported + 1;

    info!("Looping through sites...");
    while exported < config.results {
        let count = (config.results - exported).min(MAX_PAGE_SIZE);
        let response = pages.fetch_page(start, count).await?;
        report.requests += 1;
        if !response.is_success() {
            report.issues.record(IssueType::NonSuccessStatus);
        }

        let sites = page_sites(&response.body).ok_or(RunError::MissingSiteList { start })?;
        if sites.is_empty() {
            warn!(
                "No sites returned from {start}, stopping at {exported} of {}",
                config.results
            );
            report.issues.record(IssueType::EmptyPage);
            break;
        }

        // The API may return more entries than requested; only `count` are used
        let used = &sites[..sites.len().min(count as usize)];
        for site in used {
            export_site(site, details, sink, &mut report).await?;
        }

        let returned = used.len() as u64;
        exported += returned;
        start += returned;
        log_progress(started, exported, config.results);
    }

    report.rows_written = sink.rows();
    report.elapsed_seconds = started.elapsed().as_secs_f64();
    Ok(report)
}

async fn export_site<D: Fetch, W: Write>(
    site: &Value,
    details: Option<&UrlInfoClient<D>>,
    sink: &mut CsvSink<W>,
    report: &mut ExportReport,
) -> Result<(), RunError> {
    let mut record = match map_site(site, None) {
        Ok(record) => record,
        Err(e) => {
            warn!("Skipping site record: {e}");
            report.issues.record(IssueType::SkippedRecord);
            return Ok(());
        }
    };

    if let Some(details) = details {
        report.requests += 1;
        let enrichment = match details.fetch_detail(&record.url).await {
            Ok(detail) => {
                let enrichment = map_enrichment(&detail);
                report
                    .issues
                    .add(IssueType::MalformedRank, enrichment.rank_issues);
                enrichment
            }
            Err(e) => {
                warn!("Detail lookup for {} failed: {e}", record.url);
                if matches!(e, FetchError::Status { .. }) {
                    report.issues.record(IssueType::NonSuccessStatus);
                }
                report.issues.record(IssueType::EnrichmentFailed);
                SiteEnrichment::default()
            }
        };
        record.enrichment = Some(enrichment);
    }

    sink.write_site(&record)
}
