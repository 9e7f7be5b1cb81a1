//! Per-URL lookup loop.

use std::io::Write;
use std::time::Instant;

use log::{info, warn};

use super::ExportReport;
use crate::app::log_progress;
use crate::error_handling::{FetchError, IssueType, RunError};
use crate::export::CsvSink;
use crate::extract::map_lookup;
use crate::fetch::{Fetch, UrlInfoClient};

/// Looks up each URL once and writes one row per URL, in input order.
///
/// A failed lookup is logged and still produces a row, with every rank
/// column empty.
///
/// # Errors
///
/// Returns a CSV or I/O error if a row cannot be written.
pub async fn export_lookups<F: Fetch, W: Write>(
    urls: &[String],
    details: &UrlInfoClient<F>,
    sink: &mut CsvSink<W>,
) -> Result<ExportReport, RunError> {
    let started = Instant::now();
    let mut report = ExportReport::default();
    let total = urls.len() as u64;

    for (done, url) in urls.iter().enumerate() {
        info!("Querying {url}");
        report.requests += 1;
        let record = match details.fetch_detail(url).await {
            Ok(detail) => map_lookup(url, Some(&detail)),
            Err(e) => {
                warn!("Lookup for {url} failed: {e}");
                if matches!(e, FetchError::Status { .. }) {
                    report.issues.record(IssueType::NonSuccessStatus);
                }
                report.issues.record(IssueType::EnrichmentFailed);
                map_lookup(url, None)
            }
        };
        report.issues.add(IssueType::MalformedRank, record.rank_issues);
        sink.write_lookup(&record)?;

        if (done + 1) % 100 == 0 {
            log_progress(started, done as u64 + 1, total);
        }
    }

    report.rows_written = sink.rows();
    report.elapsed_seconds = started.elapsed().as_secs_f64();
    Ok(report)
}
