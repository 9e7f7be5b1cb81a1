//! End-of-run summary.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{IssueStats, IssueType};
use crate::run::ExportReport;

/// Prints a one-line summary of the run, then any recovered issues.
pub fn print_export_statistics(report: &ExportReport) {
    info!(
        "Wrote {} row{} using {} API request{} in {:.1}s",
        report.rows_written,
        if report.rows_written == 1 { "" } else { "s" },
        report.requests,
        if report.requests == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
    print_issue_statistics(&report.issues);
}

/// Prints the count of each issue type that occurred.
pub fn print_issue_statistics(issues: &IssueStats) {
    let total = issues.total();
    if total == 0 {
        return;
    }

    info!("Issue Counts ({} total):", total);
    for issue in IssueType::iter() {
        let count = issues.count(issue);
        if count > 0 {
            info!("   {}: {}", issue.label(), count);
        }
    }
}
