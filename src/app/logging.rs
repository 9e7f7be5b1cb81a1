//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how far an export has got.
///
/// # Arguments
///
/// * `start_time` - When the export started
/// * `done` - Records handled so far
/// * `total` - Records the export will handle
pub fn log_progress(start_time: Instant, done: u64, total: u64) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Exported {} of {} in {:.2} seconds (~{:.2} rows/sec)",
        done, total, elapsed_secs, rate
    );
}
