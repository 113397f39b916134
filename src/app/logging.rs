//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logs progress information about probing.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `succeeded` - Probes that produced a result line
/// * `failed` - Probes reported as diagnostics
pub fn log_progress(start_time: std::time::Instant, succeeded: &AtomicUsize, failed: &AtomicUsize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let succeeded = succeeded.load(Ordering::SeqCst);
    let failed = failed.load(Ordering::SeqCst);
    let done = succeeded + failed;
    let rate = if elapsed_secs > 0.0 {
        done as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Probed {} URLs ({} ok, {} failed) in {:.2} seconds (~{:.2} URLs/sec)",
        done, succeeded, failed, elapsed_secs, rate
    );
}
