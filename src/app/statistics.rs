//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::run::InspectionReport;

/// Prints a one-line summary of the run.
pub fn print_summary(report: &InspectionReport) {
    info!(
        "✅ Probed {} URL{} from {} host{} ({} succeeded, {} failed, {} stopped by policy) in {:.1}s",
        report.candidates,
        if report.candidates == 1 { "" } else { "s" },
        report.hosts,
        if report.hosts == 1 { "" } else { "s" },
        report.succeeded,
        report.failed,
        report.policy_truncations,
        report.elapsed_seconds
    );
}

/// Prints error and info counts to the log.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
