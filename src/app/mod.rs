//! Application helpers around the probe pipeline.
//!
//! This module provides hostname expansion, progress logging, shutdown of
//! background tasks, and end-of-run statistics.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_summary};
pub use url::{expand_hostname, normalize_hostname};
