//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout the
//! application.

/// Default number of concurrent probe workers.
pub const DEFAULT_WORKERS: usize = 5;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Seconds between progress log lines while a run is in flight.
pub const LOGGING_INTERVAL: u64 = 5;

// Redirect handling
/// Status codes treated as followable redirects.
/// Other 3xx responses (300, 304, ...) end the chain as ordinary responses.
pub const FOLLOWABLE_REDIRECT_STATUSES: &[u16] = &[301, 302, 303, 307, 308];

// Pipeline conduits
/// Capacity of the candidate URL conduit. One slot keeps the producer in
/// lock-step with the workers.
pub const WORK_QUEUE_CAPACITY: usize = 1;

/// Capacity of the result and diagnostic conduits.
pub const RESULT_QUEUE_CAPACITY: usize = 1;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("redirect_status/", env!("CARGO_PKG_VERSION"));

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";
