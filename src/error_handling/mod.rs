//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for probing and initialization
//! - Error categorization for per-run failure counts
//! - Processing statistics tracking (errors, info metrics)
//!
//! A redirect chain ended by the active policy is not an error. Only transport
//! failures and unparseable candidate URLs reach the diagnostics.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_probe_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InfoType, InitializationError, ProbeError, TransportError};
