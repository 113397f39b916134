//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, limits, logging cadence)
//! - CLI option types and their conversion into the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, Scheme};
