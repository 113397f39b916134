//! redirect_status library: concurrent HTTP redirect inspection
//!
//! This library reads hostnames, probes each one over the configured schemes
//! with a pool of workers, and reports the status code and redirect target of
//! every candidate URL. Redirect chains are walked hop by hop under a
//! configurable [`RedirectPolicy`].
//!
//! # Example
//!
//! ```no_run
//! use redirect_status::{run_inspection, Config, PolicyKind};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(std::path::PathBuf::from("hosts.txt")),
//!     workers: 20,
//!     policy: PolicyKind::StopOnDomainChange,
//!     ..Default::default()
//! };
//!
//! let report = run_inspection(config).await?;
//! eprintln!("{} succeeded, {} failed", report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;
pub mod policy;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, Scheme};
pub use error_handling::{ErrorType, ProbeError, TransportError};
pub use fetch::Prober;
pub use models::{ParseProbeResultError, ProbeResult};
pub use policy::{Decision, PolicyKind, RedirectPolicy};
pub use run::{inspect, run_inspection, InspectionReport};
