//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! Result lines go to stdout and diagnostics to stderr, both written by the
//! library. Logs also go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use redirect_status::initialization::init_logger_with;
use redirect_status::{run_inspection, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Opt::parse().into();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format)
        .context("Failed to initialize logger")?;

    if let Err(e) = run_inspection(config).await {
        eprintln!("redirect_status error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
