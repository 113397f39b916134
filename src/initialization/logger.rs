//! Logger initialization.
//!
//! Every log record goes to stderr. Stdout carries result lines only.

use std::io::{IsTerminal, Write};

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies whose debug output drowns the per-hop trace.
const QUIET_MODULES: &[&str] = &["reqwest", "hyper", "hyper_util"];

/// Installs the process-wide logger.
///
/// `RUST_LOG` is read first, then `level` is applied on top of it. The level
/// always wins for this crate and for modules `RUST_LOG` does not name, so
/// `RUST_LOG` only adds directives for other modules. HTTP stack modules are
/// capped at `info`.
///
/// ```bash
/// # Crate records come from --log-level, whatever RUST_LOG says
/// redirect_status hosts.txt --log-level debug --log-format json
///
/// # RUST_LOG adds per-module filters for dependencies
/// RUST_LOG=tokio=trace redirect_status hosts.txt --log-level debug
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(std::io::stderr().is_terminal());

    let mut builder = env_logger::Builder::from_default_env();
    apply_filters(&mut builder, level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// Layers `level` over whatever directives `builder` already holds.
fn apply_filters(builder: &mut env_logger::Builder, level: LevelFilter) {
    builder.filter_level(level);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Info.min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);
}

/// `{"ts":..,"level":..,"target":..,"msg":..}`, one object per line.
fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let (marker, level) = level_marker(record.level());
    writeln!(
        buf,
        "{} {} [{}] {}",
        marker,
        record.target().cyan(),
        level,
        record.args()
    )
}

fn level_marker(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // env_logger installs a process-wide logger, so only the first call in the
    // test binary can succeed. Later calls must fail cleanly, never panic.
    #[test]
    fn test_second_init_reports_logger_error() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_err() || second.is_err());
        if let Err(e) = second {
            assert!(matches!(e, InitializationError::LoggerError(_)));
        }
    }

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        use log::Log;
        logger.enabled(&log::Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_level_overrides_env_directive_for_crate() {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters("redirect_status=debug");
        apply_filters(&mut builder, LevelFilter::Info);
        let logger = builder.build();

        assert!(enabled(&logger, "redirect_status::run", Level::Info));
        assert!(!enabled(&logger, "redirect_status::run", Level::Debug));
    }

    #[test]
    fn test_env_directive_for_other_module_is_kept() {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters("tokio=trace");
        apply_filters(&mut builder, LevelFilter::Debug);
        let logger = builder.build();

        assert!(enabled(&logger, "tokio::runtime", Level::Trace));
        assert!(enabled(&logger, "redirect_status::fetch", Level::Debug));
        assert!(!enabled(&logger, "redirect_status::fetch", Level::Trace));
        assert!(!enabled(&logger, "hyper::proto", Level::Debug));
    }

    #[test]
    fn test_level_marker_covers_every_level() {
        for level in [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ] {
            let (marker, name) = level_marker(level);
            assert!(!marker.is_empty());
            assert!(name.to_string().contains(level.as_str()));
        }
    }
}
