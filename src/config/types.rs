//! Library configuration and the command-line options that produce it.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS, STDIN_PATH,
};
use crate::policy::PolicyKind;

/// Minimum level of log records to print.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Run start, progress and summary
    Info,
    /// Every redirect hop and policy decision
    Debug,
    /// Everything, including the HTTP stack at its cap
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Log line layout on stderr.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Coloured text when stderr is a terminal
    Plain,
    /// One JSON object per line
    Json,
}

/// Protocol scheme a hostname is probed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// The scheme as it appears in a URL, without the `://` separator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Every supported scheme, in probe order.
    pub fn all() -> Vec<Scheme> {
        vec![Scheme::Http, Scheme::Https]
    }
}

/// Settings for one inspection run.
///
/// Built from [`Opt`] by the binary, or directly by library callers.
///
/// # Examples
///
/// ```no_run
/// use redirect_status::{Config, PolicyKind};
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: Some(PathBuf::from("hosts.txt")),
///     workers: 8,
///     policy: PolicyKind::FollowAll,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hostnames from (`None` or `-` reads stdin)
    pub file: Option<PathBuf>,

    /// Number of concurrent probe workers
    pub workers: usize,

    /// Redirect policy applied to every probe
    pub policy: PolicyKind,

    /// Schemes each hostname is expanded into
    pub schemes: Vec<Scheme>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Optional ceiling on followed redirect hops, checked after the policy
    /// allowed a hop. `None` leaves chain length to the policy alone.
    pub max_redirects: Option<usize>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Minimum level of log records
    pub log_level: LogLevel,

    /// Log line layout
    pub log_format: LogFormat,
}

impl Config {
    /// Returns true when hostnames come from standard input.
    pub fn reads_stdin(&self) -> bool {
        match &self.file {
            None => true,
            Some(path) => path.as_os_str() == STDIN_PATH,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            workers: DEFAULT_WORKERS,
            policy: PolicyKind::StopOnFirst,
            schemes: Scheme::all(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_redirects: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// Parsed by `clap` and converted into a [`Config`] before the run starts.
///
/// # Examples
///
/// ```bash
/// # Read hostnames from a file, stop at the first redirect
/// redirect_status hosts.txt
///
/// # Follow whole chains with more workers
/// cat hosts.txt | redirect_status --policy follow-all --workers 16
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_status",
    version,
    about = "Checks a list of hostnames for their HTTP status and redirect target."
)]
pub struct Opt {
    /// File to read hostnames from, one per line (omit or use `-` for stdin)
    #[arg(value_parser)]
    pub file: Option<PathBuf>,

    /// Number of concurrent probe workers
    #[arg(long, default_value_t = DEFAULT_WORKERS, value_parser = parse_worker_count)]
    pub workers: usize,

    /// Redirect policy: follow-all|stop-on-first|stop-on-domain-change|stop-on-cycle
    #[arg(long, value_enum, default_value_t = PolicyKind::StopOnFirst)]
    pub policy: PolicyKind,

    /// Schemes to probe each hostname under
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Scheme::all())]
    pub schemes: Vec<Scheme>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum redirect hops to follow before giving up, whatever the policy
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

fn parse_worker_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a worker count"))?;
    if count == 0 {
        return Err("at least one worker is required".to_string());
    }
    Ok(count)
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            workers: opt.workers,
            policy: opt.policy,
            schemes: opt.schemes,
            timeout_seconds: opt.timeout_seconds,
            max_redirects: opt.max_redirects,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        let pairs = [
            (LogLevel::Error, LevelFilter::Error),
            (LogLevel::Warn, LevelFilter::Warn),
            (LogLevel::Info, LevelFilter::Info),
            (LogLevel::Debug, LevelFilter::Debug),
            (LogLevel::Trace, LevelFilter::Trace),
        ];
        for (level, expected) in pairs {
            assert_eq!(LevelFilter::from(level), expected);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.workers, 5);
        assert_eq!(config.policy, PolicyKind::StopOnFirst);
        assert_eq!(config.schemes, vec![Scheme::Http, Scheme::Https]);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.max_redirects, None);
        assert!(config.reads_stdin());
    }

    #[test]
    fn test_reads_stdin_for_dash() {
        let config = Config {
            file: Some(PathBuf::from("-")),
            ..Default::default()
        };
        assert!(config.reads_stdin());

        let config = Config {
            file: Some(PathBuf::from("hosts.txt")),
            ..Default::default()
        };
        assert!(!config.reads_stdin());
    }

    #[test]
    fn test_scheme_as_str() {
        assert_eq!(Scheme::Http.as_str(), "http");
        assert_eq!(Scheme::Https.as_str(), "https");
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["redirect_status"]).expect("defaults should parse");
        let config = Config::from(opt);
        assert!(config.file.is_none());
        assert_eq!(config.workers, 5);
        assert_eq!(config.policy, PolicyKind::StopOnFirst);
        assert_eq!(config.schemes, vec![Scheme::Http, Scheme::Https]);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.max_redirects, None);
    }

    #[test]
    fn test_opt_overrides() {
        let opt = Opt::try_parse_from([
            "redirect_status",
            "hosts.txt",
            "--workers",
            "8",
            "--policy",
            "stop-on-cycle",
            "--schemes",
            "https",
            "--max-redirects",
            "3",
        ])
        .expect("overrides should parse");
        let config = Config::from(opt);
        assert_eq!(config.file, Some(PathBuf::from("hosts.txt")));
        assert_eq!(config.workers, 8);
        assert_eq!(config.policy, PolicyKind::StopOnCycle);
        assert_eq!(config.schemes, vec![Scheme::Https]);
        assert_eq!(config.max_redirects, Some(3));
    }

    #[test]
    fn test_opt_rejects_zero_workers() {
        let result = Opt::try_parse_from(["redirect_status", "--workers", "0"]);
        assert!(result.is_err());
    }
}
