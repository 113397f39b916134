//! Tests for reading hostnames from an input file via `run_inspection`.

use std::io::Write;
use std::path::PathBuf;

use redirect_status::{run_inspection, Config, LogFormat, LogLevel, PolicyKind, Scheme};
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn file_config(file: PathBuf) -> Config {
    Config {
        file: Some(file),
        workers: 2,
        policy: PolicyKind::StopOnFirst,
        schemes: vec![Scheme::Http],
        timeout_seconds: 5,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

/// Writes hostnames to a temporary file (sync I/O)
fn write_hosts(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write hostname");
    }
    file.flush().expect("Failed to flush file");
    file
}

#[tokio::test]
async fn test_missing_input_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let missing = dir.path().join("no_such_hosts.txt");

    let err = run_inspection(file_config(missing))
        .await
        .expect_err("missing file should fail");
    let message = format!("{err:#}");
    assert!(message.contains("Failed to open input file"), "{message}");
    assert!(message.contains("no_such_hosts.txt"), "{message}");
}

#[tokio::test]
async fn test_hosts_file_with_comments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    let host = server.address().to_string();

    let file = write_hosts(&[
        "# staging hosts".to_string(),
        host.clone(),
        String::new(),
        format!("  {host}  "),
    ]);

    let report = run_inspection(file_config(file.path().to_path_buf()))
        .await
        .expect("run should succeed");

    assert_eq!(report.hosts, 2);
    assert_eq!(report.candidates, 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn test_empty_file_completes() {
    let file = write_hosts(&[]);
    let report = run_inspection(file_config(file.path().to_path_buf()))
        .await
        .expect("run should succeed");
    assert_eq!(report.hosts, 0);
    assert_eq!(report.succeeded + report.failed, 0);
}
