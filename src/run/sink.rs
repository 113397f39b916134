//! Result and diagnostic sinks.
//!
//! Each sink is the only writer to its stream, so lines never interleave.

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::error_handling::{categorize_probe_error, ProbeError, ProcessingStats};
use crate::models::ProbeResult;

/// Writes one line per result until every worker has dropped its sender.
///
/// # Errors
///
/// Returns the first write error. The receiver is dropped with it, which
/// makes the workers stop.
pub async fn write_results<W>(
    mut results: mpsc::Receiver<ProbeResult>,
    out: &mut W,
    succeeded: &AtomicUsize,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(result) = results.recv().await {
        out.write_all(format!("{result}\n").as_bytes()).await?;
        succeeded.fetch_add(1, Ordering::SeqCst);
    }
    out.flush().await
}

/// Writes one line per failed probe and counts it by category.
///
/// # Errors
///
/// Returns the first write error.
pub async fn write_diagnostics<W>(
    mut failures: mpsc::Receiver<ProbeError>,
    out: &mut W,
    stats: &ProcessingStats,
    failed: &AtomicUsize,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(error) = failures.recv().await {
        stats.increment_error(categorize_probe_error(&error));
        out.write_all(format!("{}\n", diagnostic_line(&error)).as_bytes())
            .await?;
        failed.fetch_add(1, Ordering::SeqCst);
    }
    out.flush().await
}

/// Renders a failure and its whole cause chain on one line.
pub fn diagnostic_line(error: &ProbeError) -> String {
    let mut line = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // reqwest repeats the URL in nested causes; skip exact repeats
        if !line.ends_with(&cause_text) {
            line.push_str(": ");
            line.push_str(&cause_text);
        }
        source = cause.source();
    }
    line.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{ErrorType, TransportError};
    use reqwest::StatusCode;
    use url::Url;

    fn invalid_url_error() -> ProbeError {
        let source = Url::parse("http://exa mple.com/").unwrap_err();
        ProbeError::InvalidUrl {
            url: "http://exa mple.com/".to_string(),
            source,
        }
    }

    #[test]
    fn test_diagnostic_line_includes_cause_chain() {
        let line = diagnostic_line(&ProbeError::Transport {
            url: "http://loop.example/".to_string(),
            source: TransportError::TooManyRedirects(10),
        });
        assert_eq!(
            line,
            "request to http://loop.example/ failed: stopped after 10 redirects"
        );
    }

    #[test]
    fn test_diagnostic_line_names_candidate() {
        let line = diagnostic_line(&invalid_url_error());
        assert!(line.starts_with("invalid URL http://exa mple.com/"), "{line}");
        assert!(!line.contains('\n'));
    }

    #[tokio::test]
    async fn test_write_results_one_line_per_result() {
        let (tx, rx) = mpsc::channel(4);
        for (host, status) in [("a.example", 200), ("b.example", 404)] {
            tx.send(ProbeResult {
                request_url: Url::parse(&format!("http://{host}/")).unwrap(),
                status_code: StatusCode::from_u16(status).unwrap(),
                response_url: None,
            })
            .await
            .unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        let succeeded = AtomicUsize::new(0);
        write_results(rx, &mut out, &succeeded).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://a.example/,200,\nhttp://b.example/,404,\n"
        );
        assert_eq!(succeeded.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_write_diagnostics_counts_by_category() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(invalid_url_error()).await.unwrap();
        tx.send(ProbeError::Transport {
            url: "http://loop.example/".to_string(),
            source: TransportError::TooManyRedirects(3),
        })
        .await
        .unwrap();
        drop(tx);

        let mut out = Vec::new();
        let stats = ProcessingStats::new();
        let failed = AtomicUsize::new(0);
        write_diagnostics(rx, &mut out, &stats, &failed).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(failed.load(Ordering::SeqCst), 2);
        assert_eq!(stats.get_error_count(ErrorType::InvalidUrl), 1);
        assert_eq!(stats.get_error_count(ErrorType::TooManyRedirects), 1);
    }
}
