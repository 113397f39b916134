//! Hostname source feeding the work queue.

use std::io::ErrorKind;

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::app::{expand_hostname, normalize_hostname};
use crate::config::Scheme;

/// Counts of what the producer read and enqueued.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputSummary {
    /// Hostnames read (blank and comment lines excluded).
    pub hosts: usize,
    /// Candidate URLs placed on the work queue.
    pub candidates: usize,
}

/// Reads hostnames line by line and enqueues one candidate URL per scheme.
///
/// Returns once the input is exhausted, a read fails, or every worker has gone
/// away. The work queue closes when `work` is dropped on return.
pub async fn produce_candidates<R>(
    input: R,
    schemes: Vec<Scheme>,
    work: mpsc::Sender<String>,
) -> InputSummary
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = InputSummary::default();
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Skipping input line that is not valid UTF-8");
                continue;
            }
            Err(e) => {
                warn!("Failed to read hostnames, stopping input: {e}");
                break;
            }
        };

        let Some(host) = normalize_hostname(&line) else {
            continue;
        };
        summary.hosts += 1;

        for candidate in expand_hostname(host, &schemes) {
            if work.send(candidate).await.is_err() {
                warn!("Work queue closed before input was exhausted");
                return summary;
            }
            summary.candidates += 1;
        }
    }

    debug!(
        "Input exhausted: {} hosts, {} candidate URLs",
        summary.hosts, summary.candidates
    );
    summary
}
