//! Pipeline orchestration.
//!
//! One producer reads hostnames and feeds a bounded work queue. A fixed pool
//! of workers probes candidates and sends each outcome to one of two sinks:
//! results go to stdout, diagnostics to stderr. Shutdown cascades from the
//! input: the producer closes the work queue, the workers drain it and exit,
//! and only then are the sink conduits closed and the sinks drained.

mod producer;
mod sink;
mod worker;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use futures::future::join_all;
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, print_error_statistics, print_summary, shutdown_gracefully};
use crate::config::{Config, LOGGING_INTERVAL, RESULT_QUEUE_CAPACITY, WORK_QUEUE_CAPACITY};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::fetch::Prober;
use crate::initialization::init_client;

use producer::produce_candidates;
use sink::{write_diagnostics, write_results};
use worker::{run_worker, WorkQueue};

/// Totals for one finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    /// Hostnames read from the input.
    pub hosts: usize,
    /// Candidate URLs enqueued.
    pub candidates: usize,
    /// Result lines written.
    pub succeeded: usize,
    /// Diagnostic lines written.
    pub failed: usize,
    /// Chains ended by the redirect policy (counted within `succeeded`).
    pub policy_truncations: usize,
    /// Wall-clock duration of the run.
    pub elapsed_seconds: f64,
}

/// Runs the pipeline over the configured input, writing results to stdout and
/// diagnostics to stderr.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened, an HTTP client cannot
/// be built, or writing to stdout/stderr fails.
pub async fn run_inspection(config: Config) -> Result<InspectionReport> {
    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &config.file {
        Some(path) if !config.reads_stdin() => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!("Reading hostnames from {}", path.display());
            Box::new(BufReader::new(file))
        }
        _ => {
            info!("Reading hostnames from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    inspect(&config, input, &mut stdout, &mut stderr).await
}

/// Runs the pipeline over `input`, writing result lines to `output` and
/// diagnostic lines to `diagnostics`.
///
/// Returns once every candidate has been reported and both writers are
/// flushed. Result order is unspecified when more than one worker runs.
///
/// # Errors
///
/// Returns an error if `config.workers` is zero, an HTTP client cannot be
/// built, or either writer fails.
pub async fn inspect<R, O, D>(
    config: &Config,
    input: R,
    output: &mut O,
    diagnostics: &mut D,
) -> Result<InspectionReport>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    O: AsyncWrite + Unpin,
    D: AsyncWrite + Unpin,
{
    ensure!(config.workers > 0, "at least one worker is required");

    let start_time = Instant::now();
    let stats = Arc::new(ProcessingStats::new());
    let policy = config.policy.build();

    // Clients are built up front so a failure leaves nothing running
    let probers = (0..config.workers)
        .map(|_| {
            init_client(config)
                .map(|client| {
                    Prober::new(
                        client,
                        Arc::clone(&policy),
                        config.max_redirects,
                        Arc::clone(&stats),
                    )
                })
                .context("Failed to initialize HTTP client")
        })
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Probing with {} worker(s), policy {}, schemes {}",
        config.workers,
        config.policy,
        config
            .schemes
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    );

    let (work_tx, work_rx) = mpsc::channel::<String>(WORK_QUEUE_CAPACITY);
    let (result_tx, result_rx) = mpsc::channel(RESULT_QUEUE_CAPACITY);
    let (failure_tx, failure_rx) = mpsc::channel(RESULT_QUEUE_CAPACITY);

    let producer = tokio::spawn(produce_candidates(input, config.schemes.clone(), work_tx));

    let work_queue: WorkQueue = Arc::new(Mutex::new(work_rx));
    let workers: Vec<_> = probers
        .into_iter()
        .enumerate()
        .map(|(id, prober)| {
            tokio::spawn(run_worker(
                id,
                prober,
                Arc::clone(&work_queue),
                result_tx.clone(),
                failure_tx.clone(),
            ))
        })
        .collect();
    // The workers hold the only remaining handles to the queue
    drop(work_queue);

    let succeeded = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));

    let cancel = CancellationToken::new();
    let logging_task = {
        let cancel = cancel.child_token();
        let succeeded = Arc::clone(&succeeded);
        let failed = Arc::clone(&failed);
        let period = Duration::from_secs(LOGGING_INTERVAL);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = interval.tick() => log_progress(start_time, &succeeded, &failed),
                }
            }
        })
    };

    let drain = async move {
        for joined in join_all(workers).await {
            if let Err(e) = joined {
                warn!("Worker task failed: {e}");
            }
        }
        // Closing the sink conduits only after every worker exited
        drop(result_tx);
        drop(failure_tx);
        producer.await
    };

    let (input_summary, results_written, diagnostics_written) = tokio::join!(
        drain,
        write_results(result_rx, output, &succeeded),
        write_diagnostics(failure_rx, diagnostics, &stats, &failed),
    );

    shutdown_gracefully(cancel, Some(logging_task)).await;

    results_written.context("Failed to write results")?;
    diagnostics_written.context("Failed to write diagnostics")?;
    let input_summary = input_summary.context("Input reader task failed")?;

    let report = InspectionReport {
        hosts: input_summary.hosts,
        candidates: input_summary.candidates,
        succeeded: succeeded.load(Ordering::SeqCst),
        failed: failed.load(Ordering::SeqCst),
        policy_truncations: stats.get_info_count(InfoType::PolicyTruncation),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };

    print_error_statistics(&stats);
    print_summary(&report);

    Ok(report)
}
