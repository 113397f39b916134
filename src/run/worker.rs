//! Probe workers draining the shared work queue.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{mpsc, Mutex};

use crate::error_handling::ProbeError;
use crate::fetch::Prober;
use crate::models::ProbeResult;

/// Receiving end of the work queue, shared by every worker.
///
/// Whichever idle worker holds the lock takes the next candidate.
pub type WorkQueue = Arc<Mutex<mpsc::Receiver<String>>>;

/// Takes candidates off the queue and probes them until the queue is closed
/// and drained.
///
/// Each candidate yields exactly one message: a result on `results` or a
/// failure on `failures`. Returns the number of candidates probed.
pub async fn run_worker(
    id: usize,
    prober: Prober,
    work: WorkQueue,
    results: mpsc::Sender<ProbeResult>,
    failures: mpsc::Sender<ProbeError>,
) -> usize {
    let mut probed = 0;

    loop {
        let candidate = { work.lock().await.recv().await };
        let Some(candidate) = candidate else {
            break;
        };

        let delivered = match prober.probe(&candidate).await {
            Ok(result) => results.send(result).await.is_ok(),
            Err(e) => failures.send(e).await.is_ok(),
        };
        probed += 1;

        if !delivered {
            warn!("Worker {id}: output closed, dropping remaining work");
            break;
        }
    }

    debug!("Worker {id} finished after {probed} probe(s)");
    probed
}
