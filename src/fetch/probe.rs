//! Probing a single candidate URL.

use std::sync::Arc;

use log::debug;
use reqwest::Response;
use url::Url;

use super::redirects::{follow_redirects, redirect_target, HopOutcome};
use crate::error_handling::{InfoType, ProbeError, ProcessingStats};
use crate::models::ProbeResult;
use crate::policy::RedirectPolicy;

/// Probes candidate URLs with one HTTP client and the shared redirect policy.
///
/// Every worker owns its own `Prober`. Only the policy and the statistics are
/// shared, and both are read-only or atomic.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    policy: Arc<dyn RedirectPolicy>,
    max_redirects: Option<usize>,
    stats: Arc<ProcessingStats>,
}

impl Prober {
    /// Creates a prober.
    ///
    /// `client` must have redirects disabled (see
    /// [`init_client`](crate::initialization::init_client)), otherwise the
    /// policy never gets to see a hop.
    pub fn new(
        client: reqwest::Client,
        policy: Arc<dyn RedirectPolicy>,
        max_redirects: Option<usize>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            policy,
            max_redirects,
            stats,
        }
    }

    /// Issues a GET to `candidate` and follows redirects as the policy allows.
    ///
    /// A chain ended by the policy yields a normal `ProbeResult` for the redirect
    /// response it stopped at. The result always names the original URL, not the
    /// last hop.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::InvalidUrl` if `candidate` does not parse and
    /// `ProbeError::Transport` if any hop fails (DNS, connect, TLS, timeout,
    /// bad `Location`, hop ceiling).
    pub async fn probe(&self, candidate: &str) -> Result<ProbeResult, ProbeError> {
        let request_url = Url::parse(candidate).map_err(|source| ProbeError::InvalidUrl {
            url: candidate.to_string(),
            source,
        })?;

        let walk = follow_redirects(
            &self.client,
            self.policy.as_ref(),
            request_url.clone(),
            self.max_redirects,
        )
        .await;
        let hops = walk.hops();
        self.stats.add_info(InfoType::RedirectFollowed, hops);

        let response = match walk.outcome {
            HopOutcome::Completed(response) => response,
            HopOutcome::PolicyHalted(response) => {
                self.stats.increment_info(InfoType::PolicyTruncation);
                response
            }
            HopOutcome::TransportFailed(source) => {
                return Err(ProbeError::Transport {
                    url: candidate.to_string(),
                    source,
                })
            }
        };

        let result = ProbeResult {
            request_url,
            status_code: response.status(),
            response_url: response_url(&response),
        };
        debug!("Probed {candidate} after {hops} hop(s): {result}");
        Ok(result)
    }
}

/// Redirect target of a final response, if it is a redirect at all.
///
/// A `Location` on a non-3xx response, or one that does not resolve, is ignored.
fn response_url(response: &Response) -> Option<Url> {
    if !response.status().is_redirection() {
        return None;
    }
    redirect_target(response).ok().flatten()
}
