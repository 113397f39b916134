//! HTTP redirect chain walking.
//!
//! The HTTP client never follows redirects itself. This module issues each hop,
//! asks the redirect policy before following, and reports how the walk ended
//! as a [`HopOutcome`].

use log::{debug, warn};
use reqwest::{header::LOCATION, Response, StatusCode};
use url::Url;

use crate::config::FOLLOWABLE_REDIRECT_STATUSES;
use crate::error_handling::TransportError;
use crate::policy::{Decision, RedirectPolicy};

/// How a redirect walk ended.
#[derive(Debug)]
pub enum HopOutcome {
    /// The last response was not a followable redirect.
    Completed(Response),
    /// The policy refused the next hop. Holds the redirect response it refused
    /// to follow.
    PolicyHalted(Response),
    /// A hop failed before a final response was reached.
    TransportFailed(TransportError),
}

/// A finished walk: the outcome plus every request URL issued, oldest first.
#[derive(Debug)]
pub struct RedirectWalk {
    /// How the walk ended.
    pub outcome: HopOutcome,
    /// Request URLs issued, starting with the original one.
    pub chain: Vec<Url>,
}

impl RedirectWalk {
    /// Number of redirect hops that were followed.
    pub fn hops(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// Returns true for the statuses the walker follows (301, 302, 303, 307, 308).
pub fn is_followable_redirect(status: StatusCode) -> bool {
    FOLLOWABLE_REDIRECT_STATUSES.contains(&status.as_u16())
}

/// Resolves the `Location` header of a response against the response URL.
///
/// Returns `Ok(None)` when the header is absent.
///
/// # Errors
///
/// Returns `TransportError::InvalidLocation` if the header is not text or does
/// not resolve to a URL.
pub fn redirect_target(response: &Response) -> Result<Option<Url>, TransportError> {
    let Some(value) = response.headers().get(LOCATION) else {
        return Ok(None);
    };
    let base = response.url();
    let invalid = |source| TransportError::InvalidLocation {
        location: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        from: base.to_string(),
        source,
    };

    let location = value.to_str().map_err(|_| invalid(None))?;
    base.join(location).map(Some).map_err(|e| invalid(Some(e)))
}

/// Walks the redirect chain starting at `start`.
///
/// Each followable redirect is put to `policy` before the next request is
/// issued. A `Stop` ends the walk with [`HopOutcome::PolicyHalted`]. A redirect
/// status without a `Location` header ends it with [`HopOutcome::Completed`].
/// When `max_redirects` is set, following more hops than that is a transport
/// failure. Without it the walk ends only when the policy or the server ends it.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled
/// * `policy` - The active redirect policy
/// * `start` - The original request URL
/// * `max_redirects` - Optional hop ceiling applied after the policy allowed a hop
pub async fn follow_redirects(
    client: &reqwest::Client,
    policy: &dyn RedirectPolicy,
    start: Url,
    max_redirects: Option<usize>,
) -> RedirectWalk {
    let mut chain = vec![start];

    loop {
        let current = chain[chain.len() - 1].clone();
        let response = match client.get(current.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                return RedirectWalk {
                    outcome: HopOutcome::TransportFailed(e.into()),
                    chain,
                }
            }
        };

        let status = response.status();
        if !is_followable_redirect(status) {
            return RedirectWalk {
                outcome: HopOutcome::Completed(response),
                chain,
            };
        }

        let next = match redirect_target(&response) {
            Ok(Some(next)) => next,
            Ok(None) => {
                warn!(
                    "Redirect status {} for {} but no Location header",
                    status.as_u16(),
                    current
                );
                return RedirectWalk {
                    outcome: HopOutcome::Completed(response),
                    chain,
                };
            }
            Err(e) => {
                return RedirectWalk {
                    outcome: HopOutcome::TransportFailed(e),
                    chain,
                }
            }
        };

        match policy.decide(&next, &chain) {
            Decision::Stop => {
                debug!("{policy:?} stopped {current} -> {next} ({})", status.as_u16());
                return RedirectWalk {
                    outcome: HopOutcome::PolicyHalted(response),
                    chain,
                };
            }
            Decision::Continue => {
                if let Some(limit) = max_redirects.filter(|limit| chain.len() > *limit) {
                    return RedirectWalk {
                        outcome: HopOutcome::TransportFailed(TransportError::TooManyRedirects(
                            limit,
                        )),
                        chain,
                    };
                }
                debug!("Following {current} -> {next} ({})", status.as_u16());
                chain.push(next);
            }
        }
    }
}
