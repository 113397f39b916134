//! The built-in redirect policies.

use url::Url;

use super::{Decision, RedirectPolicy};

/// Always follows. Shows where a chain finally lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowAll;

impl RedirectPolicy for FollowAll {
    fn decide(&self, _next: &Url, _chain: &[Url]) -> Decision {
        Decision::Continue
    }
}

/// Never follows. Shows the immediate answer to the original request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnFirst;

impl RedirectPolicy for StopOnFirst {
    fn decide(&self, _next: &Url, _chain: &[Url]) -> Decision {
        Decision::Stop
    }
}

/// Stops as soon as a redirect points at a different host than the last request.
///
/// Hosts are compared with their explicit port, so `example.com:8080` and
/// `example.com` differ while `http://example.com` and `https://example.com`
/// do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnDomainChange;

impl RedirectPolicy for StopOnDomainChange {
    fn decide(&self, next: &Url, chain: &[Url]) -> Decision {
        match chain.last() {
            Some(previous) if authority(previous) != authority(next) => Decision::Stop,
            _ => Decision::Continue,
        }
    }
}

fn authority(url: &Url) -> (Option<&str>, Option<u16>) {
    (url.host_str(), url.port())
}

/// Stops when a redirect leads back to a URL already requested in this chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnCycle;

impl RedirectPolicy for StopOnCycle {
    fn decide(&self, next: &Url, chain: &[Url]) -> Decision {
        if chain.iter().any(|previous| previous == next) {
            Decision::Stop
        } else {
            Decision::Continue
        }
    }
}
