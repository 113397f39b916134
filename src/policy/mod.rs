//! Redirect policies.
//!
//! A policy is consulted by the redirect walker each time a response asks to be
//! redirected, before the next hop is issued. It sees the URL the next request
//! would go to and every request URL issued so far, oldest first.
//!
//! Policies are stateless. One instance is built at startup from a [`PolicyKind`]
//! and shared read-only across all workers.

mod rules;

use std::fmt::Debug;
use std::sync::Arc;

use clap::ValueEnum;
use strum_macros::EnumIter;
use url::Url;

pub use rules::{FollowAll, StopOnCycle, StopOnDomainChange, StopOnFirst};

/// Outcome of a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Issue the next hop.
    Continue,
    /// End the chain and report the redirect response as the final one.
    Stop,
}

/// Decides whether a redirect chain is followed one hop further.
pub trait RedirectPolicy: Send + Sync + Debug {
    /// Decides on the hop to `next`, given the request URLs already issued.
    ///
    /// `chain` holds at least the original request whenever it is called by the
    /// redirect walker.
    fn decide(&self, next: &Url, chain: &[Url]) -> Decision;
}

/// Registry of the available redirect policies.
///
/// The CLI names (`follow-all`, `stop-on-first`, ...) come from the `ValueEnum`
/// derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIter)]
pub enum PolicyKind {
    /// Follow every redirect
    FollowAll,
    /// Report the response to the original request only
    StopOnFirst,
    /// Stop when a redirect leaves the current host
    StopOnDomainChange,
    /// Stop when a redirect returns to a URL already requested
    StopOnCycle,
}

impl PolicyKind {
    /// Builds the policy implementation for this kind.
    pub fn build(self) -> Arc<dyn RedirectPolicy> {
        match self {
            PolicyKind::FollowAll => Arc::new(FollowAll),
            PolicyKind::StopOnFirst => Arc::new(StopOnFirst),
            PolicyKind::StopOnDomainChange => Arc::new(StopOnDomainChange),
            PolicyKind::StopOnCycle => Arc::new(StopOnCycle),
        }
    }

    /// The name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::FollowAll => "follow-all",
            PolicyKind::StopOnFirst => "stop-on-first",
            PolicyKind::StopOnDomainChange => "stop-on-domain-change",
            PolicyKind::StopOnCycle => "stop-on-cycle",
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
