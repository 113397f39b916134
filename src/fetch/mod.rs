//! Probing candidate URLs.
//!
//! - [`redirects`] walks a redirect chain hop by hop under a redirect policy
//! - [`probe`] turns a finished walk into a `ProbeResult` or a `ProbeError`

pub mod probe;
pub mod redirects;

pub use probe::Prober;
pub use redirects::{follow_redirects, HopOutcome, RedirectWalk};
