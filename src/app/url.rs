//! Hostname normalization and candidate URL expansion.

use crate::config::Scheme;

/// Normalizes one input line into a hostname.
///
/// Trims surrounding whitespace and line endings. Returns `None` for blank
/// lines and `#` comments, which are skipped rather than probed.
pub fn normalize_hostname(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

/// Formats the candidate URL `<scheme>://<host>/`.
///
/// No validation happens here. A host that does not form a URL is reported
/// when the candidate is probed.
pub fn format_candidate_url(scheme: Scheme, host: &str) -> String {
    format!("{}://{}/", scheme.as_str(), host)
}

/// Expands a hostname into one candidate URL per scheme, in scheme order.
pub fn expand_hostname<'a>(
    host: &'a str,
    schemes: &'a [Scheme],
) -> impl Iterator<Item = String> + 'a {
    schemes
        .iter()
        .map(move |scheme| format_candidate_url(*scheme, host))
}
