//! Probe result record and its output line format.

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Outcome of one completed (possibly policy-truncated) probe.
///
/// Rendered as `<request_url>,<status_code>,<response_url>` where the last
/// field is empty when there is no redirect target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// URL of the first request in the chain (the candidate URL).
    pub request_url: Url,
    /// Status of the last response received.
    pub status_code: StatusCode,
    /// Redirect target of the last response, if it was a redirect.
    pub response_url: Option<Url>,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.request_url, self.status_code.as_u16())?;
        if let Some(response_url) = &self.response_url {
            write!(f, "{response_url}")?;
        }
        Ok(())
    }
}

/// Errors from parsing an output line back into a [`ProbeResult`].
#[derive(Error, Debug)]
pub enum ParseProbeResultError {
    /// The line does not have three comma separated fields.
    #[error("expected 3 comma separated fields, found {0}")]
    FieldCount(usize),

    /// The request or response URL does not parse.
    #[error("invalid URL {url:?}: {source}")]
    Url {
        /// The offending field.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// The status field is not a valid HTTP status code.
    #[error("invalid status code {0:?}")]
    StatusCode(String),
}

impl FromStr for ProbeResult {
    type Err = ParseProbeResultError;

    /// Parses a rendered line. Candidate URLs never contain a comma, so the
    /// first two commas delimit the fields and the response URL keeps any
    /// commas of its own.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.splitn(3, ',').collect();
        let [request, status, response] = fields[..] else {
            return Err(ParseProbeResultError::FieldCount(fields.len()));
        };

        let status_code = status
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or_else(|| ParseProbeResultError::StatusCode(status.to_string()))?;

        let response_url = if response.is_empty() {
            None
        } else {
            Some(parse_url(response)?)
        };

        Ok(ProbeResult {
            request_url: parse_url(request)?,
            status_code,
            response_url,
        })
    }
}

fn parse_url(field: &str) -> Result<Url, ParseProbeResultError> {
    Url::parse(field).map_err(|source| ParseProbeResultError::Url {
        url: field.to_string(),
        source,
    })
}
