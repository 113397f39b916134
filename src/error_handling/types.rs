//! Error type definitions.
//!
//! This module defines the errors raised while probing and initializing, plus
//! the error and info categories tallied during a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A failure while walking a redirect chain.
///
/// A chain stopped by the redirect policy is not a failure and never shows up
/// here.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client failed (DNS, connect, TLS, timeout, ...).
    #[error(transparent)]
    Http(#[from] ReqwestError),

    /// A redirect response carried a `Location` that cannot be resolved.
    #[error("invalid Location header {location:?} in response from {from}")]
    InvalidLocation {
        /// Raw header value.
        location: String,
        /// URL of the response carrying the header.
        from: String,
        /// Parser error, if the value was text at all.
        #[source]
        source: Option<url::ParseError>,
    },

    /// The chain kept redirecting past the hop ceiling.
    #[error("stopped after {0} redirects")]
    TooManyRedirects(usize),
}

/// A failed probe of one candidate URL.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The candidate URL could not be parsed.
    #[error("invalid URL {url}")]
    InvalidUrl {
        /// The candidate URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// The request chain failed in transport.
    #[error("request to {url} failed")]
    Transport {
        /// The candidate URL.
        url: String,
        /// What went wrong.
        #[source]
        source: TransportError,
    },
}

impl ProbeError {
    /// The candidate URL the probe was for.
    pub fn url(&self) -> &str {
        match self {
            ProbeError::InvalidUrl { url, .. } | ProbeError::Transport { url, .. } => url,
        }
    }
}

/// Types of errors that can occur while probing.
///
/// Each failed probe is counted under exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum ErrorType {
    // Candidate errors
    InvalidUrl,
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestOtherError,
    // Redirect errors
    InvalidLocationHeader,
    TooManyRedirects,
}

/// Types of informational metrics recorded while probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// A redirect hop was followed.
    RedirectFollowed,
    /// The redirect policy ended a chain.
    PolicyTruncation,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Label used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::InvalidLocationHeader => "Invalid Location header",
            ErrorType::TooManyRedirects => "Too many redirects",
        }
    }
}

impl InfoType {
    /// Label used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::RedirectFollowed => "Redirects followed",
            InfoType::PolicyTruncation => "Chains stopped by policy",
        }
    }
}
