//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used by one probe worker.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled, so the redirect walker sees every hop and can consult
///   the redirect policy before issuing the next one
/// - Timeout from the configuration (per request, not per chain)
/// - User-Agent header from the configuration
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
