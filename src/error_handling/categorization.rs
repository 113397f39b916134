//! Error categorization.
//!
//! Maps probe failures onto the [`ErrorType`] buckets counted in
//! [`ProcessingStats`](super::ProcessingStats).

use super::types::{ErrorType, ProbeError, TransportError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a failed probe.
pub fn categorize_probe_error(error: &ProbeError) -> ErrorType {
    match error {
        ProbeError::InvalidUrl { .. } => ErrorType::InvalidUrl,
        ProbeError::Transport { source, .. } => match source {
            TransportError::Http(e) => categorize_reqwest_error(e),
            TransportError::InvalidLocation { .. } => ErrorType::InvalidLocationHeader,
            TransportError::TooManyRedirects(_) => ErrorType::TooManyRedirects,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_category() {
        let source = url::Url::parse("http://exa mple.com/").unwrap_err();
        let error = ProbeError::InvalidUrl {
            url: "http://exa mple.com/".to_string(),
            source,
        };
        assert_eq!(categorize_probe_error(&error), ErrorType::InvalidUrl);
    }

    #[test]
    fn test_redirect_categories() {
        let error = ProbeError::Transport {
            url: "http://example.com/".to_string(),
            source: TransportError::TooManyRedirects(10),
        };
        assert_eq!(categorize_probe_error(&error), ErrorType::TooManyRedirects);

        let error = ProbeError::Transport {
            url: "http://example.com/".to_string(),
            source: TransportError::InvalidLocation {
                location: "http://[".to_string(),
                from: "http://example.com/".to_string(),
                source: None,
            },
        };
        assert_eq!(
            categorize_probe_error(&error),
            ErrorType::InvalidLocationHeader
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::new()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .expect_err("closed port should refuse");
        assert_eq!(
            categorize_reqwest_error(&err),
            ErrorType::HttpRequestConnectError
        );
    }
}
