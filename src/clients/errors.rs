//! HTTP-specific error types for the AppSync demo client.
//!
//! # Error Handling
//!
//! The transport deliberately carries a narrow error taxonomy. Only failures
//! of the transport itself (DNS resolution, TLS negotiation, connection
//! refused, a timeout if one were ever configured) are errors. A non-2xx HTTP
//! status is **not** an error: the response body is still delivered to the
//! caller verbatim, matching the upstream demo which prints whatever the
//! server returned regardless of status.
//!
//! # Example
//!
//! ```rust,ignore
//! use personalize_api::clients::HttpError;
//!
//! match client.request(payload).await {
//!     Ok(response) => println!("Status {}: {}", response.code, response.body),
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Unified error type for HTTP transport failures.
///
/// Only transport-level failures are represented here. HTTP responses with
/// non-success status codes are returned as `Ok` values carrying the status
/// code and raw body.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A network-level error from the underlying HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<HttpError>();
    }

    #[tokio::test]
    async fn test_network_error_display_includes_cause() {
        // Force a reqwest error by connecting to a port nothing listens on.
        let err = reqwest::Client::new()
            .post("http://127.0.0.1:1/graphql")
            .send()
            .await
            .unwrap_err();

        let error = HttpError::Network(err);
        assert!(error.to_string().starts_with("Network error:"));
    }
}
