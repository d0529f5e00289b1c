//! HTTP client for AppSync API communication.
//!
//! This module provides the [`HttpClient`] type for making API-key
//! authenticated POST requests to a fixed AppSync GraphQL endpoint.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::AppSyncConfig;

/// Maximum number of redirect hops to follow, matching the upstream demo's
/// transport settings.
pub const MAX_REDIRECTS: usize = 10;

/// HTTP client for making requests to the AppSync API.
///
/// The client handles:
/// - Default headers (`x-api-key` and `Content-Type: application/json`)
/// - Sending the request body verbatim, with no re-encoding
/// - HTTP/1.1 with redirect following up to [`MAX_REDIRECTS`] hops
///
/// No request timeout is configured; a call blocks until the server responds
/// or the transport fails. Non-2xx responses are returned as `Ok` values with
/// the raw body intact.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl};
/// use personalize_api::clients::HttpClient;
///
/// let config = AppSyncConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
///     .api_key(ApiKey::new("da2-example").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let response = client.request(r#"{"query":"query { __typename }","variables":{}}"#).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl};
    /// use personalize_api::clients::HttpClient;
    ///
    /// let config = AppSyncConfig::builder()
    ///     .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
    ///     .api_key(ApiKey::new("da2-example").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &AppSyncConfig) -> Self {
        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "x-api-key".to_string(),
            config.api_key().as_ref().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        // Create reqwest client. HTTP/1.1 only, bounded redirect following,
        // and no timeout, mirroring the upstream transport settings.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .http1_only()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP POST request to the AppSync endpoint.
    ///
    /// The body is sent byte-identical to the argument; no serialization or
    /// mutation occurs. The full response body is awaited and returned as raw
    /// text regardless of status code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] only if the transport itself fails
    /// (DNS, TLS, connection refused). Non-2xx HTTP responses are `Ok`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.request(payload).await?;
    /// if !response.is_ok() {
    ///     println!("Status {} for request {:?}", response.code, response.request_id());
    /// }
    /// println!("{}", response.body);
    /// ```
    pub async fn request(&self, body: impl Into<String>) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.into()).send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        // A body that cannot be read is delivered as empty text rather than
        // an error; downstream output proceeds with whatever was received.
        let body_text = res.text().await.unwrap_or_default();

        Ok(HttpResponse::new(code, headers, body_text))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, EndpointUrl};

    fn create_test_config() -> AppSyncConfig {
        AppSyncConfig::builder()
            .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
            .api_key(ApiKey::new("da2-test-key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(client.endpoint(), "https://example.com/graphql");
    }

    #[test]
    fn test_api_key_header_injection() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("x-api-key"),
            Some(&"da2-test-key".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_exactly_two_default_headers() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(client.default_headers().len(), 2);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
