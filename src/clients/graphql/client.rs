//! GraphQL client implementation for the AppSync demo API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries against the Amazon Personalize demo endpoint.

use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpResponse};
use crate::config::AppSyncConfig;

/// GraphQL API client for the AppSync demo endpoint.
///
/// Provides [`send`](Self::send) for pre-built request payloads and
/// [`execute`](Self::execute) for query/variables pairs.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl, GraphqlClient};
/// use serde_json::json;
///
/// let config = AppSyncConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
///     .api_key(ApiKey::new("da2-example").unwrap())
///     .build()
///     .unwrap();
///
/// let client = GraphqlClient::new(&config);
///
/// // Pre-built payload, sent byte-for-byte
/// let response = client.send(r#"{"query":"query { __typename }","variables":{}}"#).await?;
///
/// // Built from a query and variables
/// let response = client.execute(
///     "query Similar($id: String!) { similarItems(itemId: $id) { items } }",
///     Some(json!({ "id": "1" })),
/// ).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// This constructor is infallible; configuration validation happens when
    /// the [`AppSyncConfig`] is built.
    #[must_use]
    pub fn new(config: &AppSyncConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint URL this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Sends a pre-built GraphQL request payload.
    ///
    /// The payload is assumed to already be valid JSON text of the form
    /// `{"query":…,"variables":…}` and is transmitted byte-identical, with no
    /// re-encoding. This is the operation the demo page uses for its literal
    /// payload constants.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] only for transport-level failures.
    /// Responses with non-2xx status codes, including GraphQL error payloads,
    /// are returned as `Ok`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use personalize_api::queries::SIMILAR_ITEMS_PAYLOAD;
    ///
    /// let response = client.send(SIMILAR_ITEMS_PAYLOAD).await?;
    /// println!("{}", response.body);
    /// ```
    pub async fn send(&self, payload: impl Into<String>) -> Result<HttpResponse, GraphqlError> {
        self.http_client.request(payload).await.map_err(Into::into)
    }

    /// Executes a GraphQL query built from a query document and variables.
    ///
    /// The request body is constructed as `{"query":…,"variables":…}`. When
    /// `variables` is `None`, an empty object is sent, matching the shape of
    /// the demo's literal payloads.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport-level failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.execute(
    ///     "query MyQuery { similarItems(itemId: \"1\") { items } }",
    ///     None,
    /// ).await?;
    /// ```
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });

        self.send(body.to_string()).await
    }
}
