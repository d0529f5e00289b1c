//! Configuration types for the AppSync demo client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AppSyncConfig`]: The configuration struct holding endpoint and credentials
//! - [`AppSyncConfigBuilder`]: A builder for constructing [`AppSyncConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`EndpointUrl`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl};
//!
//! let config = AppSyncConfig::builder()
//!     .endpoint(EndpointUrl::new("https://example.appsync-api.us-east-1.amazonaws.com/graphql").unwrap())
//!     .api_key(ApiKey::new("da2-example").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, EndpointUrl};

use crate::error::ConfigError;

/// Configuration for the AppSync demo client.
///
/// This struct holds everything a client needs to talk to the API: the
/// GraphQL endpoint URL and the static API key sent in the `x-api-key`
/// header. There is no other authentication flow.
///
/// # Thread Safety
///
/// `AppSyncConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl};
///
/// let config = AppSyncConfig::builder()
///     .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
///     .api_key(ApiKey::new("da2-example").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://example.com/graphql");
/// ```
#[derive(Clone, Debug)]
pub struct AppSyncConfig {
    endpoint: EndpointUrl,
    api_key: ApiKey,
}

impl AppSyncConfig {
    /// Creates a new builder for constructing an `AppSyncConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use personalize_api::{ApiKey, AppSyncConfig, EndpointUrl};
    ///
    /// let config = AppSyncConfig::builder()
    ///     .endpoint(EndpointUrl::new("https://example.com/graphql").unwrap())
    ///     .api_key(ApiKey::new("da2-example").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> AppSyncConfigBuilder {
        AppSyncConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

/// Builder for constructing [`AppSyncConfig`] instances.
///
/// Both fields are required; [`build`](Self::build) fails with
/// [`ConfigError::MissingRequiredField`] when either is unset.
#[derive(Debug, Default)]
pub struct AppSyncConfigBuilder {
    endpoint: Option<EndpointUrl>,
    api_key: Option<ApiKey>,
}

impl AppSyncConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Builds the [`AppSyncConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `api_key` has not been set.
    pub fn build(self) -> Result<AppSyncConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(AppSyncConfig { endpoint, api_key })
    }
}
