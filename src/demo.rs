//! The demo page: two sequential GraphQL calls rendered as HTML fragments.
//!
//! This module reproduces the observable behavior of the original
//! proof-of-concept page. Each section writes `<h2>{label}</h2>` followed by
//! the raw response body. The heading is written before the request is made,
//! and a transport failure renders nothing after the heading: the page
//! proceeds as if an empty response had arrived, with the failure recorded
//! only in the logs.

use std::io::{self, Write};

use crate::clients::GraphqlClient;
use crate::config::{ApiKey, AppSyncConfig, EndpointUrl};
use crate::error::ConfigError;
use crate::queries::SIMILAR_ITEMS_PAYLOAD;

/// The demo API's GraphQL endpoint.
pub const DEMO_ENDPOINT: &str =
    "https://rnqpqhzuhjam5f2ignmiecqaw4.appsync-api.us-east-1.amazonaws.com/graphql";

/// The demo API's static API key.
///
/// Shipping an API key in source is a known weakness of the upstream demo,
/// carried over here because the key is the demo API's only credential.
pub const DEMO_API_KEY: &str = "da2-tfbfskktbfgdvkdqq6uagzemcq";

/// Builds the configuration for the public demo API.
///
/// # Errors
///
/// Returns [`ConfigError`] if the built-in endpoint or key constants fail
/// validation.
pub fn default_config() -> Result<AppSyncConfig, ConfigError> {
    AppSyncConfig::builder()
        .endpoint(EndpointUrl::new(DEMO_ENDPOINT)?)
        .api_key(ApiKey::new(DEMO_API_KEY)?)
        .build()
}

/// Renders one demo section: heading, one API call, raw response body.
///
/// Writes `<h2>{label}</h2>` to `out`, performs a single GraphQL call with
/// the given payload, and writes the raw response body with no
/// transformation. Non-2xx responses are rendered like any other; on a
/// transport failure the section ends after the heading and a warning is
/// logged.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails. API failures are
/// swallowed by design.
pub async fn render_section<W: Write>(
    client: &GraphqlClient,
    label: &str,
    payload: &str,
    out: &mut W,
) -> io::Result<()> {
    write!(out, "<h2>{label}</h2>")?;

    match client.send(payload).await {
        Ok(response) => {
            if !response.is_ok() {
                tracing::warn!(
                    code = response.code,
                    request_id = response.request_id(),
                    "non-success status for section {label:?}"
                );
            }
            out.write_all(response.body.as_bytes())?;
        }
        Err(err) => {
            tracing::warn!("request for section {label:?} failed: {err}");
        }
    }

    Ok(())
}

/// Runs the full demo page: two sections, sequentially, in a fixed order.
///
/// Both sections send [`SIMILAR_ITEMS_PAYLOAD`]. The upstream page passes the
/// similar-items payload to its "Personalized Items" call as well, and that
/// behavior is reproduced here unchanged.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn run_demo<W: Write>(config: &AppSyncConfig, out: &mut W) -> io::Result<()> {
    let client = GraphqlClient::new(config);

    render_section(&client, "Similar Items", SIMILAR_ITEMS_PAYLOAD, out).await?;
    // TODO: confirm with the API owners whether this section should send
    // USER_PERSONALIZATIONS_PAYLOAD instead of the upstream duplicate.
    render_section(&client, "Personalized Items", SIMILAR_ITEMS_PAYLOAD, out).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = default_config().unwrap();

        assert_eq!(config.endpoint().as_ref(), DEMO_ENDPOINT);
        assert_eq!(config.api_key().as_ref(), DEMO_API_KEY);
    }

    #[test]
    fn test_demo_endpoint_is_https() {
        assert!(DEMO_ENDPOINT.starts_with("https://"));
        assert!(DEMO_ENDPOINT.ends_with("/graphql"));
    }
}
