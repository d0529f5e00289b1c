//! HTTP response types for the AppSync demo client.
//!
//! This module provides the [`HttpResponse`] type for accessing API response
//! data. The body is kept as raw text: the demo treats responses as opaque
//! blobs and never parses or interprets them.

use std::collections::HashMap;

/// An HTTP response from the AppSync API.
///
/// Contains the response status code, headers, and the raw body text exactly
/// as received from the server, with no transformation, escaping, or
/// whitespace changes.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text, unmodified.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-amzn-requestid` header value, if present.
    ///
    /// AppSync attaches this ID to every response; it is useful for
    /// correlating log output with the service's own request logs.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-amzn-requestid")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
