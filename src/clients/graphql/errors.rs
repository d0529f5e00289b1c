//! GraphQL-specific error types.

use thiserror::Error;

use crate::clients::errors::HttpError;

/// Errors that can occur when executing GraphQL queries.
///
/// GraphQL-level errors (validation errors, resolver errors) are returned by
/// AppSync with HTTP 200 and live inside the response body; they are never
/// surfaced through this type. Only transport failures appear here.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP transport error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
