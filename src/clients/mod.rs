//! HTTP and GraphQL clients for the AppSync demo API.
//!
//! This module contains the transport layer ([`HttpClient`],
//! [`HttpResponse`], [`HttpError`]) and the GraphQL client built on top of it
//! ([`graphql::GraphqlClient`]).

pub mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::HttpError;
pub use graphql::{GraphqlClient, GraphqlError};
pub use http_client::{HttpClient, MAX_REDIRECTS};
pub use http_response::HttpResponse;
