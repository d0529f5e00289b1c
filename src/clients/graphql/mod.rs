//! GraphQL client for the AppSync demo API.
//!
//! This module provides GraphQL query execution over the shared HTTP
//! transport.

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
