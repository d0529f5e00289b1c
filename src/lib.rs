//! # AppSync Personalize Demo Client
//!
//! A small Rust client for an AWS AppSync GraphQL demo API backed by Amazon
//! Personalize, together with the demo page that exercises it.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AppSyncConfig`] and [`AppSyncConfigBuilder`]
//! - Validated newtypes for the endpoint URL and API key
//! - An async HTTP transport that sends request bodies verbatim and returns
//!   raw response text regardless of status code
//! - A GraphQL client ([`GraphqlClient`]) over that transport
//! - The literal demo payloads ([`queries`]) and the demo page itself
//!   ([`demo`]), which renders `<h2>{label}</h2>{raw response}` sections
//!
//! ## Quick Start
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
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use personalize_api::{GraphqlClient, queries::SIMILAR_ITEMS_PAYLOAD};
//!
//! let client = GraphqlClient::new(&config);
//! let response = client.send(SIMILAR_ITEMS_PAYLOAD).await?;
//! println!("{}", response.body);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Opaque responses**: Response bodies are never parsed or rewritten; the
//!   demo echoes exactly what the server sent

pub mod clients;
pub mod config;
pub mod demo;
pub mod error;
pub mod queries;

// Re-export public types at crate root for convenience
pub use clients::{GraphqlClient, GraphqlError, HttpClient, HttpError, HttpResponse};
pub use config::{ApiKey, AppSyncConfig, AppSyncConfigBuilder, EndpointUrl};
pub use error::ConfigError;
