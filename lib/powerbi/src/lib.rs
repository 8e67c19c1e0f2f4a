//! Typed async client for the Power BI REST API.
//!
//! Every endpoint is a method on a service obtained from [`PowerBiClient`].
//! Each call resolves a path against the service root, serializes the body,
//! sends it through a bearer-authenticated transport, and decodes the JSON
//! response. Statuses of 400 or more come back as [`Error::Http`].
//!
//! # Example
//!
//! ```ignore
//! use powerbi::PowerBiClient;
//! use powerbi::types::ListGroupsOptions;
//!
//! let client = PowerBiClient::from_token(token);
//!
//! let options = ListGroupsOptions { top: 10, ..Default::default() };
//! for group in client.groups().list(Some(&options)).await? {
//!     println!("{} {}", group.id, group.name);
//! }
//! ```

// `#[derive(Query)]` expands to `::powerbi::ToQueryPairs`, also inside this crate.
extern crate self as powerbi;

mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;
pub mod services;
pub mod types;

// Re-export client types
pub use api_client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PowerBiClient, PowerBiClientBuilder};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use powerbi_core::{
    ContentType, Error, HttpClient, Method, Request, RequestBody, RequestBuilder, Response,
    Result, ToQueryPairs, add_options, check_path, encode_query, escape_path, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use powerbi_core::{StatusCode, header};

pub use url;

// Re-export macros
pub use powerbi_macro::Query;
