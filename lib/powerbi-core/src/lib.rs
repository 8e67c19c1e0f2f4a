//! Core types and traits for the Power BI REST client.
//!
//! This crate provides the foundational types used by `powerbi`:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`RequestBody`] - Raw or JSON request payload
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Core client trait for HTTP execution
//! - [`ToQueryPairs`] - Trait for converting option structs to query parameter pairs
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod error;
mod method;
pub mod prelude;
mod query;
mod request;
mod response;

pub use body::{ContentType, RequestBody, from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use method::Method;
pub use query::{ToQueryPairs, add_options, check_path, encode_query, escape_path};
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
