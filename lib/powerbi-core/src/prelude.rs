//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use powerbi_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Error, HttpClient, Method, Request, RequestBody, RequestBuilder, Response,
    Result, ToQueryPairs, from_json, to_json,
};
