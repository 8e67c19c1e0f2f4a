//! Prelude module for convenient imports.
//!
//! ```ignore
//! use powerbi::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Error, HttpClient, HyperClient, Method, PowerBiClient, Query, Request,
    RequestBody, Response, Result, StatusCode, ToQueryPairs,
};
pub use serde::{Deserialize, Serialize};
