//! Tower middleware layers for the Power BI HTTP transport.
//!
//! Layers wrap the boxed transport service built by
//! [`HyperClientBuilder`](crate::HyperClientBuilder). Each one added through
//! `.layer()` wraps everything added before it, so the last layer added is
//! the first to see a request.
//!
//! # Available Layers
//!
//! - [`BearerAuthLayer`] - Adds `Authorization: Bearer <token>` header
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//!
//! # Example
//!
//! ```ignore
//! use powerbi::HyperClient;
//! use powerbi::middleware::LoggingLayer;
//!
//! let transport = HyperClient::builder()
//!     .with_bearer_auth(token)
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod bearer_auth;
mod logging;

pub use bearer_auth::{BearerAuth, BearerAuthLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
