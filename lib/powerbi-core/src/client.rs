//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between the Power BI request pipeline and the
//! network. The default implementation lives in the `powerbi` crate; tests
//! and custom transports implement it directly.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// An implementation delivers one request and hands back whatever the server
/// answered, whatever its status. Rejecting statuses of 400 or more is the
/// caller's concern.
///
/// Implementations must be safe to share between tasks and must not mutate
/// anything observable by the caller: requests are passed by value.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be delivered:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: HttpClient> HttpClient for Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        T::execute(self, request)
    }
}

impl<T: HttpClient> HttpClient for &T {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        T::execute(self, request)
    }
}
