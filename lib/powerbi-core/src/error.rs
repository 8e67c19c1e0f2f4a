//! Error types for the Power BI client.
//!
//! Errors fall into four families, and callers tell them apart by variant:
//!
//! - local errors raised before any I/O (`InvalidUrl`, `MalformedHeaders`,
//!   `JsonSerialization`, `InvalidRequest`),
//! - transport errors passed through from the HTTP stack (`Connection`, `Tls`,
//!   `Timeout`),
//! - HTTP errors for delivered responses with a status of 400 or more (`Http`),
//! - decode errors for bodies that do not match the expected shape
//!   (`JsonDeserialization`).

use derive_more::{Display, Error, From};

/// Main error type for Power BI operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The service answered with a status code of 400 or more.
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code, always `>= 400`.
        status: u16,
        /// Response body text, or the standard reason phrase when the body was empty.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// A timeout configured on the transport elapsed.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// The request could not be assembled.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Extra headers were not given as `key, value` pairs.
    #[display("malformed headers: expected key/value pairs, got {len} items")]
    #[from(skip)]
    MalformedHeaders {
        /// Number of items supplied.
        len: usize,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "value[0].id").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Build the HTTP error for a rejected response.
    ///
    /// The message is the body text; an empty body falls back to the
    /// standard reason phrase for `status` (e.g. `Not Found`).
    #[must_use]
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = String::from_utf8_lossy(body).into_owned();
        let message = if message.is_empty() {
            reason_phrase(status)
        } else {
            message
        };
        Self::http(status, message)
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the error was raised before any network I/O.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest(_)
                | Self::MalformedHeaders { .. }
                | Self::JsonSerialization(_)
                | Self::InvalidUrl(_)
        )
    }

    /// Returns `true` if the response body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::JsonDeserialization { .. })
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the error message of an HTTP error.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Try to decode the message of an HTTP error as JSON.
    ///
    /// The service usually answers errors with
    /// `{"error":{"code":"...","message":"..."}}`.
    pub fn decode_message<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.message().map(|message| crate::from_json(message.as_bytes()))
    }
}

fn reason_phrase(status: u16) -> String {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}
