//! Request body handling and JSON helpers.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of an outgoing request.
///
/// A few endpoints take a bare value instead of a JSON document, so the
/// choice between sending text as-is and serializing a structure is made
/// explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Text sent uninterpreted, without a content type. Empty text means no body.
    Raw(String),
    /// A serialized JSON document, sent with `Content-Type: application/json`.
    Json(Bytes),
}

impl RequestBody {
    /// Serialize `value` into a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::JsonSerialization`] if serialization fails.
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self> {
        to_json(value).map(Self::Json)
    }

    /// Wrap text to be sent as-is.
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Content type header implied by this body, if any.
    #[must_use]
    pub const fn content_type(&self) -> Option<ContentType> {
        match self {
            Self::Raw(_) => None,
            Self::Json(_) => Some(ContentType::Json),
        }
    }

    /// Bytes to put on the wire, `None` when nothing should be sent.
    #[must_use]
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Self::Raw(text) if text.is_empty() => None,
            Self::Raw(text) => Some(Bytes::from(text)),
            Self::Json(bytes) => Some(bytes),
        }
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use powerbi_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Rebind { #[serde(rename = "datasetId")] dataset_id: String }
///
/// let body = Rebind { dataset_id: "cfafbeb1".to_string() };
/// let bytes = to_json(&body).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"datasetId":"cfafbeb1"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails; the message carries the
/// path of the offending field (e.g. `value[0].id`).
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
