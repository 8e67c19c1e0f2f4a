//! The request pipeline shared by every endpoint.
//!
//! [`PowerBiClient`] resolves a relative path against the service root,
//! attaches the body and extra headers, hands the request to its
//! [`HttpClient`], and turns statuses of 400 or more into [`Error::Http`].

use std::time::Duration;

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::Layer;
use tower_service::Service;
use tracing::{debug, warn};
use url::Url;

use crate::client::BoxedService;
use crate::middleware::BearerAuthLayer;
use crate::services::{
    AdminService, DashboardsService, DatasetsService, EmbedTokenService, GroupsService,
    PushDatasetsService, ReportsService,
};
use crate::{
    ClientConfig, Error, HttpClient, HyperClient, HyperClientBuilder, Method, Request,
    RequestBody, Response, Result, check_path,
};

/// Root of the Power BI REST API for the signed-in user's organization.
pub const DEFAULT_BASE_URL: &str = "https://api.powerbi.com/v1.0/myorg/";

/// `User-Agent` sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("powerbi-rs/", env!("CARGO_PKG_VERSION"));

/// Typed client for the Power BI REST API.
///
/// Generic over the transport so tests and callers can plug in their own
/// [`HttpClient`]. The default transport is a [`HyperClient`] that injects
/// the bearer token.
///
/// The client holds no mutable state and can be shared between tasks.
///
/// # Example
///
/// ```ignore
/// use powerbi::PowerBiClient;
///
/// let client = PowerBiClient::from_token(token);
/// let groups = client.groups().list(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PowerBiClient<C = HyperClient> {
    client: C,
    base_url: Url,
    user_agent: String,
}

impl PowerBiClient<HyperClient> {
    /// Create a client for the public service authenticated with `token`.
    ///
    /// Surrounding whitespace in the token is ignored.
    #[must_use]
    pub fn from_token(token: impl AsRef<str>) -> Self {
        let transport = HyperClient::builder()
            .with_bearer_auth(token.as_ref().trim())
            .build();
        Self::new(transport)
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> PowerBiClientBuilder {
        PowerBiClientBuilder::default()
    }
}

impl<C> PowerBiClient<C> {
    /// Wrap a transport, targeting [`DEFAULT_BASE_URL`].
    ///
    /// The transport is responsible for authentication.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(client: C) -> Self {
        // Constant input, checked by `default_base_url_parses`.
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL");
        Self::with_url(client, base_url)
    }

    /// Wrap a transport, targeting a custom service root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` cannot be parsed.
    pub fn with_base_url(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self::with_url(client, Url::parse(base_url.as_ref())?))
    }

    /// Wrap a transport with a pre-parsed service root.
    #[must_use]
    pub fn with_url(client: C, base_url: Url) -> Self {
        Self {
            client,
            base_url: with_trailing_slash(base_url),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Replace the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Service root every path is resolved against. Always ends with `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying transport.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.client
    }

    /// Consume the client and return the underlying transport.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }

    /// Resolve a relative path (with an optional query string) against the
    /// service root.
    ///
    /// A leading `/` is ignored, so `groups` and `/groups` land on the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if `path` holds a `.` or `..`
    /// segment, and [`Error::InvalidUrl`] if the result is not a valid URL.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        check_path(relative)?;
        Ok(self.base_url.join(relative)?)
    }

    /// Decode a successful response into `T`.
    ///
    /// An empty or whitespace-only body decodes to `T::default()`, so list
    /// envelopes come back empty instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonDeserialization`] if the body is not a valid `T`.
    pub fn decode<T: DeserializeOwned + Default>(response: Response<Bytes>) -> Result<T> {
        if response.is_blank() {
            return Ok(T::default());
        }
        response.json()
    }

    /// Workspace endpoints.
    pub fn groups(&self) -> GroupsService<'_, C> {
        GroupsService::new(self)
    }

    /// Dataset endpoints inside a workspace.
    pub fn datasets(&self) -> DatasetsService<'_, C> {
        DatasetsService::new(self)
    }

    /// Report endpoints, in My workspace or inside a workspace.
    pub fn reports(&self) -> ReportsService<'_, C> {
        ReportsService::new(self)
    }

    /// Dashboard and tile endpoints in My workspace.
    pub fn dashboards(&self) -> DashboardsService<'_, C> {
        DashboardsService::new(self)
    }

    /// Embed token generation.
    pub fn embed_tokens(&self) -> EmbedTokenService<'_, C> {
        EmbedTokenService::new(self)
    }

    /// Organization-wide administration endpoints.
    pub fn admin(&self) -> AdminService<'_, C> {
        AdminService::new(self)
    }

    /// Push dataset endpoints: tables and rows supplied through the API.
    pub fn push_datasets(&self) -> PushDatasetsService<'_, C> {
        PushDatasetsService::new(self)
    }
}

impl<C: HttpClient> PowerBiClient<C> {
    /// Send one request and classify the outcome.
    ///
    /// `header_kv` holds extra headers as `key, value, key, value, ...`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`], [`Error::InvalidRequest`] or
    ///   [`Error::MalformedHeaders`] before any I/O
    /// - the transport's own error, unchanged
    /// - [`Error::Http`] for a status of 400 or more, carrying the body text
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        header_kv: &[&str],
    ) -> Result<Response<Bytes>> {
        let url = self.resolve(path)?;

        if header_kv.len() % 2 != 0 {
            return Err(Error::MalformedHeaders {
                len: header_kv.len(),
            });
        }

        let mut builder = Request::builder(method, url)
            .header("Accept", "application/json")
            .header("User-Agent", self.user_agent.as_str());
        if let Some(body) = body {
            builder = builder.request_body(body);
        }
        // Caller headers go last so they replace the defaults above.
        for pair in header_kv.chunks_exact(2) {
            if let [name, value] = pair {
                builder = builder.header(*name, *value);
            }
        }

        debug!(%method, path, "dispatching request");
        let response = self.client.execute(builder.build()).await?;

        if response.is_rejection() {
            let status = response.status();
            let error = Error::from_status(status, response.body());
            warn!(%method, path, status, "request rejected");
            return Err(error);
        }

        Ok(response)
    }

    /// `GET` without a body.
    ///
    /// # Errors
    ///
    /// See [`PowerBiClient::execute`].
    pub async fn get(&self, path: &str) -> Result<Response<Bytes>> {
        self.execute(Method::Get, path, None, &[]).await
    }

    /// `DELETE` without a body.
    ///
    /// # Errors
    ///
    /// See [`PowerBiClient::execute`].
    pub async fn delete(&self, path: &str) -> Result<Response<Bytes>> {
        self.execute(Method::Delete, path, None, &[]).await
    }

    /// `POST` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::JsonSerialization`] before any I/O, otherwise see
    /// [`PowerBiClient::execute`].
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response<Bytes>> {
        let body = RequestBody::json(body)?;
        self.execute(Method::Post, path, Some(body), &[]).await
    }

    /// `POST` with `text` sent as-is; empty text sends no body.
    ///
    /// # Errors
    ///
    /// See [`PowerBiClient::execute`].
    pub async fn post_raw(&self, path: &str, text: impl Into<String>) -> Result<Response<Bytes>> {
        let body = RequestBody::raw(text);
        self.execute(Method::Post, path, Some(body), &[]).await
    }

    /// `PUT` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::JsonSerialization`] before any I/O, otherwise see
    /// [`PowerBiClient::execute`].
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response<Bytes>> {
        let body = RequestBody::json(body)?;
        self.execute(Method::Put, path, Some(body), &[]).await
    }

    /// `PATCH` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::JsonSerialization`] before any I/O, otherwise see
    /// [`PowerBiClient::execute`].
    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response<Bytes>> {
        let body = RequestBody::json(body)?;
        self.execute(Method::Patch, path, Some(body), &[]).await
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Builder for a [`PowerBiClient`] over the default transport.
///
/// # Example
///
/// ```ignore
/// use powerbi::PowerBiClient;
/// use powerbi::middleware::LoggingLayer;
/// use std::time::Duration;
///
/// let client = PowerBiClient::builder()
///     .token(token)
///     .connect_timeout(Duration::from_secs(5))
///     .layer(LoggingLayer::debug())
///     .build()?;
/// ```
#[derive(Default)]
pub struct PowerBiClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    user_agent: Option<String>,
    transport: HyperClientBuilder,
}

impl std::fmt::Debug for PowerBiClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PowerBiClientBuilder")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("transport", &self.transport)
            .finish()
    }
}

impl PowerBiClientBuilder {
    /// Access token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn token(mut self, token: impl AsRef<str>) -> Self {
        self.token = Some(token.as_ref().trim().to_string());
        self
    }

    /// Service root, [`DEFAULT_BASE_URL`] when unset.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// `User-Agent` header value, [`DEFAULT_USER_AGENT`] when unset.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the whole transport configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.transport = self.transport.config(config);
        self
    }

    /// Bound every request by `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.transport = self.transport.connect_timeout(timeout);
        self
    }

    /// Add a Tower layer around the authenticated transport.
    ///
    /// Layers never see the `Authorization` header, which is added innermost.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request<Bytes>>>::Future: Send,
    {
        self.transport = self.transport.layer(layer);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRequest`] if no token was set
    /// - [`Error::InvalidUrl`] if the base URL cannot be parsed
    pub fn build(self) -> Result<PowerBiClient<HyperClient>> {
        let token = self
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::invalid_request("an access token is required"))?;

        let transport = self
            .transport
            .innermost_layer(BearerAuthLayer::new(token))
            .build();

        let client = match self.base_url {
            Some(base_url) => PowerBiClient::with_base_url(transport, base_url)?,
            None => PowerBiClient::new(transport),
        };
        Ok(match self.user_agent {
            Some(user_agent) => client.user_agent(user_agent),
            None => client,
        })
    }
}
