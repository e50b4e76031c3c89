//! AniLiberty API client

use crate::api::{
    Ads, App, Auth, Catalog, Collections, Favorites, Franchises, Genres, Media, Otp, Profile,
    Releases, Schedule, Teams, Torrents, Views,
};
use crate::error::{AniLibertyError, ApiError};
use crate::query::QueryParams;
use crate::response::ApiResponse;
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

/// Default API base URL (without the version segment)
const DEFAULT_API_BASE: &str = "https://aniliberty.top/api";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Environment variables read by [`AniLiberty::from_env`]
const ENV_API_BASE: &str = "ANILIBERTY_API_BASE";
const ENV_TIMEOUT_MS: &str = "ANILIBERTY_TIMEOUT_MS";
const ENV_ACCESS_TOKEN: &str = "ANILIBERTY_ACCESS_TOKEN";

const USER_AGENT: &str = concat!("aniliberty-sdk/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// API Version
// ============================================================================

/// Version of the AniLiberty API the client talks to
///
/// The version selects both the URL prefix and the schema the response
/// shapes in [`crate::types`] are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiVersion {
    /// `/api/v1`
    #[default]
    V1,
}

impl ApiVersion {
    /// The URL path segment for this version
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Client
// ============================================================================

/// AniLiberty API client
///
/// Clones share the bearer token: logging in through one clone authenticates
/// all of them.
#[derive(Clone)]
pub struct AniLiberty {
    http: reqwest::Client,
    api_base: String,
    api_version: ApiVersion,
    timeout: Duration,
    headers: HeaderMap,
    access_token: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for AniLiberty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.access_token.read().as_ref().map(|_| "[REDACTED]");
        f.debug_struct("AniLiberty")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .field("access_token", &token)
            .finish()
    }
}

impl AniLiberty {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, AniLibertyError> {
        Self::builder().build()
    }

    /// Create a client configured from the environment
    ///
    /// Reads `ANILIBERTY_API_BASE`, `ANILIBERTY_TIMEOUT_MS` and
    /// `ANILIBERTY_ACCESS_TOKEN`; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, AniLibertyError> {
        Self::builder_from_vars(|name| std::env::var(name).ok())?.build()
    }

    fn builder_from_vars<F>(lookup: F) -> Result<AniLibertyBuilder, AniLibertyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(api_base) = lookup(ENV_API_BASE) {
            builder = builder.api_base(api_base);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|_| {
                AniLibertyError::Configuration(format!(
                    "{} must be a number of milliseconds, got '{}'",
                    ENV_TIMEOUT_MS, raw
                ))
            })?;
            builder = builder.timeout_ms(millis);
        }

        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(token);
        }

        Ok(builder)
    }

    /// Create a builder for more advanced configuration
    pub fn builder() -> AniLibertyBuilder {
        AniLibertyBuilder::new()
    }

    /// The configured API base URL, without the version segment
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// The URL every endpoint path is appended to (`{api_base}/{version}`)
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.api_version.as_str()
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ------------------------------------------------------------------------
    // Session token
    // ------------------------------------------------------------------------

    /// Authenticate subsequent calls with a bearer token
    ///
    /// Replaces any previously stored token.
    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write() = Some(token.into());
        debug!("access token stored");
    }

    /// Forget the bearer token
    pub fn clear_access_token(&self) {
        *self.access_token.write() = None;
        debug!("access token cleared");
    }

    /// The stored bearer token, if any
    pub fn access_token(&self) -> Option<String> {
        self.access_token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.read().is_some()
    }

    // ------------------------------------------------------------------------
    // API handles
    // ------------------------------------------------------------------------

    /// One-time password sign-in
    pub fn otp(&self) -> Otp<'_> {
        Otp { client: self }
    }

    /// Login, logout, social sign-in and password recovery
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// The authenticated user's profile
    pub fn profile(&self) -> Profile<'_> {
        Profile { client: self }
    }

    /// Personal collections (planned, watching, ...)
    pub fn collections(&self) -> Collections<'_> {
        Collections { client: self }
    }

    pub fn favorites(&self) -> Favorites<'_> {
        Favorites { client: self }
    }

    /// Watch history and episode timecodes
    pub fn views(&self) -> Views<'_> {
        Views { client: self }
    }

    pub fn ads(&self) -> Ads<'_> {
        Ads { client: self }
    }

    /// Catalog browsing and its reference dictionaries
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog { client: self }
    }

    pub fn franchises(&self) -> Franchises<'_> {
        Franchises { client: self }
    }

    pub fn genres(&self) -> Genres<'_> {
        Genres { client: self }
    }

    /// Releases, members and episodes
    pub fn releases(&self) -> Releases<'_> {
        Releases { client: self }
    }

    pub fn schedule(&self) -> Schedule<'_> {
        Schedule { client: self }
    }

    pub fn torrents(&self) -> Torrents<'_> {
        Torrents { client: self }
    }

    /// Search and service status
    pub fn app(&self) -> App<'_> {
        App { client: self }
    }

    pub fn media(&self) -> Media<'_> {
        Media { client: self }
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams { client: self }
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Perform one JSON exchange and classify it into an envelope
    ///
    /// Never fails: transport errors, timeouts and undecodable bodies all
    /// come back as [`ApiResponse::Failure`] with status 0.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<QueryParams>,
    ) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = match self.prepare(method, path, body, query.as_ref()) {
            Ok(request) => request,
            Err(error) => return ApiResponse::transport(error),
        };

        match self.exchange(request).await {
            Ok(reply) => reply.into_json_response(),
            Err(error) => ApiResponse::transport(error),
        }
    }

    /// Bodiless GET shorthand for [`Self::request`]
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<QueryParams>,
    ) -> ApiResponse<T> {
        self.request::<T, ()>(Method::GET, path, None, query).await
    }

    /// Perform one exchange whose success body is returned as raw bytes
    pub(crate) async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        query: Option<QueryParams>,
    ) -> ApiResponse<Vec<u8>> {
        let request = match self.prepare::<()>(method, path, None, query.as_ref()) {
            Ok(request) => request,
            Err(error) => return ApiResponse::transport(error),
        };

        match self.exchange(request).await {
            Ok(reply) => reply.into_bytes_response(),
            Err(error) => ApiResponse::transport(error),
        }
    }

    /// Base URL + path verbatim, followed by the query parameters in order
    pub(crate) fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url(), path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ApiError::new(format!("Invalid URL '{}': {}", raw, e)))?;
        if let Some(query) = query {
            query.append_to(&mut url);
        }
        Ok(url)
    }

    /// Default headers plus `Authorization` when a token is stored
    fn request_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = self.headers.clone();
        if let Some(token) = self.access_token.read().as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::new(format!("Invalid access token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn prepare<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&QueryParams>,
    ) -> Result<RequestBuilder, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, query)?;
        let headers = self.request_headers()?;
        debug!(method = %method, url = %url, "dispatching request");

        let carries_body = method_carries_body(&method);
        let mut request = self.http.request(method, url).headers(headers);

        if let Some(body) = body.filter(|_| carries_body) {
            let json = serde_json::to_vec(body).map_err(|e| {
                ApiError::new(format!("Failed to serialize request body: {}", e))
            })?;
            trace!(body = %String::from_utf8_lossy(&json), "request body");
            if !self.headers.contains_key(CONTENT_TYPE) {
                request = request.header(CONTENT_TYPE, "application/json");
            }
            request = request.body(json);
        }

        Ok(request)
    }

    /// Send the request and read the whole body within the timeout
    ///
    /// On expiry the in-flight future is dropped, which cancels the request
    /// and releases the timer.
    async fn exchange(&self, request: RequestBuilder) -> Result<Reply, ApiError> {
        let send = async {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let is_json = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|ct| ct.contains("application/json"));
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(Reply {
                status,
                is_json,
                body: body.to_vec(),
            })
        };

        match tokio::time::timeout(self.timeout, send).await {
            Ok(Ok(reply)) => {
                debug!(status = reply.status, bytes = reply.body.len(), "response received");
                Ok(reply)
            }
            Ok(Err(e)) => {
                let error = ApiError::from_reqwest_error(&e);
                warn!(error = %error, "request failed");
                Err(error)
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "request timed out");
                Err(ApiError::timed_out(self.timeout))
            }
        }
    }
}

/// Only these methods carry a JSON body; GET never does
fn method_carries_body(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

// ============================================================================
// Response classification
// ============================================================================

/// A fully read HTTP response
struct Reply {
    status: u16,
    is_json: bool,
    body: Vec<u8>,
}

impl Reply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON when the content type says so
    ///
    /// Empty bodies and a literal `null` count as absent.
    fn parse_json(&self) -> Result<Option<serde_json::Value>, ApiError> {
        if !self.is_json || self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<serde_json::Value>(&self.body) {
            Ok(serde_json::Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(ApiError::new(format!("Failed to parse response: {}", e))),
        }
    }

    fn into_failure<T>(self, parsed: Option<&serde_json::Value>) -> ApiResponse<T> {
        let error = parsed
            .and_then(ApiError::from_body)
            .unwrap_or_else(|| ApiError::http_status(self.status));
        ApiResponse::Failure {
            status: self.status,
            error,
        }
    }

    fn into_json_response<T: DeserializeOwned>(self) -> ApiResponse<T> {
        if !self.is_success() {
            let parsed = self.parse_json().ok().flatten();
            return self.into_failure(parsed.as_ref());
        }

        let status = self.status;
        match self.parse_json() {
            Ok(None) => ApiResponse::Success { status, data: None },
            Ok(Some(value)) => match serde_json::from_value::<T>(value) {
                Ok(data) => ApiResponse::Success {
                    status,
                    data: Some(data),
                },
                Err(e) => {
                    warn!(error = %e, "response body does not match the expected shape");
                    ApiResponse::transport(ApiError::new(format!(
                        "Failed to parse response: {}",
                        e
                    )))
                }
            },
            Err(error) => {
                warn!(error = %error, "malformed JSON in successful response");
                ApiResponse::transport(error)
            }
        }
    }

    fn into_bytes_response(self) -> ApiResponse<Vec<u8>> {
        if self.is_success() {
            return ApiResponse::Success {
                status: self.status,
                data: Some(self.body),
            };
        }
        let parsed = self.parse_json().ok().flatten();
        self.into_failure(parsed.as_ref())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for AniLiberty client configuration
///
/// Create with [`AniLiberty::builder()`]. Every setting is optional.
#[derive(Default)]
pub struct AniLibertyBuilder {
    api_base: Option<String>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    access_token: Option<String>,
}

impl std::fmt::Debug for AniLibertyBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AniLibertyBuilder")
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AniLibertyBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Set a custom API base URL (without the version segment)
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Set the request timeout (default: 30s)
    ///
    /// A zero duration keeps the default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the request timeout in milliseconds
    pub fn timeout_ms(self, millis: u64) -> Self {
        self.timeout(Duration::from_millis(millis))
    }

    /// Add a default header sent with every request
    ///
    /// Overrides the built-in `Content-Type` and `Accept` defaults when the
    /// names match.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Start the session already authenticated
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AniLiberty, AniLibertyError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                AniLibertyError::Configuration(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                AniLibertyError::Configuration(format!("Invalid value for header '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let timeout = self
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(AniLiberty {
            http,
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_version: self.api_version.unwrap_or_default(),
            timeout,
            headers,
            access_token: Arc::new(RwLock::new(self.access_token)),
        })
    }
}
