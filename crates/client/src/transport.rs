//! The single chokepoint for network access.
//!
//! Every backend call goes through [`ApiClient::fetch`], which joins the
//! endpoint onto the configured base URL, sends the session cookies, and
//! turns any non-success response into an [`ApiError`].

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared_types::{ApiError, ClientConfig};

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Method, headers and body for one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Attach a JSON body and the matching `Content-Type` header.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::request_failed(format!("Failed to encode request: {e}")))?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(value);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client bound to one backend.
///
/// Cheap to clone; clones share the connection pool and, on native targets,
/// the cookie store that carries the session between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

// Clients compare by the backend they target; the pool and cookie jar are
// not part of equality.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = build_http_client()
            .map_err(|e| ApiError::request_failed(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request against `endpoint` (relative to the base URL).
    ///
    /// Returns the parsed JSON body, or `None` when the body is empty or not
    /// JSON. A non-2xx status fails with the body's `message` when it has one.
    pub async fn fetch(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.config.endpoint_url(endpoint);
        let method = options.method.clone();
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(options.method, &url)
            .headers(options.headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "api request did not complete");
            ApiError::network(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::network)?;
        let data = parse_body(&bytes);

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), data.as_ref());
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                error = %err,
                "api request failed"
            );
            return Err(err);
        }

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            has_body = data.is_some(),
            "api response"
        );
        Ok(data)
    }

    /// [`fetch`](Self::fetch) and decode a body that must be present.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let data = self
            .fetch(endpoint, options)
            .await?
            .ok_or_else(|| ApiError::malformed("empty body"))?;
        serde_json::from_value(data).map_err(ApiError::malformed)
    }

    /// [`fetch`](Self::fetch) and decode the body if there is one.
    pub async fn fetch_optional<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        match self.fetch(endpoint, options).await? {
            Some(data) => serde_json::from_value(data)
                .map(Some)
                .map_err(ApiError::malformed),
            None => Ok(None),
        }
    }
}

/// Parse a response body as JSON. Empty, non-JSON and `null` bodies are absent.
fn parse_body(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .filter(|v| !v.is_null())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

// The browser owns cookies; `fetch_credentials_include` is set per request.
#[cfg(target_arch = "wasm32")]
fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}
