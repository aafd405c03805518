//! Core HTTP client for the SnapTrade REST API.
//!
//! The [`SnapTradeClient`] struct is the main entry point for interacting
//! with all SnapTrade REST endpoints. It wraps [`reqwest::Client`] with
//! SnapTrade's request authentication (client id + timestamp query
//! parameters and an HMAC-SHA256 `Signature` header) and provides typed
//! `get`, `post`, `put`, and `delete` methods.
//!
//! API endpoint methods are added to `SnapTradeClient` via `impl` blocks in
//! the [`crate::api`] module.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use reqwest::Method;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::Sha256;

use crate::constants::{API_BASE_URL, REQUEST_ID_HEADER, SIGNATURE_HEADER};
use crate::error::{ApiErrorBody, Result, SnapTradeError};

type HmacSha256 = Hmac<Sha256>;

/// Query parameters for a request, as borrowed key / owned value pairs.
pub type Query<'a> = [(&'a str, String)];

/// Core HTTP client for the SnapTrade REST API.
///
/// Every request carries the partner `clientId` and a unix `timestamp` as
/// query parameters, plus a `Signature` header computed as the base64
/// HMAC-SHA256 (keyed by the consumer key) of a canonical JSON object
/// `{"content": <body or null>, "path": <path>, "query": <query string>}`.
///
/// # Example
///
/// ```no_run
/// use snaptrade_cli::client::SnapTradeClient;
///
/// # #[tokio::main]
/// # async fn main() -> snaptrade_cli::error::Result<()> {
/// let client = SnapTradeClient::new("MYAPP", "consumer-key");
/// let status = client.api_status().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SnapTradeClient {
    http: reqwest::Client,
    /// SnapTrade partner client id.
    client_id: String,
    /// Consumer key used to sign every request.
    consumer_key: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
}

/// Canonical object serialized and signed for each request.
///
/// Field order matters: the signature is computed over the exact JSON
/// serialization, so `content`, `path`, `query` must stay in this order.
#[derive(Serialize)]
struct SignaturePayload<'a> {
    content: Option<&'a serde_json::Value>,
    path: &'a str,
    query: &'a str,
}

impl SnapTradeClient {
    /// Create a new `SnapTradeClient` with the given client id and consumer
    /// key, pointing at the production API.
    pub fn new(client_id: impl Into<String>, consumer_key: impl Into<String>) -> Self {
        Self::with_base_url(client_id, consumer_key, API_BASE_URL)
    }

    /// Create a new `SnapTradeClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(
        client_id: impl Into<String>,
        consumer_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            client_id: client_id.into(),
            consumer_key: consumer_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the partner client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<R> {
        let resp = self.request(Method::GET, path, query, None).await?;
        self.handle_response(resp).await
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<R> {
        let content = serde_json::to_value(body)?;
        let resp = self.request(Method::POST, path, query, Some(content)).await?;
        self.handle_response(resp).await
    }

    /// Perform a POST request and return the deserialized response together
    /// with the SnapTrade request id header, when present.
    ///
    /// Trading endpoints use this so the caller can surface the request id
    /// for support escalation.
    pub async fn post_with_request_id<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<(R, Option<String>)> {
        let content = serde_json::to_value(body)?;
        let resp = self.request(Method::POST, path, query, Some(content)).await?;
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let parsed = self.handle_response(resp).await?;
        Ok((parsed, request_id))
    }

    /// Like [`Self::post_with_request_id`], for PUT requests.
    pub async fn put_with_request_id<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<(R, Option<String>)> {
        let content = serde_json::to_value(body)?;
        let resp = self.request(Method::PUT, path, query, Some(content)).await?;
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let parsed = self.handle_response(resp).await?;
        Ok((parsed, request_id))
    }

    /// Perform a PUT request with a JSON body and deserialize the response.
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<R> {
        let content = serde_json::to_value(body)?;
        let resp = self.request(Method::PUT, path, query, Some(content)).await?;
        self.handle_response(resp).await
    }

    /// Perform a DELETE request and deserialize the JSON response.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<R> {
        let resp = self.request(Method::DELETE, path, query, None).await?;
        self.handle_response(resp).await
    }

    /// Perform a DELETE request that returns no useful body.
    pub async fn delete_no_content(&self, path: &str, query: &Query<'_>) -> Result<()> {
        let resp = self.request(Method::DELETE, path, query, None).await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Perform a POST request that returns no useful body.
    pub async fn post_no_content<B: Serialize>(
        &self,
        path: &str,
        query: &Query<'_>,
        body: &B,
    ) -> Result<()> {
        let content = serde_json::to_value(body)?;
        let resp = self.request(Method::POST, path, query, Some(content)).await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(self.parse_error_body(status, &body))
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build, sign, and send a request.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query<'_>,
        content: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(query.len() + 2);
        pairs.extend(query.iter().map(|(k, v)| (*k, v.clone())));
        pairs.push(("clientId", self.client_id.clone()));
        pairs.push(("timestamp", timestamp));

        let url = self.url(path);
        let signature = self.sign(path, &pairs, content.as_ref())?;
        tracing::debug!(%url, %method, "request");

        let mut req = self
            .http
            .request(method, &url)
            .query(&pairs)
            .header(SIGNATURE_HEADER, signature);
        if let Some(body) = &content {
            req = req.json(body);
        }

        Ok(req.send().await?)
    }

    /// Compute the base64 HMAC-SHA256 signature for a request.
    fn sign(
        &self,
        path: &str,
        pairs: &[(&str, String)],
        content: Option<&serde_json::Value>,
    ) -> Result<String> {
        let query_string = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let payload = SignaturePayload {
            content,
            path,
            query: &query_string,
        };
        let canonical = serde_json::to_string(&payload)?;

        let mut mac = HmacSha256::new_from_slice(self.consumer_key.as_bytes())
            .map_err(|_| SnapTradeError::Settings("consumer key is empty".into()))?;
        mac.update(canonical.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the deserialized body or a
    /// `SnapTradeError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(SnapTradeError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Try to parse the API's JSON error structure; fall back to a raw HTTP
    /// status error.
    pub(crate) fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> SnapTradeError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.code.is_some() || api_err.detail.is_some() {
                return SnapTradeError::Api(api_err);
            }
        }
        SnapTradeError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
