//! Error types for the `snaptrade-cli` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, SnapTradeError>`.
//!
//! [`SnapTradeError`] covers:
//! - **API errors** — Structured error responses from SnapTrade
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **Malformed symbols** — OCC option symbols that fail to parse
//! - **Invalid order parameters** — Client-side order validation errors
//! - **Settings errors** — Local profile/config file problems

use std::fmt;

/// Error response returned by the SnapTrade API.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// SnapTrade error code (e.g. "1083").
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub detail: Option<String>,
    /// HTTP status echoed in the body, when present.
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.detail.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by the `snaptrade-cli` crate.
#[derive(Debug, thiserror::Error)]
pub enum SnapTradeError {
    /// An error response returned by the SnapTrade REST API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An OCC option symbol that does not match the fixed-width format.
    #[error("malformed OCC symbol: {0}")]
    MalformedSymbol(String),

    /// An order parameter (strike, expiration, quantity) failed validation.
    #[error("invalid order parameter: {0}")]
    InvalidOrderParameter(String),

    /// A local filesystem error (settings file, config dir).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The local settings file is unusable.
    #[error("settings error: {0}")]
    Settings(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SnapTradeError>;
