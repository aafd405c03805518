//! Shared constants for the SnapTrade REST API.

/// Default base URL for the SnapTrade REST API.
pub const API_BASE_URL: &str = "https://api.snaptrade.com/api/v1";

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Header on every response carrying the SnapTrade request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Multiplier between per-contract and per-share option prices.
pub const OPTION_CONTRACT_MULTIPLIER: f64 = 100.0;
