//! Brokerage authorization (connection) and connection portal types.

use serde::{Deserialize, Serialize};

/// Request body for generating a connection portal link.
///
/// Used by `POST /snapTrade/login`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    /// Pre-select a brokerage in the portal, by slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(rename = "connectionType", skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    /// Id of an existing (disabled) authorization to re-establish instead of
    /// creating a new one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconnect: Option<String>,
}

/// A brokerage as referenced by an authorization.
#[derive(Debug, Clone, Deserialize)]
pub struct Brokerage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A live link between a SnapTrade user and a brokerage login.
///
/// Returned by `GET /authorizations`.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerageAuthorization {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub brokerage: Option<Brokerage>,
}

/// Connection portal login link.
///
/// Returned by `POST /snapTrade/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRedirect {
    #[serde(default)]
    pub redirect_uri: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}
