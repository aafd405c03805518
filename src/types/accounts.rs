//! Account, balance, and user registration types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User registration
// ---------------------------------------------------------------------------

/// Request body for registering a new SnapTrade user.
///
/// Used by `POST /snapTrade/registerUser`. The user endpoints are the one
/// corner of the API that speaks camelCase.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Response from registering a new SnapTrade user.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userSecret")]
    pub user_secret: String,
}

/// The per-user credential pair carried on every user-scoped request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuth {
    pub user_id: String,
    pub user_secret: String,
}

impl UserAuth {
    /// The query parameters identifying this user.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("userId", self.user_id.clone()),
            ("userSecret", self.user_secret.clone()),
        ]
    }
}

/// Partner (API credential) details.
///
/// Returned by `GET /snapTrade/partners`; fetching it doubles as a
/// credential validity check.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub allows_trading: Option<bool>,
    /// Brokerages the partner is allowed to connect.
    #[serde(default)]
    pub allowed_brokerages: Option<Vec<AllowedBrokerage>>,
}

/// One brokerage available to this partner.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowedBrokerage {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub allows_trading: Option<bool>,
}

/// API status payload from `GET /`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// A currency reference as it appears nested in symbols and balances.
#[derive(Debug, Clone, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Total account value with its currency code.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalanceTotal {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Aggregate balance block on an account record.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    #[serde(default)]
    pub total: Option<AccountBalanceTotal>,
}

/// A connected brokerage account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub institution_name: Option<String>,
    /// Id of the brokerage authorization this account belongs to.
    #[serde(default)]
    pub brokerage_authorization: Option<String>,
    #[serde(default)]
    pub balance: Option<AccountBalance>,
}

impl Account {
    /// Total account value, when the brokerage reports one.
    pub fn total_value(&self) -> Option<f64> {
        self.balance.as_ref()?.total.as_ref()?.amount
    }

    /// Currency of the total account value.
    pub fn total_currency(&self) -> Option<&str> {
        self.balance.as_ref()?.total.as_ref()?.currency.as_deref()
    }
}

/// A per-currency balance entry for an account.
///
/// Returned by `GET /accounts/{accountId}/balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub cash: Option<f64>,
    #[serde(default)]
    pub buying_power: Option<f64>,
}
