//! Account activity (transaction) types.

use serde::Deserialize;

use crate::types::accounts::Currency;
use crate::types::positions::{OptionSymbol, UniversalSymbol};

/// One account transaction: a trade, dividend, fee, transfer, and so on.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountActivity {
    #[serde(default)]
    pub symbol: Option<UniversalSymbol>,
    #[serde(default)]
    pub option_symbol: Option<OptionSymbol>,
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Signed; negative for outflows.
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
    /// ISO 8601 timestamp; lexicographically sortable.
    #[serde(default)]
    pub trade_date: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl AccountActivity {
    /// Symbol to display: equity symbol when present, else the option ticker.
    pub fn display_symbol(&self) -> Option<&str> {
        self.symbol
            .as_ref()
            .and_then(|s| s.symbol.as_deref())
            .or_else(|| self.option_symbol.as_ref().and_then(|o| o.ticker.as_deref()))
    }

    /// Currency code of the price/amount/fee fields.
    pub fn currency_code(&self) -> Option<&str> {
        self.currency.as_ref().and_then(|c| c.code.as_deref())
    }
}

/// Pagination block on the activities response.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityPagination {
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response from `GET /accounts/{accountId}/activities`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountActivitiesResponse {
    #[serde(default)]
    pub data: Option<Vec<AccountActivity>>,
    #[serde(default)]
    pub pagination: Option<ActivityPagination>,
}
