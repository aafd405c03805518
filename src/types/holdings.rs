//! Combined account holdings types.
//!
//! The holdings endpoint bundles the account record, balances, positions,
//! and recent orders into one payload. Its position shape differs from the
//! standalone positions endpoint: the symbol wrapper carries either an
//! equity symbol or an option symbol.

use serde::Deserialize;

use crate::types::accounts::{Account, Balance, Currency};
use crate::types::orders::AccountOrderRecord;
use crate::types::positions::{OptionSymbol, UniversalSymbol};

/// Symbol wrapper on a holdings position, equity or option.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingsSymbol {
    #[serde(default)]
    pub symbol: Option<UniversalSymbol>,
    #[serde(default)]
    pub option_symbol: Option<OptionSymbol>,
}

/// One position as reported by the holdings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingsPosition {
    #[serde(default)]
    pub symbol: Option<HoldingsSymbol>,
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl HoldingsPosition {
    /// Symbol to display: equity symbol when present, else the option ticker.
    pub fn display_symbol(&self) -> Option<&str> {
        let wrapper = self.symbol.as_ref()?;
        wrapper
            .symbol
            .as_ref()
            .and_then(|s| s.symbol.as_deref())
            .or_else(|| wrapper.option_symbol.as_ref().and_then(|o| o.ticker.as_deref()))
    }

    /// Whether this is an option holding.
    pub fn is_option(&self) -> bool {
        self.symbol
            .as_ref()
            .is_some_and(|s| s.option_symbol.is_some())
    }
}

/// Total account value block on the holdings payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingsTotalValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Response from `GET /accounts/{accountId}/holdings`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountHoldings {
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub balances: Option<Vec<Balance>>,
    #[serde(default)]
    pub positions: Option<Vec<HoldingsPosition>>,
    #[serde(default)]
    pub orders: Option<Vec<AccountOrderRecord>>,
    #[serde(default)]
    pub total_value: Option<HoldingsTotalValue>,
}
