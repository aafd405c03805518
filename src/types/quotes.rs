//! Per-instrument quote types.

use serde::Deserialize;

use crate::types::positions::UniversalSymbol;

/// A quote for a single instrument.
///
/// Returned by `GET /accounts/{accountId}/quotes`, keyed by ticker for
/// equities and OCC symbol for options. Brokerages frequently omit one side
/// of the book; every price field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolQuote {
    #[serde(default)]
    pub symbol: Option<UniversalSymbol>,
    #[serde(default)]
    pub bid_price: Option<f64>,
    #[serde(default)]
    pub ask_price: Option<f64>,
    #[serde(default)]
    pub last_trade_price: Option<f64>,
    #[serde(default)]
    pub bid_size: Option<f64>,
    #[serde(default)]
    pub ask_size: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl SymbolQuote {
    /// Currency code of the quoted prices.
    pub fn currency(&self) -> Option<&str> {
        self.symbol
            .as_ref()
            .and_then(|s| s.currency.as_ref())
            .and_then(|c| c.code.as_deref())
    }
}
