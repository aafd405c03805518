//! Equity position and option holding types.
//!
//! SnapTrade nests symbols heavily (`position.symbol.symbol.symbol` for the
//! ticker string); the structs here mirror that shape rather than flattening
//! it, so deserialization stays a direct mapping.

use serde::Deserialize;

use crate::types::accounts::Currency;

/// A tradable instrument reference.
#[derive(Debug, Clone, Deserialize)]
pub struct UniversalSymbol {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

/// Outer symbol wrapper on an equity position.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionSymbol {
    #[serde(default)]
    pub symbol: Option<UniversalSymbol>,
}

/// A single equity position.
///
/// Returned by `GET /accounts/{accountId}/positions`.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub symbol: Option<PositionSymbol>,
    /// Can be negative for short positions.
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default)]
    pub average_purchase_price: Option<f64>,
}

/// An option instrument reference.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionSymbol {
    /// OCC ticker for the contract.
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub option_type: Option<String>,
    #[serde(default)]
    pub strike_price: Option<f64>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub underlying_symbol: Option<UniversalSymbol>,
}

/// Outer symbol wrapper on an option holding.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionPositionSymbol {
    #[serde(default)]
    pub option_symbol: Option<OptionSymbol>,
}

/// A single option holding.
///
/// Returned by `GET /accounts/{accountId}/options`. The average purchase
/// price is **per contract**; divide by 100 for the per-share-equivalent
/// convention used everywhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionPosition {
    #[serde(default)]
    pub symbol: Option<OptionPositionSymbol>,
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default)]
    pub average_purchase_price: Option<f64>,
}
