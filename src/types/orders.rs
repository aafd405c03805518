//! Order records and order placement request/response types.

use serde::{Deserialize, Serialize};

use crate::types::enums::*;
use crate::types::positions::{OptionSymbol, UniversalSymbol};

// ---------------------------------------------------------------------------
// Order records
// ---------------------------------------------------------------------------

/// One order as reported by the brokerage.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountOrderRecord {
    #[serde(default)]
    pub brokerage_order_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub universal_symbol: Option<UniversalSymbol>,
    #[serde(default)]
    pub option_symbol: Option<OptionSymbol>,
    #[serde(default)]
    pub total_quantity: Option<f64>,
    #[serde(default)]
    pub filled_quantity: Option<f64>,
    /// String over the wire at some brokerages; accept either.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub execution_price: Option<f64>,
    #[serde(default)]
    pub limit_price: Option<f64>,
    #[serde(default)]
    pub quote_currency: Option<crate::types::accounts::Currency>,
    #[serde(default)]
    pub order_type: Option<String>,
    /// ISO 8601 timestamp; lexicographically sortable.
    #[serde(default)]
    pub time_placed: Option<String>,
}

impl AccountOrderRecord {
    /// Symbol to display: option ticker when present, else the equity symbol.
    pub fn display_symbol(&self) -> Option<&str> {
        self.option_symbol
            .as_ref()
            .and_then(|o| o.ticker.as_deref())
            .or_else(|| {
                self.universal_symbol
                    .as_ref()
                    .and_then(|u| u.symbol.as_deref())
            })
    }

    /// Currency of the execution price.
    pub fn price_currency(&self) -> Option<&str> {
        self.option_symbol
            .as_ref()
            .and_then(|o| o.underlying_symbol.as_ref())
            .or(self.universal_symbol.as_ref())
            .and_then(|u| u.currency.as_ref())
            .and_then(|c| c.code.as_deref())
    }
}

/// Accept a number that some brokerages send as a JSON string.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<NumOrStr>::deserialize(deserializer)? {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.parse().ok(),
        None => None,
    })
}

/// Response from `GET /accounts/{accountId}/recentOrders`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentOrdersResponse {
    #[serde(default)]
    pub orders: Option<Vec<AccountOrderRecord>>,
}

// ---------------------------------------------------------------------------
// Simple (single-instrument) orders
// ---------------------------------------------------------------------------

/// Request body for placing an equity order.
///
/// Exactly one of `units` and `notional_value` is set; the two sizing modes
/// are mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    pub account_id: String,
    pub symbol: String,
    pub action: OrderAction,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub time_in_force: TimeInForce,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notional_value: Option<f64>,
}

/// Request body for replacing a working order.
///
/// Used by `PUT /accounts/{accountId}/orders/{brokerageOrderId}`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceOrderRequest {
    pub symbol: String,
    pub action: OrderAction,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub time_in_force: TimeInForce,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
}

/// Instrument block of a crypto simple order.
#[derive(Debug, Clone, Serialize)]
pub struct TradingInstrument {
    pub symbol: String,
    #[serde(rename = "type")]
    pub instrument_type: &'static str,
}

/// Request body for a crypto simple order.
///
/// Used by `POST /accounts/{accountId}/trading/simple`.
#[derive(Debug, Clone, Serialize)]
pub struct SimpleOrderRequest {
    pub instrument: TradingInstrument,
    pub side: OrderAction,
    #[serde(rename = "type")]
    pub order_type: String,
    pub time_in_force: TimeInForce,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
}

/// Request body for cancelling a working order.
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderRequest {
    pub brokerage_order_id: String,
}

// ---------------------------------------------------------------------------
// Multi-leg orders
// ---------------------------------------------------------------------------

/// Instrument block of a multi-leg order leg.
#[derive(Debug, Clone, Serialize)]
pub struct MlegInstrument {
    pub instrument_type: MlegInstrumentType,
    /// OCC symbol for option legs.
    pub symbol: String,
}

/// One leg of a multi-leg order request.
#[derive(Debug, Clone, Serialize)]
pub struct MlegLeg {
    pub instrument: MlegInstrument,
    pub action: MlegAction,
    pub units: u32,
}

/// Request body for a multi-leg option order.
///
/// Used by `POST /accounts/{accountId}/trading/mleg`.
#[derive(Debug, Clone, Serialize)]
pub struct MlegOrderRequest {
    pub order_type: &'static str,
    pub time_in_force: TimeInForce,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<f64>,
    pub price_effect: PriceEffect,
    pub legs: Vec<MlegLeg>,
}

/// Response from any order placement, replacement, or cancellation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub brokerage_order_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
