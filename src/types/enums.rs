//! Shared enum types that map directly to SnapTrade API string values.
//!
//! Variant names that cross the wire use `SCREAMING_SNAKE_CASE` to match the
//! JSON format expected by the SnapTrade API, so we suppress the Rust naming
//! convention lint for those.
#![allow(non_camel_case_types)]

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Option Type
// ---------------------------------------------------------------------------

/// Call or put side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    CALL,
    PUT,
}

impl OptionType {
    /// Single-character code used in OCC symbols.
    pub fn occ_char(self) -> char {
        match self {
            Self::CALL => 'C',
            Self::PUT => 'P',
        }
    }

    /// Construct from an OCC symbol type character.
    pub fn from_occ_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::CALL),
            'P' => Some(Self::PUT),
            _ => None,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CALL => write!(f, "CALL"),
            Self::PUT => write!(f, "PUT"),
        }
    }
}

// ---------------------------------------------------------------------------
// Order Action
// ---------------------------------------------------------------------------

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum OrderAction {
    BUY,
    SELL,
}

impl OrderAction {
    /// The opposite side. Used by spread constructions that flip the base
    /// action on selected legs.
    pub fn opposite(self) -> Self {
        match self {
            Self::BUY => Self::SELL,
            Self::SELL => Self::BUY,
        }
    }

    /// Price effect of a multi-leg order opened with this base action.
    pub fn price_effect(self) -> PriceEffect {
        match self {
            Self::BUY => PriceEffect::DEBIT,
            Self::SELL => PriceEffect::CREDIT,
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BUY => write!(f, "BUY"),
            Self::SELL => write!(f, "SELL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Order Type
// ---------------------------------------------------------------------------

/// Type of order.
///
/// Serializes to the PascalCase strings the equity order endpoints expect
/// (`"Market"`, `"Limit"`, …); the multi-leg and simple trading endpoints
/// use the `SCREAMING_SNAKE_CASE` aliases from [`OrderType::mleg_wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum OrderType {
    Market,
    Limit,
    Stop,
    StopLimit,
}

impl OrderType {
    /// Wire value for the multi-leg and simple trading endpoints.
    pub fn mleg_wire(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::Stop => "STOP_LOSS_MARKET",
            Self::StopLimit => "STOP_LOSS_LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "Market"),
            Self::Limit => write!(f, "Limit"),
            Self::Stop => write!(f, "Stop"),
            Self::StopLimit => write!(f, "StopLimit"),
        }
    }
}

// ---------------------------------------------------------------------------
// Time In Force
// ---------------------------------------------------------------------------

/// How long an order stays working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum TimeInForce {
    /// Valid for the trading day.
    Day,
    /// Good 'til cancelled.
    GTC,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::GTC => write!(f, "GTC"),
        }
    }
}

// ---------------------------------------------------------------------------
// Multi-leg order wire enums
// ---------------------------------------------------------------------------

/// Per-leg action for a multi-leg order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MlegAction {
    BUY_TO_OPEN,
    BUY_TO_CLOSE,
    SELL_TO_OPEN,
    SELL_TO_CLOSE,
}

impl MlegAction {
    /// The opening action for a plain buy/sell leg.
    pub fn open(action: OrderAction) -> Self {
        match action {
            OrderAction::BUY => Self::BUY_TO_OPEN,
            OrderAction::SELL => Self::SELL_TO_OPEN,
        }
    }
}

/// Instrument type of a multi-leg order leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MlegInstrumentType {
    OPTION,
    EQUITY,
}

/// Whether an order debits or credits the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceEffect {
    DEBIT,
    CREDIT,
}

// ---------------------------------------------------------------------------
// Asset Class
// ---------------------------------------------------------------------------

/// Asset class of a position, used by the aggregation and display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Option,
}
