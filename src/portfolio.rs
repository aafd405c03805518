//! Position aggregation.
//!
//! Folds raw per-account position records (equity and option, any number of
//! accounts) into per-(symbol, currency) rollups with summed quantity and a
//! weighted average cost basis. The same symbol held in two currencies is
//! never merged.
//!
//! Cost-basis math is deliberately strict about missing data: one
//! contributing position without a cost basis makes the aggregate's cost
//! basis `None` for good — it is never treated as zero cost.
//!
//! Unit conversions happen at the input boundary ([`RawPosition::equity`] /
//! [`RawPosition::option`]), so the aggregation itself is
//! asset-class-agnostic.

use std::collections::HashMap;

use crate::constants::OPTION_CONTRACT_MULTIPLIER;
use crate::types::AssetClass;
use crate::types::positions::{OptionPosition, Position};

/// A raw position record, normalized to per-share-equivalent pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPosition {
    pub symbol: String,
    /// Negative for short positions.
    pub quantity: f64,
    /// Average purchase price per share-equivalent; `None` when the
    /// brokerage does not report one.
    pub cost_basis: Option<f64>,
    pub currency: String,
    pub asset_class: AssetClass,
}

impl RawPosition {
    /// Normalize an equity position from the wire shape.
    pub fn equity(position: &Position) -> Self {
        let symbol = position
            .symbol
            .as_ref()
            .and_then(|s| s.symbol.as_ref())
            .and_then(|u| u.symbol.clone())
            .unwrap_or_else(|| "Unknown".to_owned());
        let currency = position
            .symbol
            .as_ref()
            .and_then(|s| s.symbol.as_ref())
            .and_then(|u| u.currency.as_ref())
            .and_then(|c| c.code.clone())
            .unwrap_or_else(|| "USD".to_owned());
        Self {
            symbol,
            quantity: position.units.unwrap_or(0.0),
            cost_basis: position.average_purchase_price,
            currency,
            asset_class: AssetClass::Equity,
        }
    }

    /// Normalize an option holding from the wire shape.
    ///
    /// Option cost basis arrives per contract; it is divided by 100 here so
    /// everything downstream speaks per-share-equivalent prices.
    pub fn option(position: &OptionPosition) -> Self {
        let option_symbol = position.symbol.as_ref().and_then(|s| s.option_symbol.as_ref());
        let symbol = option_symbol
            .and_then(|o| o.ticker.clone())
            .unwrap_or_else(|| "Unknown".to_owned());
        let currency = option_symbol
            .and_then(|o| o.underlying_symbol.as_ref())
            .and_then(|u| u.currency.as_ref())
            .and_then(|c| c.code.clone())
            .unwrap_or_else(|| "USD".to_owned());
        Self {
            symbol,
            quantity: position.units.unwrap_or(0.0),
            cost_basis: position
                .average_purchase_price
                .map(|p| p / OPTION_CONTRACT_MULTIPLIER),
            currency,
            asset_class: AssetClass::Option,
        }
    }
}

/// A rollup of all positions sharing (symbol, currency).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPosition {
    pub symbol: String,
    pub currency: String,
    pub asset_class: AssetClass,
    pub total_quantity: f64,
    /// `None` when any contributing position lacked a cost basis.
    pub total_cost_basis: Option<f64>,
    /// `total_cost_basis / total_quantity`; `Some(0.0)` for a flat position.
    pub avg_cost_basis: Option<f64>,
}

/// Fold raw positions into (symbol, currency)-keyed rollups.
///
/// Output preserves first-seen order, which makes repeated runs on the same
/// input deterministic; display layers sort as they see fit.
pub fn aggregate_positions(positions: &[RawPosition]) -> Vec<AggregatedPosition> {
    struct Acc {
        total_quantity: f64,
        total_cost_basis: Option<f64>,
        asset_class: AssetClass,
    }

    let mut order: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<(String, String), Acc> = HashMap::new();

    for pos in positions {
        let key = (pos.symbol.clone(), pos.currency.clone());
        match groups.get_mut(&key) {
            Some(acc) => {
                acc.total_quantity += pos.quantity;
                // One missing cost basis poisons the total for good.
                acc.total_cost_basis = match (acc.total_cost_basis, pos.cost_basis) {
                    (Some(total), Some(basis)) => Some(total + pos.quantity * basis),
                    _ => None,
                };
            }
            None => {
                order.push(key.clone());
                groups.insert(
                    key,
                    Acc {
                        total_quantity: pos.quantity,
                        total_cost_basis: pos.cost_basis.map(|b| pos.quantity * b),
                        asset_class: pos.asset_class,
                    },
                );
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let acc = groups
                .remove(&key)
                .expect("every ordered key has an accumulator");
            let avg_cost_basis = if acc.total_quantity == 0.0 {
                Some(0.0)
            } else {
                acc.total_cost_basis.map(|t| t / acc.total_quantity)
            };
            AggregatedPosition {
                symbol: key.0,
                currency: key.1,
                asset_class: acc.asset_class,
                total_quantity: acc.total_quantity,
                total_cost_basis: acc.total_cost_basis,
                avg_cost_basis,
            }
        })
        .collect()
}

impl AggregatedPosition {
    /// Scale factor between quoted per-share prices and position value.
    pub fn price_multiplier(&self) -> f64 {
        match self.asset_class {
            AssetClass::Option => OPTION_CONTRACT_MULTIPLIER,
            AssetClass::Equity => 1.0,
        }
    }

    /// Market value against a per-share quote, when one is available.
    pub fn market_value(&self, quote_price: Option<f64>) -> Option<f64> {
        Some(quote_price? * self.total_quantity * self.price_multiplier())
    }

    /// Unrealized P&L against a per-share quote.
    ///
    /// `None` whenever either the quote or the cost basis is missing.
    pub fn unrealized_pnl(&self, quote_price: Option<f64>) -> Option<f64> {
        let market_value = self.market_value(quote_price)?;
        let avg = self.avg_cost_basis?;
        Some(market_value - avg * self.total_quantity * self.price_multiplier())
    }
}
