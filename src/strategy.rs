//! Option strategy leg construction.
//!
//! Each named strategy is described by a declarative table of
//! [`LegTemplate`]s — which option type, which strike, and whether the leg
//! takes the order's base action or its opposite. Building an order walks
//! the table and stamps out [`OptionLeg`]s; there is no per-strategy
//! branching on the action, which keeps the sign conventions in one place.
//!
//! All legs of one order share the underlying ticker, the expiration, and
//! the contract count. Validation happens up front: an invalid strike,
//! expiration, or quantity fails before any leg is constructed.

use chrono::NaiveDate;

use crate::error::{Result, SnapTradeError};
use crate::occ;
use crate::types::{OptionType, OrderAction};

/// One leg of an option order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLeg {
    pub option_type: OptionType,
    pub action: OrderAction,
    pub strike: f64,
    pub expiration: NaiveDate,
    /// Contracts; uniform across all legs of an order.
    pub quantity: u32,
}

impl OptionLeg {
    /// OCC symbol for this leg on the given underlying.
    pub fn occ_symbol(&self, ticker: &str) -> Result<String> {
        occ::encode(ticker, self.expiration, self.strike, self.option_type)
    }
}

/// Which of the order's strikes a leg uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrikeRole {
    Single,
    Low,
    High,
    PutLow,
    PutHigh,
    CallLow,
    CallHigh,
}

/// Whether a leg takes the order's base action or its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeAction {
    Same,
    Opposite,
}

/// One row of a strategy table.
struct LegTemplate {
    option_type: OptionType,
    strike: StrikeRole,
    action: RelativeAction,
}

const fn leg(option_type: OptionType, strike: StrikeRole, action: RelativeAction) -> LegTemplate {
    LegTemplate {
        option_type,
        strike,
        action,
    }
}

use OptionType::{CALL, PUT};
use RelativeAction::{Opposite, Same};

/// A supported option strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Call,
    Put,
    Straddle,
    Strangle,
    VerticalCallSpread,
    VerticalPutSpread,
    IronCondor,
}

impl StrategyKind {
    /// The leg table for this strategy, in submission order.
    ///
    /// The iron condor rows encode "sell the body, buy the wings": with a
    /// SELL base action the wings (putLow, callHigh) flip to BUY, and a BUY
    /// base action mirrors the whole construction.
    fn legs(self) -> &'static [LegTemplate] {
        match self {
            Self::Call => const { &[leg(CALL, StrikeRole::Single, Same)] },
            Self::Put => const { &[leg(PUT, StrikeRole::Single, Same)] },
            Self::Straddle => const {
                &[
                    leg(PUT, StrikeRole::Single, Same),
                    leg(CALL, StrikeRole::Single, Same),
                ]
            },
            Self::Strangle => const {
                &[
                    leg(PUT, StrikeRole::Low, Same),
                    leg(CALL, StrikeRole::High, Same),
                ]
            },
            Self::VerticalCallSpread => const {
                &[
                    leg(CALL, StrikeRole::Low, Same),
                    leg(CALL, StrikeRole::High, Opposite),
                ]
            },
            Self::VerticalPutSpread => const {
                &[
                    leg(PUT, StrikeRole::High, Same),
                    leg(PUT, StrikeRole::Low, Opposite),
                ]
            },
            Self::IronCondor => const {
                &[
                    leg(PUT, StrikeRole::PutLow, Opposite),
                    leg(PUT, StrikeRole::PutHigh, Same),
                    leg(CALL, StrikeRole::CallLow, Same),
                    leg(CALL, StrikeRole::CallHigh, Opposite),
                ]
            },
        }
    }

    /// Human-readable name, matching the CLI subcommand.
    pub fn name(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
            Self::Straddle => "straddle",
            Self::Strangle => "strangle",
            Self::VerticalCallSpread => "vertical-call-spread",
            Self::VerticalPutSpread => "vertical-put-spread",
            Self::IronCondor => "iron-condor",
        }
    }
}

/// The strike parameters of a strategy order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategyStrikes {
    /// Single-strike strategies: call, put, straddle.
    Single(f64),
    /// Two-strike strategies: strangle, vertical spreads.
    LowHigh { low: f64, high: f64 },
    /// Iron condor.
    Condor {
        put_low: f64,
        put_high: f64,
        call_low: f64,
        call_high: f64,
    },
}

impl StrategyStrikes {
    fn resolve(&self, role: StrikeRole) -> Option<f64> {
        match (self, role) {
            (Self::Single(s), StrikeRole::Single) => Some(*s),
            (Self::LowHigh { low, .. }, StrikeRole::Low) => Some(*low),
            (Self::LowHigh { high, .. }, StrikeRole::High) => Some(*high),
            (Self::Condor { put_low, .. }, StrikeRole::PutLow) => Some(*put_low),
            (Self::Condor { put_high, .. }, StrikeRole::PutHigh) => Some(*put_high),
            (Self::Condor { call_low, .. }, StrikeRole::CallLow) => Some(*call_low),
            (Self::Condor { call_high, .. }, StrikeRole::CallHigh) => Some(*call_high),
            _ => None,
        }
    }

    fn all(&self) -> Vec<f64> {
        match *self {
            Self::Single(s) => vec![s],
            Self::LowHigh { low, high } => vec![low, high],
            Self::Condor {
                put_low,
                put_high,
                call_low,
                call_high,
            } => vec![put_low, put_high, call_low, call_high],
        }
    }
}

/// A fully-specified strategy order, ready to turn into legs.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOrder {
    pub kind: StrategyKind,
    pub ticker: String,
    pub expiration: NaiveDate,
    pub strikes: StrategyStrikes,
    /// Base action; spread tables derive per-leg actions from it.
    pub action: OrderAction,
    /// Contracts, applied to every leg.
    pub contracts: u32,
}

impl StrategyOrder {
    /// Build the ordered leg list for this order.
    ///
    /// Fails fast with [`SnapTradeError::InvalidOrderParameter`] — on any
    /// invalid input, no legs at all are returned.
    pub fn build_legs(&self) -> Result<Vec<OptionLeg>> {
        self.validate()?;

        let legs = self
            .kind
            .legs()
            .iter()
            .map(|template| {
                let strike = self.strikes.resolve(template.strike).ok_or_else(|| {
                    SnapTradeError::InvalidOrderParameter(format!(
                        "strategy {} requires a different strike set",
                        self.kind.name()
                    ))
                })?;
                let action = match template.action {
                    RelativeAction::Same => self.action,
                    RelativeAction::Opposite => self.action.opposite(),
                };
                Ok(OptionLeg {
                    option_type: template.option_type,
                    action,
                    strike,
                    expiration: self.expiration,
                    quantity: self.contracts,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(legs)
    }

    /// Parse an expiration in the `YYYY-MM-DD` form the CLI accepts.
    pub fn parse_expiration(input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
            SnapTradeError::InvalidOrderParameter(format!(
                "expiration {input:?} is not a valid YYYY-MM-DD date"
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.contracts == 0 {
            return Err(SnapTradeError::InvalidOrderParameter(
                "contract count must be at least 1".into(),
            ));
        }
        // Encoding checks ticker shape, expiration range, and that each
        // strike lands on a mill boundary; doing it here surfaces problems
        // before any leg is handed out.
        for strike in self.strikes.all() {
            occ::encode(&self.ticker, self.expiration, strike, OptionType::CALL)?;
        }
        Ok(())
    }
}
