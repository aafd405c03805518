//! `snaptrade trade ... option` — single and multi-leg option orders.

use std::collections::HashMap;

use clap::{Args, Subcommand};

use crate::cli::commands::trade::{handle_post_trade, print_preview, TradeArgs};
use crate::cli::prompt;
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;
use crate::preview::{AccountContext, LegQuote, OptionOrderPreview, QuoteView};
use crate::strategy::{OptionLeg, StrategyKind, StrategyOrder, StrategyStrikes};
use crate::types::orders::{MlegInstrument, MlegLeg, MlegOrderRequest};
use crate::types::{MlegAction, MlegInstrumentType, OrderAction};

#[derive(Debug, Clone, Args)]
pub struct OptionTradeArgs {
    /// Contracts per leg.
    #[arg(long, default_value_t = 1)]
    pub contracts: u32,

    #[command(subcommand)]
    pub strategy: StrategyArgs,
}

/// Single-strike strategy parameters.
#[derive(Debug, Clone, Args)]
pub struct SingleStrikeArgs {
    /// Expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: String,

    /// Strike price.
    #[arg(long)]
    pub strike: f64,
}

/// Two-strike strategy parameters.
#[derive(Debug, Clone, Args)]
pub struct LowHighArgs {
    /// Expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: String,

    /// Lower strike price.
    #[arg(long)]
    pub low: f64,

    /// Higher strike price.
    #[arg(long)]
    pub high: f64,
}

/// Iron condor strike parameters.
#[derive(Debug, Clone, Args)]
pub struct CondorArgs {
    /// Expiration date (YYYY-MM-DD).
    #[arg(long)]
    pub expiration: String,

    /// Long put wing strike.
    #[arg(long)]
    pub put_low: f64,

    /// Short put strike.
    #[arg(long)]
    pub put_high: f64,

    /// Short call strike.
    #[arg(long)]
    pub call_low: f64,

    /// Long call wing strike.
    #[arg(long)]
    pub call_high: f64,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StrategyArgs {
    /// Single call.
    Call(SingleStrikeArgs),
    /// Single put.
    Put(SingleStrikeArgs),
    /// Put and call at the same strike.
    Straddle(SingleStrikeArgs),
    /// Put below, call above.
    Strangle(LowHighArgs),
    /// Calls at two strikes, opposite actions.
    VerticalCallSpread(LowHighArgs),
    /// Puts at two strikes, opposite actions.
    VerticalPutSpread(LowHighArgs),
    /// Put spread below, call spread above.
    IronCondor(CondorArgs),
}

impl StrategyArgs {
    fn order(&self, ticker: &str, action: OrderAction, contracts: u32) -> Result<StrategyOrder> {
        let (kind, expiration, strikes) = match self {
            Self::Call(a) => (StrategyKind::Call, &a.expiration, StrategyStrikes::Single(a.strike)),
            Self::Put(a) => (StrategyKind::Put, &a.expiration, StrategyStrikes::Single(a.strike)),
            Self::Straddle(a) => (
                StrategyKind::Straddle,
                &a.expiration,
                StrategyStrikes::Single(a.strike),
            ),
            Self::Strangle(a) => (
                StrategyKind::Strangle,
                &a.expiration,
                StrategyStrikes::LowHigh {
                    low: a.low,
                    high: a.high,
                },
            ),
            Self::VerticalCallSpread(a) => (
                StrategyKind::VerticalCallSpread,
                &a.expiration,
                StrategyStrikes::LowHigh {
                    low: a.low,
                    high: a.high,
                },
            ),
            Self::VerticalPutSpread(a) => (
                StrategyKind::VerticalPutSpread,
                &a.expiration,
                StrategyStrikes::LowHigh {
                    low: a.low,
                    high: a.high,
                },
            ),
            Self::IronCondor(a) => (
                StrategyKind::IronCondor,
                &a.expiration,
                StrategyStrikes::Condor {
                    put_low: a.put_low,
                    put_high: a.put_high,
                    call_low: a.call_low,
                    call_high: a.call_high,
                },
            ),
        };

        Ok(StrategyOrder {
            kind,
            ticker: ticker.to_owned(),
            expiration: StrategyOrder::parse_expiration(expiration)?,
            strikes,
            action,
            contracts,
        })
    }
}

pub async fn run(ctx: &mut Context, trade: &TradeArgs, args: OptionTradeArgs) -> Result<()> {
    if trade.replace.is_some() {
        return Err(crate::error::SnapTradeError::InvalidOrderParameter(
            "--replace is only supported for equity orders".into(),
        ));
    }

    let ticker = trade.ticker.trim().to_uppercase();
    let order = args.strategy.order(&ticker, trade.action, args.contracts)?;
    let legs = order.build_legs()?;

    let account = select_account(ctx).await?;
    let user = ctx.user().await?;

    let balance = match ctx.client.account_balances(&user, &account.id).await {
        Ok(balances) => balances.into_iter().next(),
        Err(err) => {
            tracing::debug!(%err, "balance lookup failed");
            None
        }
    };
    let leg_quotes = fetch_leg_quotes(ctx, &user, &account.id, &ticker, &legs).await;

    let preview = OptionOrderPreview {
        ticker: ticker.clone(),
        action: trade.action,
        legs: legs.clone(),
        leg_quotes,
        contracts: args.contracts,
        order_type: trade.order_type,
        limit_price: trade.limit_price,
        time_in_force: trade.tif,
        account: AccountContext::new(&account, balance.as_ref()),
    };
    print_preview(&preview.lines());

    if !prompt::confirm("Do you want to place this order?")? {
        println!("❌ Order not placed.");
        return Ok(());
    }

    let mleg_legs = legs
        .iter()
        .map(|leg| {
            Ok(MlegLeg {
                instrument: MlegInstrument {
                    instrument_type: MlegInstrumentType::OPTION,
                    symbol: leg.occ_symbol(&ticker)?,
                },
                action: MlegAction::open(leg.action),
                units: leg.quantity,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let req = MlegOrderRequest {
        order_type: trade.order_type.mleg_wire(),
        time_in_force: trade.tif,
        limit_price: trade.limit_price,
        price_effect: trade.action.price_effect(),
        legs: mleg_legs,
    };
    let (response, request_id) = ctx
        .client
        .place_mleg_order(&user, &account.id, &req)
        .await?;

    println!("✅ Order submitted!");
    handle_post_trade(ctx, &user, &account, &response, request_id.as_deref(), "placed").await;
    Ok(())
}

/// Quote every distinct leg symbol in one request. Missing or failed quotes
/// degrade the preview rather than aborting the trade.
async fn fetch_leg_quotes(
    ctx: &Context,
    user: &crate::types::accounts::UserAuth,
    account_id: &str,
    ticker: &str,
    legs: &[OptionLeg],
) -> Vec<LegQuote> {
    let symbols: Vec<String> = legs
        .iter()
        .filter_map(|leg| leg.occ_symbol(ticker).ok())
        .collect();

    let mut by_symbol: HashMap<String, QuoteView> = HashMap::new();
    if !symbols.is_empty() {
        match ctx
            .client
            .account_quotes(user, account_id, &symbols.join(","), true)
            .await
        {
            Ok(quotes) => {
                for quote in &quotes {
                    if let Some(symbol) = quote.symbol.as_ref().and_then(|s| s.symbol.as_deref()) {
                        by_symbol.insert(symbol.trim().to_owned(), QuoteView::from(quote));
                    }
                }
            }
            Err(err) => {
                tracing::debug!(%err, "option quote lookup failed");
            }
        }
    }

    legs.iter()
        .map(|leg| {
            let quote = leg
                .occ_symbol(ticker)
                .ok()
                .and_then(|s| by_symbol.get(s.trim()).cloned());
            LegQuote::new(leg, quote.as_ref())
        })
        .collect()
}
