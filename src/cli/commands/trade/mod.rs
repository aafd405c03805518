//! `snaptrade trade` — equity, option, and crypto order entry.
//!
//! The trade-level flags (ticker, order type, action, time in force) are
//! shared across instruments; each instrument subcommand adds its own
//! sizing parameters.

pub mod crypto;
pub mod equity;
pub mod option;

use clap::{Args, Subcommand};
use owo_colors::OwoColorize;

use crate::cli::format::print_divider;
use crate::cli::Context;
use crate::error::{Result, SnapTradeError};
use crate::preview::PreviewLine;
use crate::types::accounts::{Account, UserAuth};
use crate::types::orders::OrderResponse;
use crate::types::{OrderAction, OrderType, TimeInForce};

#[derive(Debug, Args)]
pub struct TradeArgs {
    /// Underlying asset symbol (e.g., AAPL).
    #[arg(long)]
    pub ticker: String,

    /// Order type.
    #[arg(long, value_enum, ignore_case = true, default_value = "market")]
    pub order_type: OrderType,

    /// Limit price; required for limit orders.
    #[arg(long)]
    pub limit_price: Option<f64>,

    /// Action type.
    #[arg(long, value_enum, ignore_case = true)]
    pub action: OrderAction,

    /// Time in force.
    #[arg(long, value_enum, ignore_case = true, default_value = "day")]
    pub tif: TimeInForce,

    /// Replace an existing order; provide the broker order id to replace.
    #[arg(long)]
    pub replace: Option<String>,

    #[command(subcommand)]
    pub instrument: TradeInstrument,
}

#[derive(Debug, Subcommand)]
pub enum TradeInstrument {
    /// Place a simple equity trade with one leg.
    Equity(equity::EquityArgs),
    /// Place single leg or multi-leg option trades.
    Option(option::OptionTradeArgs),
    /// Place a simple crypto trade with one leg.
    Crypto(crypto::CryptoArgs),
}

pub async fn run(ctx: &mut Context, args: TradeArgs) -> Result<()> {
    if args.order_type == OrderType::Limit && args.limit_price.is_none() {
        return Err(SnapTradeError::InvalidOrderParameter(
            "limit price is required for limit orders".into(),
        ));
    }

    match &args.instrument {
        TradeInstrument::Equity(equity_args) => {
            let equity_args = equity_args.clone();
            equity::run(ctx, &args, equity_args).await
        }
        TradeInstrument::Option(option_args) => {
            let option_args = option_args.clone();
            option::run(ctx, &args, option_args).await
        }
        TradeInstrument::Crypto(crypto_args) => {
            let crypto_args = crypto_args.clone();
            crypto::run(ctx, &args, crypto_args).await
        }
    }
}

/// Print a rendered preview with the shared framing.
pub fn print_preview(lines: &[PreviewLine]) {
    println!("{}", "\n📄 Trade Preview\n".bold());
    for line in lines {
        if line.label.is_empty() {
            // Continuation rows (extra option legs) align under the label
            // column of the previous line.
            println!("  {} {:15} {}", line.icon, "", line.value);
        } else {
            println!("  {} {:15} {}", line.icon, line.label.bold(), line.value);
        }
    }
    print_divider();
}

/// Shared post-mutation handling: surface the ids the user needs for
/// support, then ask SnapTrade for fresh account data so the next read
/// reflects the trade. Refresh failures are logged, not fatal — the order
/// already happened.
pub async fn handle_post_trade(
    ctx: &Context,
    user: &UserAuth,
    account: &Account,
    response: &OrderResponse,
    request_id: Option<&str>,
    verb: &str,
) {
    let institution = account.institution_name.as_deref().unwrap_or("your brokerage");
    if let Some(id) = request_id {
        println!("SnapTrade Request ID: {id}");
    }
    if let Some(id) = &response.brokerage_order_id {
        println!("{institution} Order ID: {id}");
    }
    println!("Please check with {institution} to ensure the order was {verb} as expected.");
    println!(
        "You can also use {} to view recent orders.",
        "snaptrade recent-orders".green()
    );

    if let Some(authorization_id) = &account.brokerage_authorization {
        if let Err(err) = ctx.client.refresh_connection(user, authorization_id).await {
            tracing::debug!(%err, "post-trade connection refresh failed");
        }
    }
}
