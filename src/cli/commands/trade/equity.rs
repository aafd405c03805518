//! `snaptrade trade ... equity` — single-leg equity orders.

use clap::Args;

use crate::cli::commands::trade::{handle_post_trade, print_preview, TradeArgs};
use crate::cli::prompt;
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::{Result, SnapTradeError};
use crate::preview::{AccountContext, OrderSize, QuoteView, SimpleOrderPreview};
use crate::types::orders::{PlaceOrderRequest, ReplaceOrderRequest};

#[derive(Debug, Clone, Args)]
pub struct EquityArgs {
    /// Number of shares to trade.
    #[arg(long)]
    pub shares: Option<f64>,

    /// Dollar amount to trade instead of a share count.
    #[arg(long)]
    pub notional: Option<f64>,
}

pub async fn run(ctx: &mut Context, trade: &TradeArgs, args: EquityArgs) -> Result<()> {
    let size = match (args.shares, args.notional) {
        (Some(shares), None) => {
            if shares <= 0.0 {
                return Err(SnapTradeError::InvalidOrderParameter(
                    "share count must be positive".into(),
                ));
            }
            OrderSize::Quantity(shares)
        }
        (None, Some(notional)) => {
            if notional <= 0.0 {
                return Err(SnapTradeError::InvalidOrderParameter(
                    "notional amount must be positive".into(),
                ));
            }
            OrderSize::Notional(notional)
        }
        _ => {
            return Err(SnapTradeError::InvalidOrderParameter(
                "provide exactly one of --shares or --notional".into(),
            ));
        }
    };

    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let ticker = trade.ticker.trim().to_uppercase();

    // Best effort quote and balance: the preview omits what it cannot find.
    let quote = match ctx
        .client
        .account_quotes(&user, &account.id, &ticker, true)
        .await
    {
        Ok(quotes) => quotes.first().map(QuoteView::from),
        Err(err) => {
            tracing::debug!(%err, %ticker, "quote lookup failed");
            None
        }
    };
    let balance = match ctx.client.account_balances(&user, &account.id).await {
        Ok(balances) => balances.into_iter().next(),
        Err(err) => {
            tracing::debug!(%err, "balance lookup failed");
            None
        }
    };

    let preview = SimpleOrderPreview {
        ticker: ticker.clone(),
        action: trade.action,
        size,
        order_type: trade.order_type,
        limit_price: trade.limit_price,
        time_in_force: trade.tif,
        quote,
        account: AccountContext::new(&account, balance.as_ref()),
    };
    print_preview(&preview.lines());

    if !prompt::confirm("Do you want to place this order?")? {
        println!("❌ Order not placed.");
        return Ok(());
    }

    let (units, notional_value) = match size {
        OrderSize::Quantity(shares) => (Some(shares), None),
        OrderSize::Notional(amount) => (None, Some(amount)),
    };

    let (response, request_id) = if let Some(order_id) = &trade.replace {
        let req = ReplaceOrderRequest {
            symbol: ticker.clone(),
            action: trade.action,
            order_type: trade.order_type,
            price: trade.limit_price,
            time_in_force: trade.tif,
            units,
        };
        ctx.client
            .replace_order(&user, &account.id, order_id, &req)
            .await?
    } else {
        let req = PlaceOrderRequest {
            account_id: account.id.clone(),
            symbol: ticker.clone(),
            action: trade.action,
            order_type: trade.order_type,
            price: trade.limit_price,
            time_in_force: trade.tif,
            units,
            notional_value,
        };
        ctx.client.place_force_order(&user, &req).await?
    };

    println!("✅ Order submitted!");
    handle_post_trade(ctx, &user, &account, &response, request_id.as_deref(), "placed").await;
    Ok(())
}
