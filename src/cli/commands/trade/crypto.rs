//! `snaptrade trade ... crypto` — simple crypto pair orders.

use clap::Args;

use crate::cli::commands::trade::{handle_post_trade, print_preview, TradeArgs};
use crate::cli::prompt;
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::{Result, SnapTradeError};
use crate::preview::{AccountContext, OrderSize, QuoteView, SimpleOrderPreview};
use crate::types::orders::{SimpleOrderRequest, TradingInstrument};

#[derive(Debug, Clone, Args)]
pub struct CryptoArgs {
    /// Amount of the base asset to trade (e.g. 0.5 BTC for BTC-USD).
    #[arg(long)]
    pub amount: f64,
}

pub async fn run(ctx: &mut Context, trade: &TradeArgs, args: CryptoArgs) -> Result<()> {
    if args.amount <= 0.0 {
        return Err(SnapTradeError::InvalidOrderParameter(
            "amount must be positive".into(),
        ));
    }
    if trade.replace.is_some() {
        return Err(SnapTradeError::InvalidOrderParameter(
            "--replace is only supported for equity orders".into(),
        ));
    }

    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let pair = trade.ticker.trim().to_uppercase();

    let quote = match ctx
        .client
        .account_quotes(&user, &account.id, &pair, true)
        .await
    {
        Ok(quotes) => quotes.first().map(QuoteView::from),
        Err(err) => {
            tracing::debug!(%err, %pair, "quote lookup failed");
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
        ticker: pair.clone(),
        action: trade.action,
        size: OrderSize::Quantity(args.amount),
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

    let req = SimpleOrderRequest {
        instrument: TradingInstrument {
            symbol: pair.clone(),
            instrument_type: "CRYPTOCURRENCY_PAIR",
        },
        side: trade.action,
        order_type: trade.order_type.mleg_wire().to_owned(),
        time_in_force: trade.tif,
        amount: args.amount,
        limit_price: trade.limit_price,
    };
    let (response, request_id) = ctx
        .client
        .place_simple_order(&user, &account.id, &req)
        .await?;

    println!("✅ Order submitted!");
    handle_post_trade(ctx, &user, &account, &response, request_id.as_deref(), "placed").await;
    Ok(())
}
