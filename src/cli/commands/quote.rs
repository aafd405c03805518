//! `snaptrade quote` — current quote for a symbol.

use clap::Args;

use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// The symbol to get the quote for (ticker or OCC option symbol).
    pub symbol: String,
}

pub async fn run(ctx: &mut Context, args: QuoteArgs) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let quotes = ctx
        .client
        .account_quotes(&user, &account.id, &args.symbol, true)
        .await?;

    if quotes.is_empty() {
        println!("No quotes found for the given symbol.");
        return Ok(());
    }

    let mut out = table(&["Symbol", "Last Price", "Bid", "Ask", "Volume"]);
    for quote in &quotes {
        let currency = quote.currency();
        let symbol = quote
            .symbol
            .as_ref()
            .and_then(|s| s.symbol.as_deref())
            .unwrap_or(&args.symbol);
        out.add_row(vec![
            comfy_table::Cell::new(symbol),
            num_cell(money_or_na(quote.last_trade_price, currency)),
            num_cell(money_or_na(quote.bid_price, currency)),
            num_cell(money_or_na(quote.ask_price, currency)),
            num_cell(
                quote
                    .volume
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "N/A".into()),
            ),
        ]);
    }
    println!("{out}");
    Ok(())
}
