//! `snaptrade positions` — aggregated position table with P&L.

use std::collections::HashMap;
use std::time::Duration;

use clap::Args;
use futures::future::try_join_all;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::format::{money_or_na, num_cell, pnl_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;
use crate::portfolio::{aggregate_positions, RawPosition};
use crate::preview::QuoteView;
use crate::types::accounts::{Account, UserAuth};

#[derive(Debug, Args)]
pub struct PositionsArgs {
    /// List positions for all accounts. This could be slow if you have many
    /// accounts connected.
    #[arg(long)]
    pub all: bool,
}

pub async fn run(ctx: &mut Context, args: PositionsArgs) -> Result<()> {
    let user = ctx.user().await?;
    let accounts: Vec<Account> = if args.all {
        ctx.client.list_accounts(&user).await?
    } else {
        vec![select_account(ctx).await?]
    };

    let spinner = if args.all {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("static spinner template is valid"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(format!("Loading all positions... 0/{} accounts", accounts.len()));
        Some(bar)
    } else {
        None
    };

    let raw = fetch_positions(ctx, &user, &accounts, spinner.as_ref()).await?;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let mut aggregated = aggregate_positions(&raw);
    aggregated.sort_by(|a, b| a.symbol.cmp(&b.symbol).then_with(|| a.currency.cmp(&b.currency)));

    if aggregated.is_empty() {
        println!("No positions found.");
        return Ok(());
    }

    let quotes = fetch_quotes(ctx, &user, &accounts, &aggregated).await;

    let mut out = table(&[
        "Symbol",
        "Quantity",
        "Market Price",
        "Cost Basis",
        "Market Value",
        "PnL",
    ]);
    for position in &aggregated {
        let quote = quotes.get(&position.symbol);
        let price = quote.and_then(|q| q.last);
        let quote_currency = quote
            .and_then(|q| q.currency.as_deref())
            .unwrap_or(&position.currency);
        out.add_row(vec![
            comfy_table::Cell::new(&position.symbol),
            num_cell(format!("{}", position.total_quantity)),
            num_cell(money_or_na(price, Some(quote_currency))),
            num_cell(money_or_na(position.avg_cost_basis, Some(&position.currency))),
            num_cell(money_or_na(
                position.market_value(price),
                Some(quote_currency),
            )),
            pnl_cell(position.unrealized_pnl(price), Some(quote_currency)),
        ]);
    }
    println!("{out}");
    Ok(())
}

/// Fetch equity positions and option holdings for every account in
/// parallel, normalized for aggregation.
async fn fetch_positions(
    ctx: &Context,
    user: &UserAuth,
    accounts: &[Account],
    spinner: Option<&ProgressBar>,
) -> Result<Vec<RawPosition>> {
    let total = accounts.len();
    let completed = std::sync::atomic::AtomicUsize::new(0);

    let fetches = accounts.iter().map(|account| {
        let client = ctx.client.clone();
        let completed = &completed;
        async move {
            let (positions, options) = tokio::try_join!(
                client.account_positions(user, &account.id),
                client.option_holdings(user, &account.id),
            )?;
            let done = completed.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
            if let Some(bar) = spinner {
                bar.set_message(format!("Loading all positions... {done}/{total} accounts"));
            }
            Ok::<_, crate::error::SnapTradeError>((positions, options))
        }
    });

    let mut raw = Vec::new();
    for (positions, options) in try_join_all(fetches).await? {
        raw.extend(positions.iter().map(RawPosition::equity));
        raw.extend(options.iter().map(RawPosition::option));
    }
    Ok(raw)
}

/// Best-effort quote lookup keyed by display symbol. Every account is
/// queried, since a symbol may be quotable only at the brokerage that
/// holds it; the first quote carrying a price wins. Missing quotes just
/// leave N/A cells behind.
pub async fn fetch_quotes(
    ctx: &Context,
    user: &UserAuth,
    accounts: &[Account],
    aggregated: &[crate::portfolio::AggregatedPosition],
) -> HashMap<String, QuoteView> {
    let symbols: Vec<&str> = aggregated.iter().map(|p| p.symbol.as_str()).collect();
    let joined = symbols.join(",");

    let mut merged: HashMap<String, QuoteView> = HashMap::new();
    for account in accounts {
        if merged.len() == aggregated.len() {
            break;
        }
        match ctx
            .client
            .account_quotes(user, &account.id, &joined, true)
            .await
        {
            Ok(quotes) => {
                for quote in &quotes {
                    let Some(symbol) = quote.symbol.as_ref().and_then(|s| s.symbol.clone()) else {
                        continue;
                    };
                    let view = QuoteView::from(quote);
                    if view.last.is_some() || view.bid.is_some() || view.ask.is_some() {
                        merged.entry(symbol).or_insert(view);
                    }
                }
            }
            Err(err) => {
                tracing::debug!(%err, account_id = %account.id, "quote lookup failed; continuing");
            }
        }
    }
    merged
}
