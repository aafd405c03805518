//! `snaptrade balances` — per-currency balances for one account.

use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let mut balances = ctx.client.account_balances(&user, &account.id).await?;

    balances.sort_by(|a, b| {
        let code = |bal: &crate::types::accounts::Balance| {
            bal.currency
                .as_ref()
                .and_then(|c| c.code.clone())
                .unwrap_or_else(|| "USD".to_owned())
        };
        code(a).cmp(&code(b))
    });

    let mut out = table(&["Currency", "Cash", "Buying Power"]);
    for balance in &balances {
        let code = balance
            .currency
            .as_ref()
            .and_then(|c| c.code.as_deref())
            .unwrap_or("USD");
        out.add_row(vec![
            comfy_table::Cell::new(code),
            num_cell(money_or_na(balance.cash, Some(code))),
            num_cell(money_or_na(balance.buying_power, Some(code))),
        ]);
    }
    println!("{out}");
    Ok(())
}
