//! `snaptrade accounts` — list all connected accounts.

use owo_colors::OwoColorize;

use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let user = ctx.user().await?;
    let mut accounts = ctx.client.list_accounts(&user).await?;

    if accounts.is_empty() {
        println!(
            "No accounts found. Connect an account with {}.",
            "snaptrade connect".green()
        );
        return Ok(());
    }

    // Largest account first.
    accounts.sort_by(|a, b| {
        b.total_value()
            .unwrap_or(0.0)
            .total_cmp(&a.total_value().unwrap_or(0.0))
    });

    let mut out = table(&["ID", "Broker", "Name", "Account #", "Total Value"]);
    for account in &accounts {
        out.add_row(vec![
            comfy_table::Cell::new(&account.id),
            comfy_table::Cell::new(account.institution_name.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(account.name.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(account.number.as_deref().unwrap_or("N/A")),
            num_cell(money_or_na(account.total_value(), account.total_currency())),
        ]);
    }
    println!("{out}");
    Ok(())
}
