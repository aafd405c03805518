//! `snaptrade holdings` — combined balances, positions, and recent orders
//! for one account in a single call.

use owo_colors::OwoColorize;

use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;
use crate::occ;
use crate::types::holdings::HoldingsPosition;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let holdings = ctx.client.account_holdings(&user, &account.id).await?;

    let balances = holdings.balances.unwrap_or_default();
    let mut positions = holdings.positions.unwrap_or_default();
    let orders = holdings.orders.unwrap_or_default();

    if balances.is_empty() && positions.is_empty() && orders.is_empty() {
        println!("No holdings data available for this account.");
        return Ok(());
    }

    let record = holdings.account.as_ref().unwrap_or(&account);
    println!(
        "📊 {} ({})",
        record.name.as_deref().unwrap_or("Account").bold(),
        record.institution_name.as_deref().unwrap_or("N/A")
    );
    if let Some(total) = &holdings.total_value {
        println!(
            "Total Value: {}",
            money_or_na(total.value, total.currency.as_deref())
        );
    }

    if !balances.is_empty() {
        println!("\n{}", "Balances".bold());
        let mut out = table(&["Currency", "Cash", "Buying Power"]);
        for balance in &balances {
            let code = balance.currency.as_ref().and_then(|c| c.code.as_deref());
            out.add_row(vec![
                comfy_table::Cell::new(code.unwrap_or("N/A")),
                num_cell(money_or_na(balance.cash, code)),
                num_cell(money_or_na(balance.buying_power, code)),
            ]);
        }
        println!("{out}");
    }

    if !positions.is_empty() {
        positions.sort_by(|a, b| {
            a.display_symbol()
                .unwrap_or("")
                .cmp(b.display_symbol().unwrap_or(""))
        });
        println!("\n{}", "Positions".bold());
        let mut out = table(&["Symbol", "Quantity", "Price", "Value", "Type"]);
        for position in &positions {
            let code = position.currency.as_ref().and_then(|c| c.code.as_deref());
            let value = match (position.units, position.price) {
                (Some(u), Some(p)) => Some(u * p),
                _ => None,
            };
            out.add_row(vec![
                comfy_table::Cell::new(display_symbol(position)),
                num_cell(position.units.map(|u| u.to_string()).unwrap_or_else(|| "N/A".into())),
                num_cell(money_or_na(position.price, code)),
                num_cell(money_or_na(value, code)),
                comfy_table::Cell::new(if position.is_option() { "Option" } else { "Equity" }),
            ]);
        }
        println!("{out}");
    }

    if !orders.is_empty() {
        println!("\n{}", "Recent Orders".bold());
        let mut out = table(&["Symbol", "Action", "Quantity", "Status", "Price", "Type"]);
        for order in &orders {
            let code = order
                .quote_currency
                .as_ref()
                .and_then(|c| c.code.as_deref())
                .or_else(|| order.price_currency());
            out.add_row(vec![
                comfy_table::Cell::new(order.display_symbol().unwrap_or("N/A")),
                comfy_table::Cell::new(order.action.as_deref().unwrap_or("N/A")),
                num_cell(order.total_quantity.map(|q| q.to_string()).unwrap_or_else(|| "N/A".into())),
                comfy_table::Cell::new(order.status.as_deref().unwrap_or("N/A")),
                num_cell(money_or_na(order.execution_price.or(order.limit_price), code)),
                comfy_table::Cell::new(order.order_type.as_deref().unwrap_or("N/A")),
            ]);
        }
        println!("{out}");
    }
    Ok(())
}

/// Option holdings carry OCC tickers; show them decoded when they parse.
fn display_symbol(position: &HoldingsPosition) -> String {
    let raw = position.display_symbol().unwrap_or("N/A");
    occ::describe(raw).unwrap_or_else(|| raw.to_owned())
}
