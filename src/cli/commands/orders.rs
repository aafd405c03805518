//! `snaptrade orders` — full order history for one account.

use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;
use crate::occ;
use crate::types::orders::AccountOrderRecord;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let orders = ctx.client.account_orders(&user, &account.id).await?;

    if orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }
    render(orders);
    Ok(())
}

/// Sort most recent first and print the shared order table. Also used by
/// the recent-orders command.
pub(crate) fn render(mut orders: Vec<AccountOrderRecord>) {
    // ISO 8601 timestamps sort lexicographically.
    orders.sort_by(|a, b| match (&a.time_placed, &b.time_placed) {
        (Some(a), Some(b)) => b.cmp(a),
        _ => std::cmp::Ordering::Equal,
    });

    let mut out = table(&[
        "Order ID",
        "Time Placed",
        "Symbol",
        "Status",
        "Action",
        "Quantity",
        "Filled Qty",
        "Type",
        "Filled Price",
    ]);
    for order in &orders {
        out.add_row(vec![
            comfy_table::Cell::new(order.brokerage_order_id.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(order.time_placed.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(display_symbol(order)),
            comfy_table::Cell::new(order.status.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(order.action.as_deref().unwrap_or("N/A")),
            num_cell(order.total_quantity.map(|q| q.to_string()).unwrap_or_else(|| "N/A".into())),
            num_cell(order.filled_quantity.map(|q| q.to_string()).unwrap_or_else(|| "N/A".into())),
            comfy_table::Cell::new(order.order_type.as_deref().unwrap_or("N/A")),
            num_cell(money_or_na(order.execution_price, order.price_currency())),
        ]);
    }
    println!("{out}");
}

/// Option tickers are OCC symbols; show them decoded when they parse.
fn display_symbol(order: &AccountOrderRecord) -> String {
    let raw = order.display_symbol().unwrap_or("N/A");
    occ::describe(raw).unwrap_or_else(|| raw.to_owned())
}
