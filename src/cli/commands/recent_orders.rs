//! `snaptrade recent-orders` — recent order table for one account.

use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;
    let response = ctx.client.recent_orders(&user, &account.id, false).await?;

    let orders = response.orders.unwrap_or_default();
    if orders.is_empty() {
        println!("⚠️ No recent orders found.");
        return Ok(());
    }
    super::orders::render(orders);
    Ok(())
}
