//! `snaptrade cancel-order` — cancel a working order.

use clap::Args;

use crate::cli::commands::trade::handle_post_trade;
use crate::cli::prompt;
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;

#[derive(Debug, Args)]
pub struct CancelOrderArgs {
    /// Brokerage order id to cancel.
    #[arg(long)]
    pub order_id: String,
}

pub async fn run(ctx: &mut Context, args: CancelOrderArgs) -> Result<()> {
    let account = select_account(ctx).await?;

    if !prompt::confirm("Are you sure you want to cancel this order?")? {
        println!("❌ Order cancellation aborted by user.");
        return Ok(());
    }

    let user = ctx.user().await?;
    let (response, request_id) = ctx
        .client
        .cancel_order(&user, &account.id, &args.order_id)
        .await?;

    println!("✅ Cancellation submitted!");
    handle_post_trade(ctx, &user, &account, &response, request_id.as_deref(), "canceled").await;
    Ok(())
}
