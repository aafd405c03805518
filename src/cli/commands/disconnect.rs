//! `snaptrade disconnect` — remove a brokerage authorization.

use clap::Args;

use crate::cli::prompt;
use crate::cli::Context;
use crate::error::Result;

#[derive(Debug, Args)]
pub struct DisconnectArgs {
    /// Id of the brokerage authorization to remove (see `snaptrade connections`).
    #[arg(long)]
    pub authorization_id: String,
}

pub async fn run(ctx: &mut Context, args: DisconnectArgs) -> Result<()> {
    if !prompt::confirm(
        "This removes the connection and all its accounts from SnapTrade. Continue?",
    )? {
        println!("❌ Disconnect aborted by user.");
        return Ok(());
    }

    let user = ctx.user().await?;
    ctx.client
        .remove_connection(&user, &args.authorization_id)
        .await?;
    println!("✅ Connection {} removed.", args.authorization_id);
    Ok(())
}
