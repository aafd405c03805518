//! `snaptrade reconnect` — re-establish an existing disabled connection.

use clap::Args;
use owo_colors::OwoColorize;

use crate::cli::commands::connect::{broker_name, portal_flow};
use crate::cli::Context;
use crate::error::{Result, SnapTradeError};
use crate::types::connections::LoginRequest;

#[derive(Debug, Args)]
pub struct ReconnectArgs {
    /// Id of the brokerage authorization to reconnect (see `snaptrade connections`).
    #[arg(long)]
    pub connection_id: String,
}

pub async fn run(ctx: &mut Context, args: ReconnectArgs) -> Result<()> {
    let user = ctx.user().await?;

    let connections = ctx.client.list_connections(&user).await?;
    if !connections.iter().any(|c| c.id == args.connection_id) {
        return Err(SnapTradeError::Settings(format!(
            "no connection with id {}; run {} to list them",
            args.connection_id,
            "snaptrade connections".green()
        )));
    }

    let req = LoginRequest {
        broker: None,
        connection_type: Some("trade".to_owned()),
        reconnect: Some(args.connection_id.clone()),
    };
    let target = args.connection_id.clone();
    let outcome = portal_flow(ctx, &user, &req, move |c| {
        c.id == target && c.disabled != Some(true)
    })
    .await?;

    if let Some(connection) = outcome {
        println!("✅ Reconnected to {}.", broker_name(&connection));
    } else {
        println!(
            "Timed out waiting for the reconnection. Run {} to check later.",
            "snaptrade connections".green()
        );
    }
    Ok(())
}
