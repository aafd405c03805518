//! `snaptrade connect` — open the connection portal and wait for a new
//! brokerage authorization to appear.

use std::collections::HashSet;
use std::time::Duration;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::Context;
use crate::error::{Result, SnapTradeError};
use crate::types::accounts::UserAuth;
use crate::types::connections::{BrokerageAuthorization, LoginRequest};

/// How long to wait for the user to finish the portal flow.
const POLL_TIMEOUT: Duration = Duration::from_secs(300);
const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Args)]
pub struct ConnectArgs {
    /// Pre-select a brokerage in the portal, by slug (e.g. ALPACA).
    #[arg(long)]
    pub broker: Option<String>,
}

pub async fn run(ctx: &mut Context, args: ConnectArgs) -> Result<()> {
    let user = ctx.user().await?;

    let existing: HashSet<String> = ctx
        .client
        .list_connections(&user)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    let req = LoginRequest {
        broker: args.broker,
        connection_type: Some("trade".to_owned()),
        reconnect: None,
    };
    let outcome = portal_flow(ctx, &user, &req, move |c| !existing.contains(&c.id)).await?;

    if let Some(new) = outcome {
        println!(
            "✅ Connected to {} (authorization {}).",
            broker_name(&new),
            new.id
        );
    } else {
        println!(
            "Timed out waiting for a new connection. Run {} to check later.",
            "snaptrade connections".green()
        );
    }
    Ok(())
}

/// Generate a portal link, print it, and poll connections until one matches
/// `done` or the timeout elapses. Shared by connect and reconnect.
pub(crate) async fn portal_flow(
    ctx: &Context,
    user: &UserAuth,
    req: &LoginRequest,
    done: impl Fn(&BrokerageAuthorization) -> bool,
) -> Result<Option<BrokerageAuthorization>> {
    let redirect = ctx.client.login_link(user, req).await?;
    let uri = redirect.redirect_uri.ok_or_else(|| {
        SnapTradeError::Settings("the connection portal returned no redirect URI".into())
    })?;

    println!("Open this link in your browser to connect a brokerage account:\n");
    println!("  {}\n", uri.cyan());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template is valid"),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Waiting for the connection to complete...");

    let deadline = tokio::time::Instant::now() + POLL_TIMEOUT;
    loop {
        tokio::time::sleep(POLL_INTERVAL).await;

        let connections = ctx.client.list_connections(user).await?;
        if let Some(hit) = connections.into_iter().find(&done) {
            spinner.finish_and_clear();
            return Ok(Some(hit));
        }

        if tokio::time::Instant::now() >= deadline {
            spinner.finish_and_clear();
            return Ok(None);
        }
    }
}

pub(crate) fn broker_name(connection: &BrokerageAuthorization) -> &str {
    connection
        .brokerage
        .as_ref()
        .and_then(|b| b.name.as_deref())
        .unwrap_or("brokerage")
}
