//! `snaptrade status` — API health and credential check.

use owo_colors::OwoColorize;

use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let status = ctx.client.api_status().await?;
    let online = status.online.unwrap_or(false);
    println!(
        "API: {}",
        if online {
            "online".green().to_string()
        } else {
            "offline".red().to_string()
        }
    );
    if let Some(version) = status.version {
        println!("Version: {version}");
    }
    if let Some(timestamp) = &status.timestamp {
        println!("Server time: {timestamp}");
    }

    let partner = ctx.client.partner_info().await?;
    println!(
        "Credentials: {} (partner: {})",
        "valid".green(),
        partner.name.as_deref().unwrap_or("unknown")
    );
    println!("Profile: {}", ctx.store.active_profile_name());
    Ok(())
}
