use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use snaptrade_cli::cli::{self, Cli, Context};
use snaptrade_cli::error::Result;
use snaptrade_cli::settings::SettingsStore;
use snaptrade_cli::SnapTradeClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "snaptrade_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut store = SettingsStore::load()?;
    let client = bootstrap_client(&mut store).await?;

    let ctx = Context {
        client,
        store,
        use_last_account: cli.use_last_account,
    };
    cli::run(cli, ctx).await
}

/// Build an API client from the active profile, prompting for and
/// validating credentials on first run.
async fn bootstrap_client(store: &mut SettingsStore) -> Result<SnapTradeClient> {
    let profile = store.profile();

    let (client_id, consumer_key, fresh) = match (profile.client_id, profile.consumer_key) {
        (Some(id), Some(key)) => (id, key, false),
        _ => {
            println!("🔐 SnapTrade credentials are not configured yet.");
            println!("You can find them in the SnapTrade dashboard under API keys.\n");
            let id = snaptrade_cli::cli::prompt::input("Client ID")?;
            let key = snaptrade_cli::cli::prompt::password("Consumer Key")?;
            (id, key, true)
        }
    };

    let client = match &profile.base_path {
        Some(base) => SnapTradeClient::with_base_url(&client_id, &consumer_key, base),
        None => SnapTradeClient::new(&client_id, &consumer_key),
    };

    if fresh {
        // Validate before persisting so a typo does not stick.
        let partner = client.partner_info().await?;
        store.update_profile(|p| {
            p.client_id = Some(client_id.clone());
            p.consumer_key = Some(consumer_key.clone());
        })?;
        let name = partner.name.as_deref().unwrap_or(&client_id);
        println!("✅ Credentials verified for {name} and saved.\n");
    }

    Ok(client)
}
