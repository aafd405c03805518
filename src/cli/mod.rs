//! Command-line interface: argument definitions and dispatch.
//!
//! Each subcommand lives in its own module under [`commands`] with a clap
//! `Args` struct and a `run` function taking the shared [`Context`].

pub mod commands;
pub mod format;
pub mod prompt;
pub mod select_account;

use clap::{Parser, Subcommand};

use crate::client::SnapTradeClient;
use crate::error::Result;
use crate::settings::SettingsStore;
use crate::types::accounts::UserAuth;

/// CLI tool to interact with the SnapTrade API.
#[derive(Debug, Parser)]
#[command(name = "snaptrade", version, about)]
pub struct Cli {
    /// Reuse the last selected account for account-specific commands.
    #[arg(long, global = true)]
    pub use_last_account: bool,

    /// Enable verbose (debug) output.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the SnapTrade API status and your credentials.
    Status,
    /// List the brokerages available to connect.
    Brokers,
    /// Connect a brokerage account through the SnapTrade portal.
    Connect(commands::connect::ConnectArgs),
    /// Re-establish an existing disabled connection.
    Reconnect(commands::reconnect::ReconnectArgs),
    /// List brokerage connections.
    Connections,
    /// Remove a brokerage connection and its accounts.
    Disconnect(commands::disconnect::DisconnectArgs),
    /// List all connected accounts.
    Accounts,
    /// List all balances for a given account.
    Balances,
    /// List all positions for a given account.
    Positions(commands::positions::PositionsArgs),
    /// List combined balances, positions, and orders for a given account.
    Holdings,
    /// List transaction history for a given account.
    Activities(commands::activities::ActivitiesArgs),
    /// List the full order history for a given account.
    Orders,
    /// List recent orders for a given account.
    RecentOrders,
    /// Get the current quote for a given symbol.
    Quote(commands::quote::QuoteArgs),
    /// Execute different types of trades (equity, options, crypto).
    Trade(commands::trade::TradeArgs),
    /// Cancel an existing order.
    CancelOrder(commands::cancel_order::CancelOrderArgs),
    /// Manage named credential profiles.
    Profiles(commands::profiles::ProfilesArgs),
}

/// Shared state threaded through every command.
pub struct Context {
    pub client: SnapTradeClient,
    pub store: SettingsStore,
    pub use_last_account: bool,
}

impl Context {
    /// The stored SnapTrade user, registering one on first use.
    pub async fn user(&mut self) -> Result<UserAuth> {
        if let Some(user) = self.store.profile().user_auth() {
            return Ok(user);
        }

        println!("🔐 No user found in settings. Creating new SnapTrade user...");
        let login = std::env::var("USER").unwrap_or_else(|_| "user".to_owned());
        let user_id = format!("snaptrade-cli-{login}");
        let registered = self.client.register_user(&user_id).await?;
        self.store.update_profile(|p| {
            p.user_id = Some(registered.user_id.clone());
            p.user_secret = Some(registered.user_secret.clone());
        })?;
        println!("✅ User created: {}", registered.user_id);

        Ok(UserAuth {
            user_id: registered.user_id,
            user_secret: registered.user_secret,
        })
    }

    /// Remember the account picked for this profile.
    pub fn remember_account(&mut self, account_id: &str) -> Result<()> {
        self.store
            .update_profile(|p| p.last_account_id = Some(account_id.to_owned()))
    }
}

/// Dispatch a parsed command.
pub async fn run(cli: Cli, mut ctx: Context) -> Result<()> {
    match cli.command {
        Commands::Status => commands::status::run(&mut ctx).await,
        Commands::Brokers => commands::brokers::run(&mut ctx).await,
        Commands::Connect(args) => commands::connect::run(&mut ctx, args).await,
        Commands::Reconnect(args) => commands::reconnect::run(&mut ctx, args).await,
        Commands::Connections => commands::connections::run(&mut ctx).await,
        Commands::Disconnect(args) => commands::disconnect::run(&mut ctx, args).await,
        Commands::Accounts => commands::accounts::run(&mut ctx).await,
        Commands::Balances => commands::balances::run(&mut ctx).await,
        Commands::Positions(args) => commands::positions::run(&mut ctx, args).await,
        Commands::Holdings => commands::holdings::run(&mut ctx).await,
        Commands::Activities(args) => commands::activities::run(&mut ctx, args).await,
        Commands::Orders => commands::orders::run(&mut ctx).await,
        Commands::RecentOrders => commands::recent_orders::run(&mut ctx).await,
        Commands::Quote(args) => commands::quote::run(&mut ctx, args).await,
        Commands::Trade(args) => commands::trade::run(&mut ctx, args).await,
        Commands::CancelOrder(args) => commands::cancel_order::run(&mut ctx, args).await,
        Commands::Profiles(args) => commands::profiles::run(&mut ctx, args).await,
    }
}
