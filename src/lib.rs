//! # snaptrade-cli
//!
//! A command-line client for the [SnapTrade](https://snaptrade.com)
//! brokerage-aggregation API: connect brokerage accounts, inspect balances,
//! positions, and orders, and place equity, option (including multi-leg
//! strategies), and crypto trades.
//!
//! The crate doubles as a library. The HTTP layer lives in [`client`] and
//! [`api`]; the pure trading core — the OCC option symbol codec ([`occ`]),
//! strategy leg construction ([`strategy`]), position aggregation
//! ([`portfolio`]), and trade preview math ([`preview`]) — has no I/O and
//! can be used on its own.
//!
//! ## Quick Start
//!
//! ```no_run
//! use snaptrade_cli::SnapTradeClient;
//! use snaptrade_cli::types::accounts::UserAuth;
//!
//! #[tokio::main]
//! async fn main() -> snaptrade_cli::Result<()> {
//!     let client = SnapTradeClient::new("client-id", "consumer-key");
//!     let user = UserAuth {
//!         user_id: "user".into(),
//!         user_secret: "secret".into(),
//!     };
//!     for account in client.list_accounts(&user).await? {
//!         println!("{} ({})", account.name.unwrap_or_default(), account.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod constants;
pub mod error;
pub mod occ;
pub mod portfolio;
pub mod preview;
pub mod settings;
pub mod strategy;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::SnapTradeClient;
/// Re-export the error type and Result alias.
pub use error::{Result, SnapTradeError};
