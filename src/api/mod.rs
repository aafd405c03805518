//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`SnapTradeClient`](crate::client::SnapTradeClient) via `impl` blocks.
//! All methods handle JSON serialization, HTTP transport, request signing,
//! and error mapping automatically.
//!
//! ## Usage
//!
//! Import the relevant types and call methods on your `SnapTradeClient`:
//!
//! ```no_run
//! use snaptrade_cli::SnapTradeClient;
//! use snaptrade_cli::types::accounts::UserAuth;
//!
//! # #[tokio::main]
//! # async fn main() -> snaptrade_cli::Result<()> {
//! let client = SnapTradeClient::new("MYAPP", "consumer-key");
//! let user = UserAuth { user_id: "u".into(), user_secret: "s".into() };
//! let accounts = client.list_accounts(&user).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |---|---|
//! | [`auth`] | User registration, partner info, API status |
//! | [`accounts`] | Accounts, balances, positions, holdings, orders, activities |
//! | [`trading`] | Quotes and order placement/replacement/cancellation |
//! | [`connections`] | Brokerage authorizations and the connection portal |

pub mod accounts;
pub mod auth;
pub mod connections;
pub mod trading;
