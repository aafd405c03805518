//! Integration tests against the live SnapTrade API.
//!
//! # Running
//!
//! These tests require real SnapTrade partner credentials. Set the following
//! environment variables before running:
//!
//! ```sh
//! export SNAPTRADE_CLIENT_ID="your-client-id"
//! export SNAPTRADE_CONSUMER_KEY="your-consumer-key"
//! cargo test --test live -- --nocapture
//! ```
//!
//! Without these env vars, every test is silently skipped. Tests that need a
//! registered user additionally require `SNAPTRADE_USER_ID` and
//! `SNAPTRADE_USER_SECRET`.
//!
//! # What is tested
//!
//! - **Status** — API reachability and clock
//! - **Partner** — credential validity & deserialization
//! - **Connections / Accounts** — list queries for a registered user
//! - **Quotes** — equity quote on the first account
//! - **Error handling** — bad credentials produce a typed error

use snaptrade_cli::client::SnapTradeClient;
use snaptrade_cli::error::SnapTradeError;
use snaptrade_cli::types::accounts::UserAuth;

/// Helper: create a client from the environment or skip the test.
fn live_client() -> Option<SnapTradeClient> {
    let client_id = std::env::var("SNAPTRADE_CLIENT_ID").ok()?;
    let consumer_key = std::env::var("SNAPTRADE_CONSUMER_KEY").ok()?;
    if client_id.is_empty() || consumer_key.is_empty() {
        return None;
    }
    Some(SnapTradeClient::new(client_id, consumer_key))
}

/// Helper: stored user credentials, when provided.
fn live_user() -> Option<UserAuth> {
    Some(UserAuth {
        user_id: std::env::var("SNAPTRADE_USER_ID").ok()?,
        user_secret: std::env::var("SNAPTRADE_USER_SECRET").ok()?,
    })
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match live_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (SNAPTRADE_CLIENT_ID / SNAPTRADE_CONSUMER_KEY not set)");
                return;
            }
        }
    };
}

macro_rules! require_user {
    () => {
        match live_user() {
            Some(u) => u,
            None => {
                eprintln!("⏭  Skipped (SNAPTRADE_USER_ID / SNAPTRADE_USER_SECRET not set)");
                return;
            }
        }
    };
}

#[tokio::test]
async fn test_api_status() {
    let client = require_client!();
    let status = client.api_status().await.expect("api_status failed");
    assert_eq!(status.online, Some(true));
}

#[tokio::test]
async fn test_partner_info() {
    let client = require_client!();
    let partner = client.partner_info().await.expect("partner_info failed");
    assert!(partner.name.is_some() || partner.slug.is_some());
}

#[tokio::test]
async fn test_list_connections_and_accounts() {
    let client = require_client!();
    let user = require_user!();

    let connections = client
        .list_connections(&user)
        .await
        .expect("list_connections failed");
    eprintln!("{} connection(s)", connections.len());

    let accounts = client.list_accounts(&user).await.expect("list_accounts failed");
    for account in &accounts {
        assert!(!account.id.is_empty());
    }
}

#[tokio::test]
async fn test_equity_quote() {
    let client = require_client!();
    let user = require_user!();

    let accounts = client.list_accounts(&user).await.expect("list_accounts failed");
    let Some(account) = accounts.first() else {
        eprintln!("⏭  Skipped (no connected accounts)");
        return;
    };

    let quotes = client
        .account_quotes(&user, &account.id, "AAPL", true)
        .await
        .expect("account_quotes failed");
    assert!(!quotes.is_empty());
}

#[tokio::test]
async fn test_bad_credentials_yield_typed_error() {
    if live_client().is_none() {
        eprintln!("⏭  Skipped (SNAPTRADE_CLIENT_ID / SNAPTRADE_CONSUMER_KEY not set)");
        return;
    }
    let client_id = std::env::var("SNAPTRADE_CLIENT_ID").expect("checked above");
    let bad = SnapTradeClient::new(client_id, "wrong-consumer-key");

    let err = bad.partner_info().await.expect_err("should fail");
    assert!(
        matches!(err, SnapTradeError::Api(_) | SnapTradeError::HttpStatus { .. }),
        "unexpected error: {err}"
    );
}
