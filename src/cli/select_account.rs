//! Interactive account selection with last-account memory.

use owo_colors::OwoColorize;

use crate::cli::Context;
use crate::cli::prompt;
use crate::error::{Result, SnapTradeError};
use crate::preview::format_money;
use crate::types::accounts::Account;

/// Pick the account a command should operate on.
///
/// With `--use-last-account` and a remembered id that still exists, the
/// stored account wins. A single connected account short-circuits. Anything
/// else gets a numbered picker. The choice is persisted for next time.
pub async fn select_account(ctx: &mut Context) -> Result<Account> {
    let user = ctx.user().await?;
    let accounts = ctx.client.list_accounts(&user).await?;

    if accounts.is_empty() {
        return Err(SnapTradeError::Settings(format!(
            "no connected accounts; run {} first",
            "snaptrade connect".green()
        )));
    }

    if ctx.use_last_account {
        if let Some(last_id) = ctx.store.profile().last_account_id {
            if let Some(account) = accounts.iter().find(|a| a.id == last_id) {
                return Ok(account.clone());
            }
            tracing::debug!(%last_id, "remembered account no longer exists");
        }
    }

    let account = if accounts.len() == 1 {
        accounts.into_iter().next().expect("len checked above")
    } else {
        pick(accounts)?
    };

    ctx.remember_account(&account.id)?;
    Ok(account)
}

fn pick(accounts: Vec<Account>) -> Result<Account> {
    println!("Select an account:");
    for (i, account) in accounts.iter().enumerate() {
        let label = describe(account);
        println!("  {}. {label}", i + 1);
    }

    loop {
        let answer = prompt::input(&format!("Account [1-{}]:", accounts.len()))?;
        match answer.parse::<usize>() {
            Ok(n) if n >= 1 && n <= accounts.len() => {
                return Ok(accounts[n - 1].clone());
            }
            _ => println!("Please enter a number between 1 and {}.", accounts.len()),
        }
    }
}

fn describe(account: &Account) -> String {
    let name = account.name.as_deref().unwrap_or("Unnamed account");
    let institution = account.institution_name.as_deref().unwrap_or("Unknown broker");
    match account.total_value() {
        Some(total) => format!(
            "{institution} · {name} · {}",
            format_money(total, account.total_currency())
        ),
        None => format!("{institution} · {name}"),
    }
}
