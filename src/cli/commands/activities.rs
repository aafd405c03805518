//! `snaptrade activities` — transaction history for one account, with
//! date/type filters and offset pagination.

use clap::Args;
use owo_colors::OwoColorize;

use crate::api::accounts::ActivityFilter;
use crate::cli::format::{money_or_na, num_cell, table};
use crate::cli::select_account::select_account;
use crate::cli::Context;
use crate::error::Result;

/// Server-side cap on the page size.
const MAX_LIMIT: u32 = 1000;

#[derive(Debug, Args)]
pub struct ActivitiesArgs {
    /// Inclusive start date, YYYY-MM-DD.
    #[arg(long)]
    pub start_date: Option<String>,
    /// Inclusive end date, YYYY-MM-DD.
    #[arg(long)]
    pub end_date: Option<String>,
    /// Comma-separated transaction types (e.g. BUY,SELL,DIVIDEND).
    #[arg(long = "type")]
    pub activity_type: Option<String>,
    /// Page size, up to 1000.
    #[arg(long, default_value_t = MAX_LIMIT)]
    pub limit: u32,
    /// Number of records to skip.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

pub async fn run(ctx: &mut Context, args: ActivitiesArgs) -> Result<()> {
    let account = select_account(ctx).await?;
    let user = ctx.user().await?;

    let filter = ActivityFilter {
        start_date: args.start_date,
        end_date: args.end_date,
        activity_type: args.activity_type,
        limit: Some(args.limit.min(MAX_LIMIT)),
        offset: Some(args.offset),
    };
    let response = ctx
        .client
        .account_activities(&user, &account.id, &filter)
        .await?;

    let mut activities = response.data.unwrap_or_default();
    if activities.is_empty() {
        println!("No activities found.");
        return Ok(());
    }

    let total = response.pagination.as_ref().and_then(|p| p.total);
    match total {
        Some(total) => println!(
            "Showing {} of {} activities (offset {}).",
            activities.len(),
            total,
            args.offset
        ),
        None => println!("Showing {} activities.", activities.len()),
    }

    // Most recent first; ISO 8601 dates sort lexicographically.
    activities.sort_by(|a, b| match (&a.trade_date, &b.trade_date) {
        (Some(a), Some(b)) => b.cmp(a),
        _ => std::cmp::Ordering::Equal,
    });

    let mut out = table(&[
        "Date", "Type", "Symbol", "Description", "Quantity", "Price", "Amount", "Fee",
    ]);
    for activity in &activities {
        let code = activity.currency_code();
        out.add_row(vec![
            comfy_table::Cell::new(
                activity
                    .trade_date
                    .as_deref()
                    .map(|d| d.get(..10).unwrap_or(d))
                    .unwrap_or("N/A"),
            ),
            comfy_table::Cell::new(activity.activity_type.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(activity.display_symbol().unwrap_or("N/A")),
            comfy_table::Cell::new(truncate(activity.description.as_deref().unwrap_or(""), 28)),
            num_cell(activity.units.map(|u| u.to_string()).unwrap_or_else(|| "N/A".into())),
            num_cell(money_or_na(activity.price, code)),
            num_cell(money_or_na(activity.amount, code)),
            num_cell(money_or_na(activity.fee, code)),
        ]);
    }
    println!("{out}");

    if let Some(total) = total {
        let next = u64::from(args.offset) + activities.len() as u64;
        if next < total {
            println!(
                "More available: rerun with {} for the next page.",
                format!("--offset {next}").green()
            );
        }
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}
