//! `snaptrade brokers` — list the brokerages available to connect.

use crate::cli::format::table;
use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let partner = ctx.client.partner_info().await?;
    let mut brokers = partner.allowed_brokerages.unwrap_or_default();

    if brokers.is_empty() {
        println!("No brokerages are enabled for these credentials.");
        return Ok(());
    }

    brokers.sort_by(|a, b| a.slug.cmp(&b.slug));

    let mut out = table(&["Slug", "Name", "URL", "Allows Trading"]);
    for broker in &brokers {
        out.add_row(vec![
            comfy_table::Cell::new(broker.slug.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(broker.display_name.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(broker.url.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(match broker.allows_trading {
                Some(true) => "✅",
                Some(false) => "❌",
                None => "N/A",
            }),
        ]);
    }
    println!("{out}");
    Ok(())
}
