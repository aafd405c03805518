//! `snaptrade connections` — list brokerage authorizations.

use crate::cli::format::table;
use crate::cli::Context;
use crate::error::Result;

pub async fn run(ctx: &mut Context) -> Result<()> {
    let user = ctx.user().await?;
    let connections = ctx.client.list_connections(&user).await?;

    if connections.is_empty() {
        println!("No brokerage connections found.");
        return Ok(());
    }

    let mut out = table(&["ID", "Broker", "Name", "Created", "Status"]);
    for connection in &connections {
        let broker = connection
            .brokerage
            .as_ref()
            .and_then(|b| b.name.as_deref())
            .unwrap_or("N/A");
        let status = match connection.disabled {
            Some(true) => "disabled",
            _ => "active",
        };
        out.add_row(vec![
            comfy_table::Cell::new(&connection.id),
            comfy_table::Cell::new(broker),
            comfy_table::Cell::new(connection.name.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(connection.created_date.as_deref().unwrap_or("N/A")),
            comfy_table::Cell::new(status),
        ]);
    }
    println!("{out}");
    Ok(())
}
