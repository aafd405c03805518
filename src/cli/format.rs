//! Table and value formatting helpers for command output.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use owo_colors::OwoColorize;

use crate::preview::format_money;

/// A table with the house style applied.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

/// Right-aligned cell for numeric columns.
pub fn num_cell(value: impl Into<String>) -> Cell {
    Cell::new(value.into()).set_alignment(CellAlignment::Right)
}

/// A money amount or `N/A` when missing.
pub fn money_or_na(amount: Option<f64>, currency: Option<&str>) -> String {
    match amount {
        Some(a) => format_money(a, currency),
        None => "N/A".to_owned(),
    }
}

/// P&L colored by sign, or `N/A` when it cannot be computed.
pub fn pnl_cell(pnl: Option<f64>, currency: Option<&str>) -> Cell {
    let cell = match pnl {
        Some(p) if p > 0.0 => Cell::new(format_money(p, currency).green().to_string()),
        Some(p) if p < 0.0 => Cell::new(format_money(p, currency).red().to_string()),
        Some(p) => Cell::new(format_money(p, currency)),
        None => Cell::new("N/A"),
    };
    cell.set_alignment(CellAlignment::Right)
}

/// Print the shared preview divider.
pub fn print_divider() {
    println!("{}", "\n-----------------------------------------------------".dimmed());
}
