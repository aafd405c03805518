//! Position aggregation tests.

use snaptrade_cli::portfolio::{aggregate_positions, RawPosition};
use snaptrade_cli::types::AssetClass;

fn equity(symbol: &str, quantity: f64, cost_basis: Option<f64>, currency: &str) -> RawPosition {
    RawPosition {
        symbol: symbol.to_owned(),
        quantity,
        cost_basis,
        currency: currency.to_owned(),
        asset_class: AssetClass::Equity,
    }
}

#[test]
fn merges_same_symbol_with_weighted_average() {
    let rollup = aggregate_positions(&[
        equity("AAPL", 10.0, Some(100.0), "USD"),
        equity("AAPL", 5.0, Some(120.0), "USD"),
    ]);

    assert_eq!(rollup.len(), 1);
    let agg = &rollup[0];
    assert_eq!(agg.total_quantity, 15.0);
    assert_eq!(agg.total_cost_basis, Some(1600.0));
    let avg = agg.avg_cost_basis.expect("avg should be present");
    assert!((avg - 106.666_666_666_7).abs() < 1e-9);
}

#[test]
fn one_missing_cost_basis_poisons_the_aggregate() {
    let rollup = aggregate_positions(&[
        equity("AAPL", 10.0, Some(100.0), "USD"),
        equity("AAPL", 5.0, None, "USD"),
        // A later priced lot must not resurrect the total.
        equity("AAPL", 3.0, Some(90.0), "USD"),
    ]);

    let agg = &rollup[0];
    assert_eq!(agg.total_quantity, 18.0);
    assert_eq!(agg.total_cost_basis, None);
    assert_eq!(agg.avg_cost_basis, None);
}

#[test]
fn currencies_never_merge() {
    let rollup = aggregate_positions(&[
        equity("SHOP", 10.0, Some(50.0), "USD"),
        equity("SHOP", 10.0, Some(70.0), "CAD"),
    ]);

    assert_eq!(rollup.len(), 2);
    assert_eq!((rollup[0].symbol.as_str(), rollup[0].currency.as_str()), ("SHOP", "USD"));
    assert_eq!((rollup[1].symbol.as_str(), rollup[1].currency.as_str()), ("SHOP", "CAD"));
    assert_eq!(rollup[0].avg_cost_basis, Some(50.0));
    assert_eq!(rollup[1].avg_cost_basis, Some(70.0));
}

#[test]
fn flat_positions_average_to_zero() {
    let rollup = aggregate_positions(&[
        equity("TSLA", 10.0, Some(200.0), "USD"),
        equity("TSLA", -10.0, Some(250.0), "USD"),
    ]);

    let agg = &rollup[0];
    assert_eq!(agg.total_quantity, 0.0);
    assert_eq!(agg.avg_cost_basis, Some(0.0));
}

#[test]
fn flat_position_with_missing_basis_still_averages_to_zero() {
    let rollup = aggregate_positions(&[
        equity("TSLA", 10.0, None, "USD"),
        equity("TSLA", -10.0, Some(250.0), "USD"),
    ]);

    let agg = &rollup[0];
    assert_eq!(agg.total_quantity, 0.0);
    assert_eq!(agg.total_cost_basis, None);
    assert_eq!(agg.avg_cost_basis, Some(0.0));
}

#[test]
fn output_preserves_first_seen_order() {
    let input = [
        equity("MSFT", 1.0, Some(300.0), "USD"),
        equity("AAPL", 1.0, Some(100.0), "USD"),
        equity("MSFT", 2.0, Some(310.0), "USD"),
        equity("GOOG", 1.0, Some(150.0), "USD"),
    ];
    let symbols: Vec<String> = aggregate_positions(&input)
        .into_iter()
        .map(|a| a.symbol)
        .collect();
    assert_eq!(symbols, vec!["MSFT", "AAPL", "GOOG"]);
}

#[test]
fn aggregation_is_idempotent_on_distinct_keys() {
    let input = [
        equity("AAPL", 10.0, Some(100.0), "USD"),
        equity("MSFT", 5.0, Some(300.0), "USD"),
    ];
    let once = aggregate_positions(&input);
    let again = aggregate_positions(&input);
    assert_eq!(once, again);
}

#[test]
fn option_rollups_scale_by_the_contract_multiplier() {
    let option = RawPosition {
        symbol: "AAPL".to_owned(),
        quantity: 2.0,
        // Already per-share-equivalent; RawPosition::option divides by 100
        // at the input boundary.
        cost_basis: Some(3.5),
        currency: "USD".to_owned(),
        asset_class: AssetClass::Option,
    };
    let rollup = aggregate_positions(&[option]);
    let agg = &rollup[0];

    assert_eq!(agg.price_multiplier(), 100.0);
    assert_eq!(agg.market_value(Some(4.0)), Some(800.0));
    assert_eq!(agg.unrealized_pnl(Some(4.0)), Some(100.0));
    assert_eq!(agg.market_value(None), None);
}

#[test]
fn pnl_needs_both_quote_and_basis() {
    let rollup = aggregate_positions(&[equity("AAPL", 10.0, None, "USD")]);
    let agg = &rollup[0];
    assert_eq!(agg.market_value(Some(150.0)), Some(1500.0));
    assert_eq!(agg.unrealized_pnl(Some(150.0)), None);
}
