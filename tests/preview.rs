//! Trade preview math and rendering tests.

use chrono::NaiveDate;
use snaptrade_cli::preview::{
    estimated_amount, estimated_quantity, format_money, per_contract_price, strategy_band,
    AccountContext, LegQuote, OptionOrderPreview, OrderSize, PreviewLine, QuoteView,
    SimpleOrderPreview,
};
use snaptrade_cli::strategy::{StrategyKind, StrategyOrder, StrategyStrikes};
use snaptrade_cli::types::{OrderAction, OrderType, TimeInForce};

fn quote(bid: f64, ask: f64, last: f64) -> QuoteView {
    QuoteView {
        bid: Some(bid),
        ask: Some(ask),
        last: Some(last),
        bid_size: None,
        ask_size: None,
        currency: Some("USD".to_owned()),
    }
}

fn leg(action: OrderAction, quantity: u32, bid: f64, ask: f64, last: f64) -> LegQuote {
    LegQuote {
        action,
        quantity,
        bid: Some(bid),
        ask: Some(ask),
        last: Some(last),
    }
}

#[test]
fn quantity_orders_estimate_cost_from_last_trade() {
    let q = quote(49.9, 50.1, 50.0);
    let amount = estimated_amount(OrderSize::Quantity(10.0), None, Some(&q));
    assert_eq!(amount, Some(500.0));
    assert_eq!(estimated_quantity(OrderSize::Quantity(10.0), None, Some(&q)), None);
}

#[test]
fn limit_price_overrides_the_reference_price() {
    let q = quote(49.9, 50.1, 50.0);
    let amount = estimated_amount(OrderSize::Quantity(10.0), Some(48.0), Some(&q));
    assert_eq!(amount, Some(480.0));
}

#[test]
fn notional_orders_estimate_share_count() {
    let q = quote(49.9, 50.1, 50.0);
    let shares = estimated_quantity(OrderSize::Notional(500.0), None, Some(&q));
    assert_eq!(shares, Some(10.0));
    assert_eq!(estimated_amount(OrderSize::Notional(500.0), None, Some(&q)), None);
}

#[test]
fn zero_price_yields_no_share_estimate() {
    let q = quote(0.0, 0.0, 0.0);
    assert_eq!(estimated_quantity(OrderSize::Notional(500.0), None, Some(&q)), None);
}

#[test]
fn missing_quote_yields_no_estimates() {
    assert_eq!(estimated_amount(OrderSize::Quantity(10.0), None, None), None);
    assert_eq!(estimated_quantity(OrderSize::Notional(500.0), None, None), None);
}

#[test]
fn buy_legs_cost_the_ask_into_the_band_bid() {
    let band = strategy_band(&[leg(OrderAction::BUY, 1, 2.0, 2.4, 2.2)], 1)
        .expect("band should exist");
    assert_eq!(band.bid, 2.4);
    assert_eq!(band.ask, 2.0);
}

#[test]
fn sell_legs_enter_the_band_negated() {
    let band = strategy_band(&[leg(OrderAction::SELL, 1, 2.0, 2.4, 2.2)], 1)
        .expect("band should exist");
    assert_eq!(band.bid, -2.0);
    assert_eq!(band.ask, -2.4);
}

#[test]
fn spread_band_nets_the_two_legs() {
    // Buy the 100 call at 5.0/5.4, sell the 110 call at 2.0/2.4.
    let legs = [
        leg(OrderAction::BUY, 1, 5.0, 5.4, 5.2),
        leg(OrderAction::SELL, 1, 2.0, 2.4, 2.2),
    ];
    let band = strategy_band(&legs, 1).expect("band should exist");
    assert!((band.bid - 3.4).abs() < 1e-9);
    assert!((band.ask - 2.6).abs() < 1e-9);
    // Positive band: display order is untouched.
    assert_eq!(band.display(), (band.bid, band.ask));
}

#[test]
fn credit_band_swaps_labels_without_changing_amounts() {
    // Net credit both sides, with the raw bid the larger credit.
    let legs = [
        leg(OrderAction::SELL, 1, 5.0, 5.4, 5.2),
        leg(OrderAction::BUY, 1, 2.0, 2.4, 2.2),
    ];
    let band = strategy_band(&legs, 1).expect("band should exist");
    assert!((band.bid - -2.6).abs() < 1e-9);
    assert!((band.ask - -3.4).abs() < 1e-9);
    // |bid| < |ask| here, so no swap.
    assert_eq!(band.display(), (band.bid, band.ask));

    let swapped = snaptrade_cli::preview::StrategyBand { bid: -3.4, ask: -2.6 };
    assert_eq!(swapped.display(), (-2.6, -3.4));
}

#[test]
fn band_weights_legs_by_contract_share() {
    let legs = [leg(OrderAction::BUY, 2, 1.0, 1.2, 1.1)];
    let band = strategy_band(&legs, 4).expect("band should exist");
    assert!((band.bid - 0.6).abs() < 1e-9);
    assert!((band.ask - 0.5).abs() < 1e-9);
}

#[test]
fn band_is_missing_when_any_leg_lacks_a_side() {
    let mut legs = vec![
        leg(OrderAction::BUY, 1, 5.0, 5.4, 5.2),
        leg(OrderAction::SELL, 1, 2.0, 2.4, 2.2),
    ];
    legs[1].ask = None;
    assert_eq!(strategy_band(&legs, 1), None);
    assert_eq!(strategy_band(&[], 1), None);
}

#[test]
fn per_contract_price_nets_last_trades() {
    let legs = [
        leg(OrderAction::BUY, 1, 5.0, 5.4, 5.2),
        leg(OrderAction::SELL, 1, 2.0, 2.4, 2.2),
    ];
    let net = per_contract_price(&legs, 1, OrderType::Market, None).expect("net price");
    assert!((net - 3.0).abs() < 1e-9);
}

#[test]
fn limit_orders_pin_the_per_contract_price() {
    let legs = [leg(OrderAction::BUY, 1, 5.0, 5.4, 5.2)];
    assert_eq!(per_contract_price(&legs, 1, OrderType::Limit, Some(4.75)), Some(4.75));
    // Market orders ignore the limit.
    assert_eq!(per_contract_price(&legs, 1, OrderType::Market, Some(4.75)), Some(5.2));
}

#[test]
fn format_money_groups_and_marks_currencies() {
    assert_eq!(format_money(1234.567, Some("USD")), "$1,234.57");
    assert_eq!(format_money(1234.567, None), "$1,234.57");
    assert_eq!(format_money(-42.0, Some("EUR")), "-€42.00");
    assert_eq!(format_money(1_000_000.0, Some("GBP")), "£1,000,000.00");
    assert_eq!(format_money(99.9, Some("CHF")), "99.90 CHF");
}

fn labels(lines: &[PreviewLine]) -> Vec<&'static str> {
    lines.iter().map(|l| l.label).collect()
}

#[test]
fn simple_preview_omits_lines_for_missing_data() {
    let bare = SimpleOrderPreview {
        ticker: "AAPL".to_owned(),
        action: OrderAction::BUY,
        size: OrderSize::Quantity(10.0),
        order_type: OrderType::Market,
        limit_price: None,
        time_in_force: TimeInForce::Day,
        quote: None,
        account: AccountContext::default(),
    };
    let lines = bare.lines();
    let labels = labels(&lines);
    assert!(!labels.contains(&"Quote"));
    assert!(!labels.contains(&"Est. Cost"));
    assert!(!labels.contains(&"Account"));
    assert!(labels.contains(&"Ticker"));
    assert!(labels.contains(&"Shares"));
}

#[test]
fn simple_preview_renders_quote_and_estimate() {
    let preview = SimpleOrderPreview {
        ticker: "AAPL".to_owned(),
        action: OrderAction::BUY,
        size: OrderSize::Quantity(10.0),
        order_type: OrderType::Market,
        limit_price: None,
        time_in_force: TimeInForce::Day,
        quote: Some(quote(49.9, 50.1, 50.0)),
        account: AccountContext::default(),
    };
    let lines = preview.lines();
    let cost = lines
        .iter()
        .find(|l| l.label == "Est. Cost")
        .expect("cost line present");
    assert_eq!(cost.value, "$500.00");

    let sell = SimpleOrderPreview {
        action: OrderAction::SELL,
        ..preview
    };
    assert!(sell.lines().iter().any(|l| l.label == "Est. Credit"));
}

#[test]
fn option_preview_omits_lines_without_legs_or_quotes() {
    let bare = OptionOrderPreview {
        ticker: "AAPL".to_owned(),
        action: OrderAction::BUY,
        legs: Vec::new(),
        leg_quotes: Vec::new(),
        contracts: 1,
        order_type: OrderType::Market,
        limit_price: None,
        time_in_force: TimeInForce::Day,
        account: AccountContext::default(),
    };
    let lines = bare.lines();
    let labels = labels(&lines);
    assert!(!labels.contains(&"Legs"));
    assert!(!labels.contains(&"Strategy Quote"));
    assert!(!labels.contains(&"Est. Per Contract"));
    assert!(!labels.contains(&"Est. Cost"));
    assert!(labels.contains(&"Underlying"));
    assert!(labels.contains(&"Contracts"));
}

#[test]
fn option_preview_renders_leg_rows_for_a_built_spread() {
    let order = StrategyOrder {
        kind: StrategyKind::VerticalCallSpread,
        ticker: "AAPL".to_owned(),
        expiration: NaiveDate::from_ymd_opt(2026, 1, 16).expect("valid date"),
        strikes: StrategyStrikes::LowHigh { low: 100.0, high: 110.0 },
        action: OrderAction::BUY,
        contracts: 1,
    };
    let legs = order.build_legs().expect("spread builds");
    let leg_quotes: Vec<LegQuote> = legs
        .iter()
        .zip([quote(5.0, 5.4, 5.2), quote(2.0, 2.4, 2.2)].iter())
        .map(|(leg, q)| LegQuote::new(leg, Some(q)))
        .collect();

    let preview = OptionOrderPreview {
        ticker: order.ticker.clone(),
        action: order.action,
        legs,
        leg_quotes,
        contracts: order.contracts,
        order_type: OrderType::Market,
        limit_price: None,
        time_in_force: TimeInForce::Day,
        account: AccountContext::default(),
    };
    let lines = preview.lines();

    // Two leg rows: the first carries the label, the second aligns under it.
    let leg_lines: Vec<&PreviewLine> = lines
        .iter()
        .filter(|l| l.label == "Legs" || (l.label.is_empty() && l.icon == "  "))
        .collect();
    assert_eq!(leg_lines.len(), 2);
    assert_eq!(leg_lines[0].label, "Legs");
    assert!(leg_lines[0].value.contains("BUY"));
    assert!(leg_lines[0].value.contains("$100"));
    assert!(leg_lines[1].label.is_empty());
    assert!(leg_lines[1].value.contains("SELL"));
    assert!(leg_lines[1].value.contains("$110"));

    let band = lines
        .iter()
        .find(|l| l.label == "Strategy Quote")
        .expect("band line present");
    assert!(band.value.contains("$3.40") && band.value.contains("$2.60"));

    let per_contract = lines
        .iter()
        .find(|l| l.label == "Est. Per Contract")
        .expect("per-contract line present");
    assert_eq!(per_contract.value, "$3.00");

    let cost = lines
        .iter()
        .find(|l| l.label == "Est. Cost")
        .expect("cost line present");
    assert_eq!(cost.value, "$300.00");
}
