//! Trade preview derivation.
//!
//! Pure computation behind the pre-submission confirmation screen: estimated
//! cost/credit, estimated share count, the synthetic bid/ask band of a
//! multi-leg strategy, and the per-contract net debit/credit. Everything
//! here tolerates missing market data by omitting the affected output —
//! a preview never errors and never prints a NaN.

use crate::strategy::OptionLeg;
use crate::types::accounts::{Account, Balance};
use crate::types::quotes::SymbolQuote;
use crate::types::{OrderAction, OrderType, TimeInForce};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The sizing of an order: a share/contract count or a dollar amount.
/// The two modes are mutually exclusive per order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderSize {
    Quantity(f64),
    Notional(f64),
}

/// The slice of a quote the preview math needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteView {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub bid_size: Option<f64>,
    pub ask_size: Option<f64>,
    pub currency: Option<String>,
}

impl From<&SymbolQuote> for QuoteView {
    fn from(quote: &SymbolQuote) -> Self {
        Self {
            bid: quote.bid_price,
            ask: quote.ask_price,
            last: quote.last_trade_price,
            bid_size: quote.bid_size,
            ask_size: quote.ask_size,
            currency: quote.currency().map(str::to_owned),
        }
    }
}

/// One leg paired with its quote, for band computation.
#[derive(Debug, Clone, PartialEq)]
pub struct LegQuote {
    pub action: OrderAction,
    pub quantity: u32,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
}

impl LegQuote {
    /// Pair a leg with the (possibly missing) quote for its OCC symbol.
    pub fn new(leg: &OptionLeg, quote: Option<&QuoteView>) -> Self {
        Self {
            action: leg.action,
            quantity: leg.quantity,
            bid: quote.and_then(|q| q.bid),
            ask: quote.and_then(|q| q.ask),
            last: quote.and_then(|q| q.last),
        }
    }
}

/// Account context shown at the top of a preview.
#[derive(Debug, Clone, Default)]
pub struct AccountContext {
    pub name: Option<String>,
    pub total_value: Option<f64>,
    pub currency: Option<String>,
    pub cash: Option<f64>,
    pub buying_power: Option<f64>,
    pub cash_currency: Option<String>,
}

impl AccountContext {
    /// Build from the account record plus its (first-currency) balance.
    pub fn new(account: &Account, balance: Option<&Balance>) -> Self {
        Self {
            name: account.name.clone(),
            total_value: account.total_value(),
            currency: account.total_currency().map(str::to_owned),
            cash: balance.and_then(|b| b.cash),
            buying_power: balance.and_then(|b| b.buying_power),
            cash_currency: balance
                .and_then(|b| b.currency.as_ref())
                .and_then(|c| c.code.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived quantities
// ---------------------------------------------------------------------------

/// Price an order would execute near: the limit price when given, otherwise
/// the last trade.
fn reference_price(limit_price: Option<f64>, quote: Option<&QuoteView>) -> Option<f64> {
    limit_price.or_else(|| quote.and_then(|q| q.last))
}

/// Estimated notional amount of a quantity-sized order.
pub fn estimated_amount(
    size: OrderSize,
    limit_price: Option<f64>,
    quote: Option<&QuoteView>,
) -> Option<f64> {
    match size {
        OrderSize::Quantity(qty) => Some(qty * reference_price(limit_price, quote)?),
        OrderSize::Notional(_) => None,
    }
}

/// Estimated share count of a notional-sized order.
pub fn estimated_quantity(
    size: OrderSize,
    limit_price: Option<f64>,
    quote: Option<&QuoteView>,
) -> Option<f64> {
    match size {
        OrderSize::Notional(notional) => {
            let price = reference_price(limit_price, quote)?;
            if price == 0.0 {
                return None;
            }
            Some(notional / price)
        }
        OrderSize::Quantity(_) => None,
    }
}

/// The synthetic bid/ask band of a multi-leg strategy, per contract.
///
/// Positive values are debits, negative values credits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyBand {
    pub bid: f64,
    pub ask: f64,
}

impl StrategyBand {
    /// Values in display order.
    ///
    /// When both sides come out negative (net credit either way), the raw
    /// values are swapped so the displayed bid is the smaller-magnitude
    /// credit and the displayed ask the larger. This flips **labels only**;
    /// no amount is ever altered.
    pub fn display(&self) -> (f64, f64) {
        if self.bid < 0.0 && self.ask < 0.0 && self.bid.abs() > self.ask.abs() {
            (self.ask, self.bid)
        } else {
            (self.bid, self.ask)
        }
    }
}

/// Compute the strategy-level bid/ask band from per-leg quotes.
///
/// A BUY leg is costed conservatively: its ask feeds the strategy bid and
/// its bid the strategy ask. A SELL leg mirrors (credit, so negated). Legs
/// are weighted by their quantity relative to the order's contract count.
/// `None` when any leg is missing either side of its book.
pub fn strategy_band(legs: &[LegQuote], total_contracts: u32) -> Option<StrategyBand> {
    if legs.is_empty() || total_contracts == 0 {
        return None;
    }

    let mut bid = 0.0;
    let mut ask = 0.0;
    for leg in legs {
        let weight = leg.quantity as f64 / total_contracts as f64;
        let (leg_bid, leg_ask) = (leg.bid?, leg.ask?);
        match leg.action {
            OrderAction::BUY => {
                bid += weight * leg_ask;
                ask += weight * leg_bid;
            }
            OrderAction::SELL => {
                bid -= weight * leg_bid;
                ask -= weight * leg_ask;
            }
        }
    }
    Some(StrategyBand { bid, ask })
}

/// Estimated per-contract net debit/credit of a strategy, from last trades.
///
/// An explicit limit price overrides the computed value when the order type
/// is Limit — the broker will not execute past it.
pub fn per_contract_price(
    legs: &[LegQuote],
    total_contracts: u32,
    order_type: OrderType,
    limit_price: Option<f64>,
) -> Option<f64> {
    if order_type == OrderType::Limit {
        if let Some(limit) = limit_price {
            return Some(limit);
        }
    }
    if legs.is_empty() || total_contracts == 0 {
        return None;
    }

    let mut net = 0.0;
    for leg in legs {
        let weight = leg.quantity as f64 / total_contracts as f64;
        let last = leg.last?;
        match leg.action {
            OrderAction::BUY => net += weight * last,
            OrderAction::SELL => net -= weight * last,
        }
    }
    Some(net)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// One labeled line of a preview, ready for terminal display.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLine {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

fn push_line(lines: &mut Vec<PreviewLine>, icon: &'static str, label: &'static str, value: Option<String>) {
    if let Some(value) = value {
        lines.push(PreviewLine { icon, label, value });
    }
}

/// Format an amount with thousands separators and a currency marker, e.g.
/// `$1,234.57` or `1,234.57 CHF`.
pub fn format_money(amount: f64, currency: Option<&str>) -> String {
    let code = currency.unwrap_or("USD");
    let symbol = match code {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    };

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match symbol {
        Some(s) => format!("{sign}{s}{grouped}.{frac:02}"),
        None => format!("{sign}{grouped}.{frac:02} {code}"),
    }
}

fn money(amount: Option<f64>, currency: Option<&str>) -> Option<String> {
    amount.map(|a| format_money(a, currency))
}

/// Account lines shared by every preview.
fn account_lines(lines: &mut Vec<PreviewLine>, account: &AccountContext) {
    push_line(lines, "🏦", "Account", account.name.clone());
    push_line(
        lines,
        "💰",
        "Total Value",
        money(account.total_value, account.currency.as_deref()),
    );
    push_line(
        lines,
        "💰",
        "Cash",
        money(account.cash, account.cash_currency.as_deref()),
    );
    push_line(
        lines,
        "💰",
        "Buying Power",
        money(account.buying_power, account.cash_currency.as_deref()),
    );
}

/// Order-parameter lines shared by every preview.
fn order_lines(
    lines: &mut Vec<PreviewLine>,
    action: OrderAction,
    order_type: OrderType,
    limit_price: Option<f64>,
    time_in_force: TimeInForce,
    currency: Option<&str>,
) {
    push_line(lines, "🛒", "Action", Some(action.to_string()));
    push_line(lines, "💡", "Order Type", Some(order_type.to_string()));
    push_line(lines, "🎯", "Limit Price", money(limit_price, currency));
    push_line(lines, "⏳", "Time in Force", Some(time_in_force.to_string()));
}

/// Preview of a single-instrument (equity or crypto) order.
#[derive(Debug, Clone)]
pub struct SimpleOrderPreview {
    pub ticker: String,
    pub action: OrderAction,
    pub size: OrderSize,
    pub order_type: OrderType,
    pub limit_price: Option<f64>,
    pub time_in_force: TimeInForce,
    pub quote: Option<QuoteView>,
    pub account: AccountContext,
}

impl SimpleOrderPreview {
    /// Render the preview as labeled lines. Missing inputs omit their lines.
    pub fn lines(&self) -> Vec<PreviewLine> {
        let mut lines = Vec::new();
        let currency = self.account.currency.as_deref();

        account_lines(&mut lines, &self.account);
        push_line(&mut lines, "📈", "Ticker", Some(self.ticker.clone()));
        push_line(&mut lines, "💵", "Quote", self.quote_line());

        order_lines(
            &mut lines,
            self.action,
            self.order_type,
            self.limit_price,
            self.time_in_force,
            currency,
        );
        match self.size {
            OrderSize::Quantity(qty) => {
                push_line(&mut lines, "🔢", "Shares", Some(trim_float(qty)));
            }
            OrderSize::Notional(notional) => {
                push_line(&mut lines, "💵", "Dollars", money(Some(notional), currency));
            }
        }

        let est_label = match self.action {
            OrderAction::BUY => "Est. Cost",
            OrderAction::SELL => "Est. Credit",
        };
        push_line(
            &mut lines,
            "📊",
            est_label,
            money(
                estimated_amount(self.size, self.limit_price, self.quote.as_ref()),
                currency,
            ),
        );
        push_line(
            &mut lines,
            "📊",
            "Est. Shares",
            estimated_quantity(self.size, self.limit_price, self.quote.as_ref()).map(trim_float),
        );

        lines
    }

    /// `Bid: $x xN · Ask: $y xM · Last: $z`, with missing pieces dropped.
    fn quote_line(&self) -> Option<String> {
        let quote = self.quote.as_ref()?;
        let currency = quote.currency.as_deref();
        let mut parts = Vec::new();
        if let Some(bid) = quote.bid {
            let size = quote.bid_size.map(|s| format!(" x{}", trim_float(s)));
            parts.push(format!(
                "Bid: {}{}",
                format_money(bid, currency),
                size.unwrap_or_default()
            ));
        }
        if let Some(ask) = quote.ask {
            let size = quote.ask_size.map(|s| format!(" x{}", trim_float(s)));
            parts.push(format!(
                "Ask: {}{}",
                format_money(ask, currency),
                size.unwrap_or_default()
            ));
        }
        if let Some(last) = quote.last {
            parts.push(format!("Last: {}", format_money(last, currency)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

/// Preview of a multi-leg option order.
#[derive(Debug, Clone)]
pub struct OptionOrderPreview {
    pub ticker: String,
    pub action: OrderAction,
    pub legs: Vec<OptionLeg>,
    pub leg_quotes: Vec<LegQuote>,
    pub contracts: u32,
    pub order_type: OrderType,
    pub limit_price: Option<f64>,
    pub time_in_force: TimeInForce,
    pub account: AccountContext,
}

impl OptionOrderPreview {
    /// Render the preview as labeled lines. Missing inputs omit their lines.
    pub fn lines(&self) -> Vec<PreviewLine> {
        let mut lines = Vec::new();
        let currency = self.account.currency.as_deref();

        account_lines(&mut lines, &self.account);
        push_line(&mut lines, "📈", "Underlying", Some(self.ticker.clone()));

        // First leg shares the label line; the rest align underneath.
        for (i, row) in self.leg_rows().into_iter().enumerate() {
            if i == 0 {
                push_line(&mut lines, "🧩", "Legs", Some(row));
            } else {
                push_line(&mut lines, "  ", "", Some(row));
            }
        }

        if let Some(band) = strategy_band(&self.leg_quotes, self.contracts) {
            let (bid, ask) = band.display();
            push_line(
                &mut lines,
                "💵",
                "Strategy Quote",
                Some(format!(
                    "Bid: {} · Ask: {}",
                    format_money(bid, currency),
                    format_money(ask, currency)
                )),
            );
        }

        order_lines(
            &mut lines,
            self.action,
            self.order_type,
            self.limit_price,
            self.time_in_force,
            currency,
        );
        push_line(&mut lines, "🔢", "Contracts", Some(self.contracts.to_string()));

        let per_contract = per_contract_price(
            &self.leg_quotes,
            self.contracts,
            self.order_type,
            self.limit_price,
        );
        push_line(
            &mut lines,
            "📊",
            "Est. Per Contract",
            money(per_contract, currency),
        );
        let est_label = match self.action {
            OrderAction::BUY => "Est. Cost",
            OrderAction::SELL => "Est. Credit",
        };
        push_line(
            &mut lines,
            "📊",
            est_label,
            money(
                per_contract.map(|p| p.abs() * self.contracts as f64 * 100.0),
                currency,
            ),
        );

        lines
    }

    /// Aligned `ACTION qty TYPE strike expiration` rows.
    fn leg_rows(&self) -> Vec<String> {
        let currency = self.account.currency.as_deref();
        let cells: Vec<[String; 5]> = self
            .legs
            .iter()
            .map(|leg| {
                [
                    leg.action.to_string(),
                    leg.quantity.to_string(),
                    leg.option_type.to_string(),
                    format_money(leg.strike, currency),
                    leg.expiration.to_string(),
                ]
            })
            .collect();

        let mut widths = [0usize; 5];
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        cells
            .iter()
            .map(|row| {
                format!(
                    "{:<w0$}  {:>w1$}  {:<w2$}  {:>w3$}  {}",
                    row[0],
                    row[1],
                    row[2],
                    row[3],
                    row[4],
                    w0 = widths[0],
                    w1 = widths[1],
                    w2 = widths[2],
                    w3 = widths[3],
                )
            })
            .collect()
    }
}

/// Format a float without trailing zeros (`10` not `10.000`).
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
