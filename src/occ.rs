//! OCC option symbol codec.
//!
//! The Options Clearing Corporation symbol is a fixed-width 21-character
//! string: a 6-character space-padded ticker, a 6-digit `YYMMDD` expiration,
//! a 1-character `C`/`P` type, and an 8-digit strike in mills (strike ×
//! 1000, zero-padded).
//!
//! ```text
//! AAPL  250118C00100000
//! ──────┼─────┼┼───────
//! ticker yymmdd│ strike×1000
//!              C/P
//! ```
//!
//! Encoding is one-way for the ticker (padding is not recoverable); the
//! remaining fields round-trip exactly.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SnapTradeError};
use crate::types::OptionType;

/// Width of the ticker field.
const TICKER_WIDTH: usize = 6;
/// Length of the date + type + strike tail.
const TAIL_LEN: usize = 15;
/// Length of a full symbol.
const FULL_LEN: usize = TICKER_WIDTH + TAIL_LEN;

/// Two-digit years at or above this are 19xx, below are 20xx. This is the
/// conventional OCC pivot; expirations outside 1970–2069 are rejected on
/// encode rather than silently wrapped.
const CENTURY_PIVOT: u32 = 70;

/// Decoded fields of an OCC symbol. The ticker is intentionally absent:
/// space padding makes it unrecoverable in general, so callers keep the
/// underlying ticker out of band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccFields {
    pub option_type: OptionType,
    pub strike: f64,
    pub expiration: NaiveDate,
}

/// Encode an option contract as a 21-character OCC symbol.
///
/// The ticker is uppercased and right-padded with spaces to 6 characters.
/// Tickers longer than 6 characters, non-positive strikes, strikes with more
/// than 3 decimal places, and expirations outside 1970–2069 are rejected
/// with [`SnapTradeError::InvalidOrderParameter`].
pub fn encode(
    ticker: &str,
    expiration: NaiveDate,
    strike: f64,
    option_type: OptionType,
) -> Result<String> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() || ticker.len() > TICKER_WIDTH {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "ticker {ticker:?} must be 1-{TICKER_WIDTH} characters"
        )));
    }
    if !ticker.chars().all(|c| c.is_ascii_alphanumeric() || c == '.') {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "ticker {ticker:?} contains invalid characters"
        )));
    }

    let mills = strike_mills(strike)?;

    let year = expiration.year();
    if !(1970..=2069).contains(&year) {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "expiration {expiration} is outside the OCC-representable range 1970-2069"
        )));
    }

    Ok(format!(
        "{ticker:<6}{}{}{mills:08}",
        expiration.format("%y%m%d"),
        option_type.occ_char(),
    ))
}

/// Decode an OCC symbol.
///
/// Accepts either the bare 15-character tail (`yymmdd` + `C`/`P` + 8-digit
/// strike) or a full 21-character symbol, in which case the ticker prefix is
/// skipped. Any shape violation yields [`SnapTradeError::MalformedSymbol`];
/// no partial result is ever returned.
pub fn decode(symbol: &str) -> Result<OccFields> {
    let malformed = || SnapTradeError::MalformedSymbol(symbol.to_owned());

    if !symbol.is_ascii() {
        return Err(malformed());
    }
    let tail = match symbol.len() {
        TAIL_LEN => symbol,
        FULL_LEN => &symbol[TICKER_WIDTH..],
        _ => return Err(malformed()),
    };

    let (date_part, rest) = tail.split_at(6);
    let (type_part, strike_part) = rest.split_at(1);

    if !date_part.bytes().all(|b| b.is_ascii_digit())
        || !strike_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let option_type = type_part
        .chars()
        .next()
        .and_then(OptionType::from_occ_char)
        .ok_or_else(malformed)?;

    let yy: u32 = date_part[0..2].parse().map_err(|_| malformed())?;
    let mm: u32 = date_part[2..4].parse().map_err(|_| malformed())?;
    let dd: u32 = date_part[4..6].parse().map_err(|_| malformed())?;
    let year = if yy >= CENTURY_PIVOT { 1900 + yy } else { 2000 + yy };
    let expiration =
        NaiveDate::from_ymd_opt(year as i32, mm, dd).ok_or_else(malformed)?;

    let mills: u64 = strike_part.parse().map_err(|_| malformed())?;

    Ok(OccFields {
        option_type,
        strike: mills as f64 / 1000.0,
        expiration,
    })
}

/// Render a decoded symbol for humans, e.g. `AAPL 2025-01-18 $100 CALL`.
///
/// Returns `None` when the input is not an OCC symbol, so callers can fall
/// back to displaying the raw string.
pub fn describe(symbol: &str) -> Option<String> {
    let fields = decode(symbol).ok()?;
    let ticker = if symbol.len() == FULL_LEN {
        symbol[..TICKER_WIDTH].trim()
    } else {
        ""
    };
    let strike = if fields.strike.fract() == 0.0 {
        format!("{:.0}", fields.strike)
    } else {
        format!("{}", fields.strike)
    };
    Some(format!(
        "{}{}{} ${} {}",
        ticker,
        if ticker.is_empty() { "" } else { " " },
        fields.expiration,
        strike,
        fields.option_type,
    ))
}

/// Convert a strike price to an integral number of mills (tenths of a cent).
///
/// The OCC strike field is fixed-point with 3 decimal places, so the strike
/// must land on a mill boundary.
fn strike_mills(strike: f64) -> Result<u64> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "strike {strike} must be a positive number"
        )));
    }
    let mills = strike * 1000.0;
    let rounded = mills.round();
    if (mills - rounded).abs() > 1e-6 {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "strike {strike} has more than 3 decimal places"
        )));
    }
    if rounded >= 100_000_000.0 {
        return Err(SnapTradeError::InvalidOrderParameter(format!(
            "strike {strike} does not fit the 8-digit OCC strike field"
        )));
    }
    Ok(rounded as u64)
}
