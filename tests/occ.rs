//! OCC symbol codec tests.

use chrono::NaiveDate;

use snaptrade_cli::error::SnapTradeError;
use snaptrade_cli::occ;
use snaptrade_cli::types::OptionType;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn encodes_the_canonical_example() {
    let symbol = occ::encode("AAPL", date(2025, 1, 18), 100.0, OptionType::CALL)
        .expect("encode failed");
    assert_eq!(symbol, "AAPL  250118C00100000");
    assert_eq!(symbol.len(), 21);
}

#[test]
fn encode_pads_and_uppercases_the_ticker() {
    let symbol = occ::encode(" f ", date(2026, 6, 19), 12.5, OptionType::PUT)
        .expect("encode failed");
    assert_eq!(symbol, "F     260619P00012500");
}

#[test]
fn encode_keeps_fractional_strikes_exact() {
    let symbol = occ::encode("XYZ", date(2025, 3, 21), 7.505, OptionType::CALL)
        .expect("encode failed");
    assert!(symbol.ends_with("00007505"));
}

#[test]
fn encode_rejects_bad_tickers() {
    for ticker in ["", "TOOLONGX", "BAD SYM", "AB-CD"] {
        let err = occ::encode(ticker, date(2025, 1, 18), 100.0, OptionType::CALL)
            .expect_err("should reject");
        assert!(matches!(err, SnapTradeError::InvalidOrderParameter(_)), "{ticker:?}: {err}");
    }
}

#[test]
fn encode_rejects_bad_strikes() {
    for strike in [0.0, -5.0, 100.0001, 100_000_000.0] {
        let err = occ::encode("AAPL", date(2025, 1, 18), strike, OptionType::CALL)
            .expect_err("should reject");
        assert!(matches!(err, SnapTradeError::InvalidOrderParameter(_)), "{strike}: {err}");
    }
}

#[test]
fn encode_rejects_out_of_range_expirations() {
    for expiration in [date(1969, 12, 31), date(2070, 1, 1)] {
        let err = occ::encode("AAPL", expiration, 100.0, OptionType::CALL)
            .expect_err("should reject");
        assert!(matches!(err, SnapTradeError::InvalidOrderParameter(_)));
    }
}

#[test]
fn decodes_a_full_symbol() {
    let fields = occ::decode("AAPL  250118C00100000").expect("decode failed");
    assert_eq!(fields.option_type, OptionType::CALL);
    assert_eq!(fields.strike, 100.0);
    assert_eq!(fields.expiration, date(2025, 1, 18));
}

#[test]
fn decodes_a_bare_tail() {
    let fields = occ::decode("301220P00004505").expect("decode failed");
    assert_eq!(fields.option_type, OptionType::PUT);
    assert_eq!(fields.strike, 4.505);
    assert_eq!(fields.expiration, date(2030, 12, 20));
}

#[test]
fn decode_applies_the_century_pivot() {
    assert_eq!(
        occ::decode("700101C00001000").expect("decode failed").expiration,
        date(1970, 1, 1)
    );
    assert_eq!(
        occ::decode("690101C00001000").expect("decode failed").expiration,
        date(2069, 1, 1)
    );
}

#[test]
fn decode_round_trips_encode() {
    let expiration = date(2027, 9, 17);
    let symbol =
        occ::encode("TSLA", expiration, 420.5, OptionType::PUT).expect("encode failed");
    let fields = occ::decode(&symbol).expect("decode failed");
    assert_eq!(fields.option_type, OptionType::PUT);
    assert_eq!(fields.strike, 420.5);
    assert_eq!(fields.expiration, expiration);
}

#[test]
fn decode_rejects_malformed_symbols() {
    let cases = [
        "",
        "AAPL",
        "AAPL  250118C0010000",   // 20 chars
        "AAPL  250118C001000000", // 22 chars
        "AAPL  2501x8C00100000",  // non-digit date
        "AAPL  250118X00100000",  // bad type char
        "AAPL  250230C00100000",  // Feb 30
        "AAPL  250118C0010000x",  // non-digit strike
        "ÀAPL  250118C00100000",  // non-ascii
    ];
    for symbol in cases {
        let err = occ::decode(symbol).expect_err("should reject");
        assert!(matches!(err, SnapTradeError::MalformedSymbol(_)), "{symbol:?}: {err}");
    }
}

#[test]
fn describe_renders_a_readable_contract() {
    assert_eq!(
        occ::describe("AAPL  250118C00100000").as_deref(),
        Some("AAPL 2025-01-18 $100 CALL")
    );
    // Bare tails have no recoverable ticker.
    assert_eq!(
        occ::describe("250118P00012500").as_deref(),
        Some("2025-01-18 $12.5 PUT")
    );
    assert_eq!(occ::describe("not-an-occ-symbol"), None);
}
