//! # Quote Engine
//!
//! Turns a typed "From" amount and a token pair into the string shown in the "To"
//! field.
//!
//! ## Rules
//!
//! First match wins:
//!
//! 1. Empty amount, an amount that is zero or not a number, or a same-token pair
//!    quotes as the literal `"0.0"`.
//! 2. The rate comes from the [`RateTable`]; a pair with no entry uses `1`.
//! 3. `amount * rate` is rounded to 6 decimal places, then rendered without
//!    trailing zeros (`2.000000` becomes `2`, `0.500000` becomes `0.5`).
//!
//! Rounding uses the standard library's fixed-precision formatter, which rounds the
//! exact binary value and breaks exact ties to even.
//!
//! ```rust
//! use lib_swap::quote::QuoteEngine;
//! use lib_swap::rates::RateTable;
//!
//! let engine = QuoteEngine::new(RateTable::sample());
//! assert_eq!(engine.quote("1", "ETH", "DEXT"), "2450.32");
//! assert_eq!(engine.quote("2", "ETH", "USDT"), "5000");
//! assert_eq!(engine.quote("", "ETH", "USDT"), "0.0");
//! ```

use shared::utils::format_number;
use tracing::debug;

use crate::rates::RateTable;

/// What the "To" field shows when there is nothing to convert.
pub const ZERO_QUOTE: &str = "0.0";

/// Decimal places kept before trailing zeros are stripped.
pub const QUOTE_DECIMALS: usize = 6;

/// Parse a typed amount.
///
/// Surrounding whitespace is ignored. Anything that is not a finite decimal number
/// (including `"1abc"`, `"NaN"` and `"inf"`) is `None`.
pub fn parse_amount(amount: &str) -> Option<f64> {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to [`QUOTE_DECIMALS`] places and drop trailing zeros.
fn round_and_strip(raw: f64) -> String {
    let fixed = format!("{:.prec$}", raw, prec = QUOTE_DECIMALS);
    let reparsed = fixed.parse::<f64>().unwrap_or(0.0);

    // Negative zero renders as "-0"
    if reparsed == 0.0 {
        return "0".to_string();
    }
    reparsed.to_string()
}

/// Price information row: `"Price per ETH"` / `"2,450.32 DEXT"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    pub label: String,
    pub value: String,
}

/// Pure quote computation over a static rate table.
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    rates: RateTable,
}

impl QuoteEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Rate for the pair, falling back to `1` when the table has no entry.
    pub fn effective_rate(&self, source: &str, dest: &str) -> f64 {
        match self.rates.lookup_rate(source, dest) {
            Some(rate) => rate,
            None => {
                debug!(source, dest, "No rate for pair, using 1");
                1.0
            }
        }
    }

    /// Destination amount for `amount` of `source` converted to `dest`.
    pub fn quote(&self, amount: &str, source: &str, dest: &str) -> String {
        if source == dest {
            return ZERO_QUOTE.to_string();
        }

        let value = match parse_amount(amount) {
            Some(value) if value != 0.0 => value,
            _ => return ZERO_QUOTE.to_string(),
        };

        let rate = self.effective_rate(source, dest);
        let converted = value * rate;
        // Finite input can still overflow
        if !converted.is_finite() {
            return ZERO_QUOTE.to_string();
        }
        round_and_strip(converted)
    }

    /// Price row for the pair, or `None` for a same-token pair.
    pub fn price_line(&self, source: &str, dest: &str) -> Option<PriceLine> {
        if source == dest {
            return None;
        }

        let rate = self.effective_rate(source, dest);
        // Sub-cent rates would render as 0.00
        let decimals = if rate >= 0.01 { 2 } else { QUOTE_DECIMALS };

        Some(PriceLine {
            label: format!("Price per {}", source),
            value: format!("{} {}", format_number(rate, decimals), dest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> QuoteEngine {
        QuoteEngine::new(RateTable::sample())
    }

    #[test]
    fn test_same_token_quotes_zero() {
        let engine = engine();
        for symbol in ["ETH", "DEXT", "USDT", "USDC", "UNLISTED"] {
            for amount in ["1", "0.5", "1250.00", "abc"] {
                assert_eq!(engine.quote(amount, symbol, symbol), "0.0");
            }
        }
    }

    #[test]
    fn test_empty_and_zero_quote_zero() {
        let engine = engine();
        assert_eq!(engine.quote("", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("0", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("0.000", "USDT", "USDC"), "0.0");
        assert_eq!(engine.quote("-0", "USDT", "USDC"), "0.0");
        assert_eq!(engine.quote("   ", "USDT", "USDC"), "0.0");
    }

    #[test]
    fn test_reference_quotes() {
        let engine = engine();
        assert_eq!(engine.quote("1", "ETH", "DEXT"), "2450.32");
        assert_eq!(engine.quote("2", "ETH", "USDT"), "5000");
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        let engine = engine();
        assert_eq!(engine.quote("0.5", "ETH", "USDT"), "1250");
        assert_eq!(engine.quote("0.5", "USDC", "UNKNOWN"), "0.5");
        assert_eq!(engine.quote("2.000", "WBTC", "ETH"), "2");
    }

    #[test]
    fn test_rounds_to_six_decimals() {
        let engine = engine();
        // 1 * 0.0003998 keeps only six places
        assert_eq!(engine.quote("1", "USDC", "ETH"), "0.0004");
        // 0.1234567 at rate 1
        assert_eq!(engine.quote("0.1234567", "USDC", "UNKNOWN"), "0.123457");
        // Below half of the last kept place
        assert_eq!(engine.quote("0.0000001", "USDC", "UNKNOWN"), "0");
    }

    #[test]
    fn test_overflowing_product_quotes_zero() {
        let engine = engine();
        assert_eq!(engine.quote("1e308", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("-1e308", "ETH", "USDT"), "0.0");
        assert_eq!(engine.quote("inf", "ETH", "DEXT"), "0.0");
    }

    #[test]
    fn test_missing_rate_falls_back_to_one() {
        let engine = engine();
        assert_eq!(engine.quote("3", "USDC", "UNKNOWN"), "3");
        assert_eq!(engine.quote("42.25", "WBTC", "DEXT"), "42.25");
    }

    #[test]
    fn test_unparseable_amount_quotes_zero() {
        let engine = engine();
        assert_eq!(engine.quote("abc", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("1abc", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("1,250.00", "DEXT", "USDT"), "0.0");
        assert_eq!(engine.quote("NaN", "ETH", "DEXT"), "0.0");
        assert_eq!(engine.quote("inf", "ETH", "DEXT"), "0.0");
    }

    #[test]
    fn test_negative_amount_is_converted() {
        assert_eq!(engine().quote("-2", "ETH", "USDT"), "-5000");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 1.5 "), Some(1.5));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("infinity"), None);
    }

    #[test]
    fn test_price_line() {
        let engine = engine();

        let line = engine.price_line("ETH", "DEXT").unwrap();
        assert_eq!(line.label, "Price per ETH");
        assert_eq!(line.value, "2,450.32 DEXT");

        let line = engine.price_line("USDC", "ETH").unwrap();
        assert_eq!(line.value, "0.000400 ETH");

        let line = engine.price_line("USDC", "UNKNOWN").unwrap();
        assert_eq!(line.value, "1.00 UNKNOWN");

        assert!(engine.price_line("ETH", "ETH").is_none());
    }
}
