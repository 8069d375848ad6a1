//! # Rate Table
//!
//! Static mapping from an ordered `(source, destination)` symbol pair to the number
//! of destination units per one source unit.
//!
//! The built-in table is sample data. It is neither symmetric nor transitively
//! consistent (`ETH→USDT` times `USDT→ETH` is not `1`), and lookups return exactly
//! what is stored.

use std::collections::HashMap;

/// Rates keyed `source symbol -> destination symbol -> rate`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateTable {
    rates: HashMap<String, HashMap<String, f64>>,
}

impl RateTable {
    /// Build a table from already-validated nested rates.
    pub(crate) fn from_nested(rates: HashMap<String, HashMap<String, f64>>) -> Self {
        Self { rates }
    }

    /// Built-in sample rates.
    pub fn sample() -> Self {
        let entries: &[(&str, &str, f64)] = &[
            ("ETH", "DEXT", 2450.32),
            ("ETH", "USDT", 2500.0),
            ("ETH", "USDC", 2501.15),
            ("DEXT", "ETH", 0.000408),
            ("DEXT", "USDT", 1.02),
            ("DEXT", "USDC", 1.021),
            ("USDT", "ETH", 0.000399),
            ("USDT", "DEXT", 0.98),
            ("USDT", "USDC", 0.9998),
            ("USDC", "ETH", 0.0003998),
            ("USDC", "DEXT", 0.979),
            ("USDC", "USDT", 1.0002),
        ];

        let mut table = Self::default();
        for (source, dest, rate) in entries {
            table.insert(source, dest, *rate);
        }
        table
    }

    fn insert(&mut self, source: &str, dest: &str, rate: f64) {
        self.rates
            .entry(source.to_string())
            .or_default()
            .insert(dest.to_string(), rate);
    }

    /// Rate for `source → dest`, or `None` when the ordered pair has no entry.
    pub fn lookup_rate(&self, source: &str, dest: &str) -> Option<f64> {
        self.rates.get(source).and_then(|row| row.get(dest)).copied()
    }

    /// Number of stored ordered pairs.
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_pairs() {
        let table = RateTable::sample();
        assert_eq!(table.lookup_rate("ETH", "DEXT"), Some(2450.32));
        assert_eq!(table.lookup_rate("ETH", "USDT"), Some(2500.0));
    }

    #[test]
    fn test_lookup_is_ordered() {
        let table = RateTable::sample();
        assert_eq!(table.lookup_rate("DEXT", "ETH"), Some(0.000408));
        assert_ne!(table.lookup_rate("DEXT", "ETH"), table.lookup_rate("ETH", "DEXT"));
    }

    #[test]
    fn test_missing_pair_is_absent() {
        let table = RateTable::sample();
        assert_eq!(table.lookup_rate("USDC", "UNKNOWN"), None);
        assert_eq!(table.lookup_rate("WBTC", "ETH"), None);
    }

    #[test]
    fn test_sample_rates_are_not_reciprocal() {
        let table = RateTable::sample();
        let there = table.lookup_rate("ETH", "USDT").unwrap();
        let back = table.lookup_rate("USDT", "ETH").unwrap();
        assert!((there * back - 1.0).abs() > f64::EPSILON);
    }

    #[test]
    fn test_len_counts_ordered_pairs() {
        assert_eq!(RateTable::sample().len(), 12);
        assert!(RateTable::default().is_empty());
    }
}
