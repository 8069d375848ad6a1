//! # Catalog DTOs
//!
//! On-disk shape of a token catalog: the ordered token list plus the rate table,
//! keyed `source symbol -> destination symbol -> rate`.
//!
//! ```text
//! {
//!   "tokens": [
//!     { "symbol": "ETH", "name": "Ethereum", "icon": "⟠", "balance": "2.5432" },
//!     { "symbol": "DEXT", "name": "DexTools", "icon": "🔧" }
//!   ],
//!   "rates": {
//!     "ETH": { "DEXT": 2450.32 }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One tradable token as it appears in the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub symbol: String,
    pub name: String,
    pub icon: String,
    /// Human-readable balance, e.g. `"1,250.00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

/// Complete catalog file: display-ordered tokens and the rate table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub tokens: Vec<TokenRecord>,
    #[serde(default)]
    pub rates: HashMap<String, HashMap<String, f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_file_parses_without_balance_or_rates() {
        let json = r#"{ "tokens": [ { "symbol": "ETH", "name": "Ethereum", "icon": "E" } ] }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();

        assert_eq!(file.tokens.len(), 1);
        assert_eq!(file.tokens[0].balance, None);
        assert!(file.rates.is_empty());
    }

    #[test]
    fn test_token_record_skips_missing_balance() {
        let record = TokenRecord {
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            icon: "⊙".to_string(),
            balance: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("balance"));
    }

    #[test]
    fn test_nested_rates() {
        let json = r#"{
            "tokens": [],
            "rates": { "ETH": { "USDT": 2500.0, "DEXT": 2450.32 } }
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.rates["ETH"]["USDT"], 2500.0);
        assert_eq!(file.rates["ETH"]["DEXT"], 2450.32);
    }
}
