//! # Token Registry
//!
//! Ordered, immutable catalog of tradable tokens. Insertion order is display order;
//! a token's identity is its symbol.

use shared::dto::catalog::TokenRecord;

/// A tradable token as shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Short unique code, e.g. `"ETH"`.
    pub symbol: String,
    /// Display name, e.g. `"Ethereum"`.
    pub name: String,
    /// Glyph shown next to the symbol.
    pub icon: String,
    /// Formatted balance, display-only (e.g. `"1,250.00"`).
    pub balance: Option<String>,
}

impl Token {
    pub fn new(symbol: &str, name: &str, icon: &str, balance: Option<&str>) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            balance: balance.map(str::to_string),
        }
    }
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        Self {
            symbol: record.symbol,
            name: record.name,
            icon: record.icon,
            balance: record.balance,
        }
    }
}

/// Display-ordered token catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self {
            tokens: vec![
                Token::new("ETH", "Ethereum", "⟠", Some("2.5432")),
                Token::new("DEXT", "DexTools", "🔧", Some("1,250.00")),
                Token::new("USDT", "Tether USD", "₮", Some("500.25")),
                Token::new("USDC", "USD Coin", "⊙", Some("750.80")),
            ],
        }
    }
}

impl TokenRegistry {
    /// Build a registry from tokens already checked for unique symbols.
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// All tokens in display order.
    pub fn list_tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|token| token.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
