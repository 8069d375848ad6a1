//! # Catalog Loading
//!
//! Bundles the [`TokenRegistry`] and [`RateTable`] the widget starts with. Both come
//! either from the built-in sample data or from a JSON file
//! ([`shared::dto::catalog::CatalogFile`]) named by `SWAP_CATALOG_PATH`.
//!
//! A configured file that cannot be used is an error; the widget does not quietly
//! fall back to sample data in that case.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use shared::dto::catalog::CatalogFile;
use tracing::info;

use crate::config::SwapConfig;
use crate::error::{Result, SwapError};
use crate::rates::RateTable;
use crate::registry::{Token, TokenRegistry};

/// Tokens and rates available to the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub registry: TokenRegistry,
    pub rates: RateTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            registry: TokenRegistry::default(),
            rates: RateTable::sample(),
        }
    }
}

impl Catalog {
    /// Catalog named by the configuration, or the built-in one.
    pub fn from_config(config: &SwapConfig) -> Result<Self> {
        match &config.catalog_path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SwapError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let file: CatalogFile = serde_json::from_str(&content)?;
        let catalog = Self::from_file(file)?;

        info!(
            path = %path.display(),
            tokens = catalog.registry.len(),
            rates = catalog.rates.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Validate a parsed catalog file.
    ///
    /// Rejects an empty token list, duplicate or blank symbols, and rates that are
    /// not finite and positive. Rates may mention symbols that are not in the token
    /// list; they are simply never looked up.
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        if file.tokens.is_empty() {
            return Err(SwapError::Catalog("catalog has no tokens".to_string()));
        }

        let mut seen = HashSet::new();
        for record in &file.tokens {
            if record.symbol.trim().is_empty() {
                return Err(SwapError::Catalog("token with empty symbol".to_string()));
            }
            if !seen.insert(record.symbol.clone()) {
                return Err(SwapError::Catalog(format!(
                    "duplicate token symbol {}",
                    record.symbol
                )));
            }
        }

        for (source, row) in &file.rates {
            for (dest, rate) in row {
                if !rate.is_finite() || *rate <= 0.0 {
                    return Err(SwapError::Catalog(format!(
                        "rate {}→{} must be a positive number, got {}",
                        source, dest, rate
                    )));
                }
            }
        }

        let tokens = file.tokens.into_iter().map(Token::from).collect();
        let rates: HashMap<String, HashMap<String, f64>> = file.rates;

        Ok(Self {
            registry: TokenRegistry::from_tokens(tokens),
            rates: RateTable::from_nested(rates),
        })
    }

    /// Resolve the configured default "From"/"To" tokens.
    pub fn default_pair(&self, config: &SwapConfig) -> Result<(Token, Token)> {
        let resolve = |symbol: &str| {
            self.registry.get(symbol).cloned().ok_or_else(|| {
                SwapError::Config(format!("default token {} is not in the catalog", symbol))
            })
        };

        Ok((resolve(&config.default_source)?, resolve(&config.default_dest)?))
    }
}
