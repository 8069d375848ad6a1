//! # Swap Configuration
//!
//! Startup configuration loaded from environment variables (and an optional `.env`
//! file via `dotenvy`). Configuration is validated once at startup so that a bad
//! catalog path or connector setup fails before the window opens.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SWAP_CATALOG_PATH` | unset | JSON catalog replacing the built-in tokens and rates |
//! | `SWAP_DEFAULT_SOURCE` | `ETH` | Initial "From" token |
//! | `SWAP_DEFAULT_DEST` | `DEXT` | Initial "To" token |
//! | `SWAP_DEFAULT_AMOUNT` | `1` | Initial "From" amount |
//! | `SWAP_CHAIN` | `mainnet` | `mainnet` or `sepolia` |
//! | `SWAP_WALLET_CONNECTOR` | `injected` | `injected`, `metamask` or `walletconnect` |
//! | `SWAP_WALLETCONNECT_PROJECT_ID` | unset | Required by the `walletconnect` connector |
//!
//! ```rust,no_run
//! use lib_swap::config::SwapConfig;
//!
//! let config = SwapConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), lib_swap::SwapError>(())
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Result, SwapError};

/// Network the wallet connector targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chain {
    #[default]
    Mainnet,
    Sepolia,
}

impl Chain {
    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Mainnet => 1,
            Chain::Sepolia => 11_155_111,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Mainnet => write!(f, "Ethereum"),
            Chain::Sepolia => write!(f, "Sepolia"),
        }
    }
}

impl FromStr for Chain {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Chain::Mainnet),
            "sepolia" => Ok(Chain::Sepolia),
            other => Err(SwapError::Config(format!(
                "SWAP_CHAIN must be mainnet or sepolia, got '{}'",
                other
            ))),
        }
    }
}

/// Which wallet connector the widget offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorKind {
    /// Whatever provider the environment injects.
    #[default]
    Injected,
    MetaMask,
    WalletConnect,
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorKind::Injected => write!(f, "Injected"),
            ConnectorKind::MetaMask => write!(f, "MetaMask"),
            ConnectorKind::WalletConnect => write!(f, "WalletConnect"),
        }
    }
}

impl FromStr for ConnectorKind {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "injected" => Ok(ConnectorKind::Injected),
            "metamask" => Ok(ConnectorKind::MetaMask),
            "walletconnect" => Ok(ConnectorKind::WalletConnect),
            other => Err(SwapError::Config(format!(
                "SWAP_WALLET_CONNECTOR must be injected, metamask or walletconnect, got '{}'",
                other
            ))),
        }
    }
}

/// Swap widget configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapConfig {
    /// Optional catalog file; built-in tokens and rates are used when `None`.
    pub catalog_path: Option<PathBuf>,

    pub default_source: String,

    pub default_dest: String,

    /// Initial "From" amount, kept as typed text.
    pub default_amount: String,

    pub chain: Chain,

    pub connector: ConnectorKind,

    /// WalletConnect cloud project id.
    pub walletconnect_project_id: Option<String>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_source: "ETH".to_string(),
            default_dest: "DEXT".to_string(),
            default_amount: "1".to_string(),
            chain: Chain::Mainnet,
            connector: ConnectorKind::Injected,
            walletconnect_project_id: None,
        }
    }
}

impl SwapConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to read .env file");
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let chain = match get("SWAP_CHAIN") {
            Some(raw) => raw.parse()?,
            None => defaults.chain,
        };

        let connector = match get("SWAP_WALLET_CONNECTOR") {
            Some(raw) => raw.parse()?,
            None => defaults.connector,
        };

        Ok(Self {
            catalog_path: get("SWAP_CATALOG_PATH").map(PathBuf::from),
            default_source: get("SWAP_DEFAULT_SOURCE")
                .map(|s| s.trim().to_uppercase())
                .unwrap_or(defaults.default_source),
            default_dest: get("SWAP_DEFAULT_DEST")
                .map(|s| s.trim().to_uppercase())
                .unwrap_or(defaults.default_dest),
            default_amount: get("SWAP_DEFAULT_AMOUNT")
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.default_amount),
            chain,
            connector,
            walletconnect_project_id: get("SWAP_WALLETCONNECT_PROJECT_ID"),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.default_source.is_empty() || self.default_dest.is_empty() {
            return Err(SwapError::Config(
                "SWAP_DEFAULT_SOURCE and SWAP_DEFAULT_DEST must not be empty".to_string(),
            ));
        }

        if self.default_source == self.default_dest {
            return Err(SwapError::Config(format!(
                "SWAP_DEFAULT_SOURCE and SWAP_DEFAULT_DEST must differ (both are {})",
                self.default_source
            )));
        }

        if self.connector == ConnectorKind::WalletConnect && self.walletconnect_project_id.is_none() {
            return Err(SwapError::Config(
                "SWAP_WALLETCONNECT_PROJECT_ID must be set for the walletconnect connector".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = SwapConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SwapConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = SwapConfig::from_lookup(lookup_from(&[
            ("SWAP_DEFAULT_SOURCE", " usdt "),
            ("SWAP_DEFAULT_DEST", "usdc"),
            ("SWAP_DEFAULT_AMOUNT", " 25 "),
            ("SWAP_CHAIN", "Sepolia"),
            ("SWAP_CATALOG_PATH", "catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.default_source, "USDT");
        assert_eq!(config.default_dest, "USDC");
        assert_eq!(config.default_amount, "25");
        assert_eq!(config.chain, Chain::Sepolia);
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = SwapConfig::from_lookup(lookup_from(&[("SWAP_DEFAULT_SOURCE", "  ")])).unwrap();
        assert_eq!(config.default_source, "ETH");
    }

    #[test]
    fn test_invalid_chain_is_rejected() {
        let err = SwapConfig::from_lookup(lookup_from(&[("SWAP_CHAIN", "goerli")])).unwrap_err();
        assert!(matches!(err, SwapError::Config(_)));
    }

    #[test]
    fn test_walletconnect_requires_project_id() {
        let config =
            SwapConfig::from_lookup(lookup_from(&[("SWAP_WALLET_CONNECTOR", "walletconnect")])).unwrap();
        assert!(config.validate().is_err());

        let config = SwapConfig::from_lookup(lookup_from(&[
            ("SWAP_WALLET_CONNECTOR", "WalletConnect"),
            ("SWAP_WALLETCONNECT_PROJECT_ID", "demo-project-id"),
        ]))
        .unwrap();
        assert_eq!(config.connector, ConnectorKind::WalletConnect);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_identical_default_tokens_are_rejected() {
        let config = SwapConfig {
            default_dest: "ETH".to_string(),
            ..SwapConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Chain::Mainnet.chain_id(), 1);
        assert_eq!(Chain::Sepolia.chain_id(), 11_155_111);
    }
}
