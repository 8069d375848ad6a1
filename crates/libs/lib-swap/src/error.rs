//! # Centralized Error Handling
//!
//! This module defines the library-wide error type [`SwapError`]. It follows the
//! `thiserror` pattern used across the workspace.
//!
//! ## Where Errors Come From
//!
//! The quote path never fails: a missing rate falls back to `1` and an unparseable
//! amount quotes as zero. Errors only come from the edges:
//!
//! - [`Config`](SwapError::Config) - environment/configuration problems at startup
//! - [`Catalog`](SwapError::Catalog) - a catalog file that cannot be read or is inconsistent
//! - [`Validation`](SwapError::Validation) - rejected settings input (slippage, deadline)
//! - [`Wallet`](SwapError::Wallet) - wallet collaborator failures and swaps without a wallet
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_swap::error::{SwapError, Result};
//!
//! fn require_symbol(symbol: &str) -> Result<&str> {
//!     if symbol.is_empty() {
//!         return Err(SwapError::Config("symbol must not be empty".to_string()));
//!     }
//!     Ok(symbol)
//! }
//!
//! assert!(require_symbol("").is_err());
//! ```

use thiserror::Error;

use crate::service::WalletError;

/// Convenience type alias for `Result<T, SwapError>`.
pub type Result<T> = std::result::Result<T, SwapError>;

/// Library-wide error type.
///
/// Each variant carries a descriptive `String`; `#[error]` provides `Display`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwapError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog file could not be loaded or failed consistency checks.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// User input rejected by a settings validator.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wallet connection failure or an action that needs a connected wallet.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl From<WalletError> for SwapError {
    fn from(err: WalletError) -> Self {
        SwapError::Wallet(err.to_string())
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::Catalog(format!("invalid catalog JSON: {}", err))
    }
}
