//! # Swap Core Library
//!
//! Quote derivation and pair state for the DEXTswap widget. Everything in here is
//! synchronous and free of I/O apart from reading the optional catalog file at
//! startup.
//!
//! ## Module Structure
//!
//! - **[`registry`]**: Ordered token catalog ([`Token`], [`TokenRegistry`])
//! - **[`rates`]**: Static `(source, dest) -> rate` table
//! - **[`quote`]**: The quote rules that fill the "To" field
//! - **[`pair`]**: [`PairController`] keeping the "To" amount derived, plus flip and max
//! - **[`settings`]**: Cosmetic slippage / deadline / provider settings
//! - **[`service`]**: Wallet and notifier collaborator traits
//! - **[`session`]**: [`SwapSession`], the screen-level state and actions
//! - **[`catalog`]**: Built-in or file-backed tokens and rates
//! - **[`config`]**: Environment configuration
//! - **[`error`]**: [`SwapError`] and [`Result`]
//!
//! ## Dependency Graph
//!
//! ```text
//! session
//!   ├── pair ── quote ── rates
//!   │     └── registry
//!   ├── settings
//!   ├── catalog ── config
//!   └── service (WalletConnector, Notifier)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lib_swap::config::SwapConfig;
//! use lib_swap::session::SwapSession;
//!
//! let mut session = SwapSession::from_config(&SwapConfig::default())?;
//! session.pair_mut().set_source_amount("2");
//! assert_eq!(session.pair().state().dest_amount, "4900.64");
//!
//! session.pair_mut().flip();
//! assert_eq!(session.pair().state().source_token.symbol, "DEXT");
//! # Ok::<(), lib_swap::SwapError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod pair;
pub mod quote;
pub mod rates;
pub mod registry;
pub mod service;
pub mod session;
pub mod settings;

// Re-export commonly used types for convenience
pub use error::{Result, SwapError};
pub use pair::{PairController, PairState, Side};
pub use quote::QuoteEngine;
pub use registry::{Token, TokenRegistry};
pub use service::{Notifier, WalletConnector, WalletError};
pub use session::{PrimaryAction, SwapSession};
