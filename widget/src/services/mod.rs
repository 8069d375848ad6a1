//! # Services
//!
//! Concrete implementations of the swap core's injected capabilities.
//!
//! - `wallet`: [`LocalWallet`], a stand-in wallet connector for the desktop widget

pub mod wallet;

pub use wallet::{LocalWallet, WalletStatus};
