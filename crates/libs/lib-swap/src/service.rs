//! # Collaborator Traits
//!
//! The swap core never talks to a wallet or a UI toolkit directly. Both are handed
//! in as trait objects so the quote and pair logic can be exercised without either.
//!
//! - [`WalletConnector`]: connect/disconnect plus the observable connection state
//! - [`Notifier`]: fire-and-forget `notify(title, description)`

use thiserror::Error;

/// Failures reported by a wallet collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The provider refused the connection request.
    #[error("Connection rejected: {0}")]
    Rejected(String),

    /// The connector cannot be used with the current configuration.
    #[error("Connector misconfigured: {0}")]
    Misconfigured(String),
}

/// Wallet connection capability.
///
/// `is_connected` and `current_address` are read fresh after every call; callers
/// treat them as the source of truth instead of caching the result of `connect`.
pub trait WalletConnector {
    /// Request a connection and return the connected address.
    fn connect(&mut self) -> Result<String, WalletError>;

    /// Drop the current connection. No-op when already disconnected.
    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;

    fn current_address(&self) -> Option<String>;
}

/// Toast-style notification sink. Delivery is best effort.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str);
}
