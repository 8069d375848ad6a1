//! # Swap Session
//!
//! Everything the widget screen operates on: the catalog, the pair controller and
//! the settings panel, plus the wiring to the injected wallet and notifier.
//!
//! The session never owns a wallet or notifier. Each action borrows them for the
//! duration of the call and re-reads `is_connected`/`current_address` afterwards.
//!
//! ```rust
//! use lib_swap::config::SwapConfig;
//! use lib_swap::session::{PrimaryAction, SwapSession};
//! use lib_swap::service::{Notifier, WalletConnector, WalletError};
//!
//! struct Always(Option<String>);
//! impl WalletConnector for Always {
//!     fn connect(&mut self) -> Result<String, WalletError> {
//!         self.0 = Some("0x52908400098527886E0F7030069857D2E4169EE7".into());
//!         Ok(self.0.clone().unwrap())
//!     }
//!     fn disconnect(&mut self) { self.0 = None; }
//!     fn is_connected(&self) -> bool { self.0.is_some() }
//!     fn current_address(&self) -> Option<String> { self.0.clone() }
//! }
//!
//! struct Silent;
//! impl Notifier for Silent {
//!     fn notify(&mut self, _title: &str, _description: &str) {}
//! }
//!
//! let mut session = SwapSession::from_config(&SwapConfig::default())?;
//! let mut wallet = Always(None);
//! assert_eq!(session.primary_action(&wallet), PrimaryAction::ConnectWallet);
//!
//! session.trigger_primary(&mut wallet, &mut Silent)?;
//! assert_eq!(session.primary_action(&wallet), PrimaryAction::Swap);
//! # Ok::<(), lib_swap::SwapError>(())
//! ```

use shared::utils::truncate_address;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::SwapConfig;
use crate::error::{Result, SwapError};
use crate::pair::PairController;
use crate::quote::QuoteEngine;
use crate::registry::TokenRegistry;
use crate::service::{Notifier, WalletConnector};
use crate::settings::SwapSettings;

/// What the big button at the bottom of the widget does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    ConnectWallet,
    Swap,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::ConnectWallet => "Connect wallet",
            PrimaryAction::Swap => "Swap",
        }
    }
}

/// Widget-level state and actions.
#[derive(Debug, Clone)]
pub struct SwapSession {
    registry: TokenRegistry,
    pair: PairController,
    settings: SwapSettings,
    settings_open: bool,
}

impl SwapSession {
    pub fn new(registry: TokenRegistry, pair: PairController) -> Self {
        Self {
            registry,
            pair,
            settings: SwapSettings::default(),
            settings_open: false,
        }
    }

    /// Build the session from configuration: catalog, default pair and amount.
    pub fn from_config(config: &SwapConfig) -> Result<Self> {
        let catalog = Catalog::from_config(config)?;
        let (source, dest) = catalog.default_pair(config)?;
        let pair = PairController::new(
            QuoteEngine::new(catalog.rates),
            source,
            dest,
            &config.default_amount,
        );
        Ok(Self::new(catalog.registry, pair))
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn pair(&self) -> &PairController {
        &self.pair
    }

    pub fn pair_mut(&mut self) -> &mut PairController {
        &mut self.pair
    }

    pub fn settings(&self) -> &SwapSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SwapSettings {
        &mut self.settings
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    pub fn primary_action(&self, wallet: &dyn WalletConnector) -> PrimaryAction {
        if wallet.is_connected() {
            PrimaryAction::Swap
        } else {
            PrimaryAction::ConnectWallet
        }
    }

    /// Short address for the header, or `"Not connected"`.
    pub fn wallet_label(&self, wallet: &dyn WalletConnector) -> String {
        match wallet.current_address() {
            Some(address) if wallet.is_connected() => truncate_address(&address),
            _ => "Not connected".to_string(),
        }
    }

    /// Run whatever the primary button currently stands for.
    pub fn trigger_primary(
        &mut self,
        wallet: &mut dyn WalletConnector,
        notifier: &mut dyn Notifier,
    ) -> Result<()> {
        match self.primary_action(wallet) {
            PrimaryAction::ConnectWallet => self.connect(wallet, notifier).map(|_| ()),
            PrimaryAction::Swap => self.swap(wallet, notifier),
        }
    }

    /// Ask the wallet to connect.
    ///
    /// An already-connected wallet is left alone and its address returned. On
    /// failure the pair and settings are untouched and the error is both notified
    /// and returned.
    pub fn connect(
        &mut self,
        wallet: &mut dyn WalletConnector,
        notifier: &mut dyn Notifier,
    ) -> Result<String> {
        if let Some(address) = wallet.current_address().filter(|_| wallet.is_connected()) {
            return Ok(address);
        }

        let result = wallet
            .connect()
            .map_err(SwapError::from)
            .and_then(|_| {
                wallet.current_address().ok_or_else(|| {
                    SwapError::Wallet("wallet reported success without an address".to_string())
                })
            });

        match result {
            Ok(address) => {
                info!(address = %address, "Wallet connected");
                notifier.notify("Wallet Connected", "Successfully connected your wallet");
                Ok(address)
            }
            Err(e) => {
                warn!(error = %e, "Wallet connection failed");
                notifier.notify("Connection Failed", &connection_failure_message(&e));
                Err(e)
            }
        }
    }

    /// Drop the wallet connection. Notifies only if a wallet was connected.
    pub fn disconnect(&mut self, wallet: &mut dyn WalletConnector, notifier: &mut dyn Notifier) {
        let was_connected = wallet.is_connected();
        wallet.disconnect();

        if was_connected {
            info!("Wallet disconnected");
            notifier.notify("Wallet Disconnected", "Your wallet has been disconnected");
        }
    }

    /// Announce the swap of the current pair. Nothing is submitted anywhere.
    pub fn swap(&self, wallet: &dyn WalletConnector, notifier: &mut dyn Notifier) -> Result<()> {
        if !wallet.is_connected() {
            return Err(SwapError::Wallet("Connect a wallet before swapping".to_string()));
        }

        let state = self.pair.state();
        info!(
            source = %state.source_token.symbol,
            dest = %state.dest_token.symbol,
            source_amount = %state.source_amount,
            dest_amount = %state.dest_amount,
            slippage_bps = self.settings.slippage_bps(),
            deadline_minutes = self.settings.deadline_minutes(),
            provider = %self.settings.provider(),
            "Swap initiated"
        );

        notifier.notify(
            "Swap Initiated",
            &format!(
                "Swapping {} {} for {} {}",
                state.source_amount, state.source_token.symbol, state.dest_amount, state.dest_token.symbol
            ),
        );
        Ok(())
    }
}

/// Notification text for a failed connection: the wallet's own message.
fn connection_failure_message(err: &SwapError) -> String {
    match err {
        SwapError::Wallet(message) => message.clone(),
        other => other.to_string(),
    }
}
