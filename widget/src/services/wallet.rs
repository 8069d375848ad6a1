//! # Wallet Service
//!
//! A local stand-in for a browser wallet. It follows the configured connector and
//! chain but holds no keys: connecting hands out an EVM-style address, either a
//! preset one or a freshly generated random one.
//!
//! A WalletConnect connector needs a project id; without one every connection
//! attempt fails with [`WalletError::Misconfigured`].

use lib_swap::config::{Chain, ConnectorKind, SwapConfig};
use lib_swap::{WalletConnector, WalletError};
use rand::Rng;
use tracing::{debug, warn};

/// Wallet connection status
#[derive(Debug, Clone, PartialEq)]
pub enum WalletStatus {
    /// Not connected
    Disconnected,
    /// Connected with wallet address
    Connected(String),
    /// Last connection attempt failed
    Error(String),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Wallet connector backed by nothing but process memory.
#[derive(Debug, Clone)]
pub struct LocalWallet {
    connector: ConnectorKind,
    chain: Chain,
    project_id: Option<String>,
    /// Address handed out on connect instead of a random one
    preset_address: Option<String>,
    status: WalletStatus,
}

impl LocalWallet {
    pub fn new(connector: ConnectorKind, chain: Chain, project_id: Option<String>) -> Self {
        Self {
            connector,
            chain,
            project_id,
            preset_address: None,
            status: WalletStatus::Disconnected,
        }
    }

    pub fn from_config(config: &SwapConfig) -> Self {
        Self::new(
            config.connector,
            config.chain,
            config.walletconnect_project_id.clone(),
        )
    }

    /// Always connect as `address`.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.preset_address = Some(address.into());
        self
    }

    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn connector(&self) -> ConnectorKind {
        self.connector
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    fn generate_address() -> String {
        let mut bytes = [0u8; 20];
        rand::rng().fill(&mut bytes);
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        format!("0x{}", hex)
    }
}

impl WalletConnector for LocalWallet {
    fn connect(&mut self) -> Result<String, WalletError> {
        if self.connector == ConnectorKind::WalletConnect && self.project_id.is_none() {
            let err = WalletError::Misconfigured("WalletConnect requires a project id".to_string());
            warn!(connector = %self.connector, "Wallet connection refused: {}", err);
            self.status = WalletStatus::Error(err.to_string());
            return Err(err);
        }

        let address = self
            .preset_address
            .clone()
            .unwrap_or_else(Self::generate_address);

        debug!(
            connector = %self.connector,
            chain = %self.chain,
            chain_id = self.chain.chain_id(),
            address = %address,
            "Local wallet connected"
        );
        self.status = WalletStatus::Connected(address.clone());
        Ok(address)
    }

    fn disconnect(&mut self) {
        self.status = WalletStatus::Disconnected;
    }

    fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    fn current_address(&self) -> Option<String> {
        self.status.address().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_wallet_status() {
        let disconnected = WalletStatus::Disconnected;
        assert!(!disconnected.is_connected());
        assert!(disconnected.address().is_none());

        let connected = WalletStatus::Connected(ADDRESS.to_string());
        assert!(connected.is_connected());
        assert_eq!(connected.address(), Some(ADDRESS));

        let error = WalletStatus::Error("boom".to_string());
        assert!(!error.is_connected());
    }

    #[test]
    fn test_connect_generates_evm_address() {
        let mut wallet = LocalWallet::new(ConnectorKind::Injected, Chain::Mainnet, None);
        let address = wallet.connect().unwrap();

        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(wallet.current_address(), Some(address));
        assert!(wallet.is_connected());
    }

    #[test]
    fn test_preset_address() {
        let mut wallet =
            LocalWallet::new(ConnectorKind::MetaMask, Chain::Sepolia, None).with_address(ADDRESS);
        assert_eq!(wallet.connect().unwrap(), ADDRESS);
        assert_eq!(wallet.chain(), Chain::Sepolia);
        assert_eq!(wallet.connector(), ConnectorKind::MetaMask);
    }

    #[test]
    fn test_disconnect() {
        let mut wallet =
            LocalWallet::new(ConnectorKind::Injected, Chain::Mainnet, None).with_address(ADDRESS);
        wallet.connect().unwrap();
        wallet.disconnect();

        assert!(!wallet.is_connected());
        assert_eq!(wallet.current_address(), None);
        assert_eq!(wallet.status(), &WalletStatus::Disconnected);
    }

    #[test]
    fn test_walletconnect_requires_project_id() {
        let mut wallet = LocalWallet::new(ConnectorKind::WalletConnect, Chain::Mainnet, None);
        let err = wallet.connect().unwrap_err();

        assert!(matches!(err, WalletError::Misconfigured(_)));
        assert!(!wallet.is_connected());
        assert!(matches!(wallet.status(), WalletStatus::Error(_)));

        let mut configured = LocalWallet::new(
            ConnectorKind::WalletConnect,
            Chain::Mainnet,
            Some("demo-project-id".to_string()),
        );
        assert!(configured.connect().is_ok());
    }

    #[test]
    fn test_from_config() {
        let config = SwapConfig::default();
        let wallet = LocalWallet::from_config(&config);
        assert_eq!(wallet.connector(), config.connector);
        assert_eq!(wallet.chain(), config.chain);
    }
}
