use super::*;
use lib_swap::config::{Chain, ConnectorKind};
use lib_swap::settings::Provider;
use lib_swap::{PrimaryAction, Side, WalletConnector};

const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

fn app() -> WidgetApp {
    let session = SwapSession::from_config(&SwapConfig::default()).unwrap();
    let wallet = LocalWallet::new(ConnectorKind::Injected, Chain::Mainnet, None).with_address(ADDRESS);
    WidgetApp::new(session, wallet)
}

fn dest_amount(app: &WidgetApp) -> String {
    app.session.pair().state().dest_amount.clone()
}

// ========== Construction ==========

#[test]
fn test_from_config() {
    let app = WidgetApp::from_config(&SwapConfig::default()).unwrap();

    assert_eq!(dest_amount(&app), "2450.32");
    assert_eq!(app.inputs.deadline, "20");
    assert!(app.status.is_none());
    assert!(!app.wallet.is_connected());
}

#[test]
fn test_from_config_propagates_swap_errors() {
    let config = SwapConfig {
        default_dest: "BTC".to_string(),
        ..SwapConfig::default()
    };
    assert!(WidgetApp::from_config(&config).is_err());
}

// ========== Pair Actions ==========

#[test]
fn test_amount_and_token_actions() {
    let mut app = app();

    app.handle(UiAction::SetAmount("2".to_string()));
    assert_eq!(dest_amount(&app), "4900.64");

    app.handle(UiAction::SelectToken(Side::Destination, "USDT".to_string()));
    assert_eq!(dest_amount(&app), "5000");
    assert!(app.status.is_none());
}

#[test]
fn test_unknown_token_sets_status() {
    let mut app = app();
    let before = app.session.pair().state().clone();

    app.handle(UiAction::SelectToken(Side::Source, "WBTC".to_string()));
    assert_eq!(app.session.pair().state(), &before);
    assert_eq!(app.status.as_deref(), Some("Validation error: Unknown token WBTC"));

    app.handle(UiAction::SetAmount("1".to_string()));
    assert!(app.status.is_none());
}

#[test]
fn test_flip_and_max() {
    let mut app = app();

    app.handle(UiAction::Flip);
    assert_eq!(app.session.pair().state().source_token.symbol, "DEXT");
    assert_eq!(dest_amount(&app), "1");

    app.handle(UiAction::Max);
    assert_eq!(app.session.pair().state().source_amount, "1250.00");
    assert_eq!(dest_amount(&app), "0.51");
}

// ========== Wallet Actions ==========

#[test]
fn test_primary_connects_then_swaps() {
    let mut app = app();

    app.handle(UiAction::Primary);
    assert!(app.wallet.is_connected());
    assert_eq!(app.session.primary_action(&app.wallet), PrimaryAction::Swap);
    assert_eq!(app.notifications.last().unwrap().title, "Wallet Connected");

    app.handle(UiAction::Primary);
    let last = app.notifications.last().unwrap();
    assert_eq!(last.title, "Swap Initiated");
    assert_eq!(last.description, "Swapping 1 ETH for 2450.32 DEXT");
}

#[test]
fn test_connect_failure_is_reported() {
    let session = SwapSession::from_config(&SwapConfig::default()).unwrap();
    let wallet = LocalWallet::new(ConnectorKind::WalletConnect, Chain::Mainnet, None);
    let mut app = WidgetApp::new(session, wallet);

    app.handle(UiAction::Primary);
    assert!(!app.wallet.is_connected());
    assert_eq!(app.notifications.last().unwrap().title, "Connection Failed");
    assert!(app.status.as_deref().unwrap().contains("WalletConnect requires a project id"));
}

#[test]
fn test_disconnect() {
    let mut app = app();
    app.handle(UiAction::Primary);
    app.handle(UiAction::Disconnect);

    assert!(!app.wallet.is_connected());
    assert_eq!(app.notifications.last().unwrap().title, "Wallet Disconnected");
    assert_eq!(app.session.wallet_label(&app.wallet), "Not connected");
}

// ========== Settings Actions ==========

#[test]
fn test_settings_actions() {
    let mut app = app();

    app.handle(UiAction::ToggleSettings);
    assert!(app.session.settings_open());

    app.inputs.custom_slippage = "0.75".to_string();
    app.handle(UiAction::CustomSlippage("0.75".to_string()));
    assert_eq!(app.session.settings().slippage_bps(), 75);

    app.handle(UiAction::SlippagePreset(100));
    assert_eq!(app.session.settings().slippage_label(), "1.0%");
    assert!(app.inputs.custom_slippage.is_empty());

    app.handle(UiAction::SelectProvider(Provider::UniswapV2));
    assert_eq!(app.session.settings().provider(), Provider::UniswapV2);
}

#[test]
fn test_invalid_deadline_restores_buffer() {
    let mut app = app();

    app.inputs.deadline = "0".to_string();
    app.handle(UiAction::Deadline("0".to_string()));

    assert_eq!(app.session.settings().deadline_minutes(), 20);
    assert_eq!(app.inputs.deadline, "20");
    assert!(app.status.is_some());

    app.inputs.deadline = "30".to_string();
    app.handle(UiAction::Deadline("30".to_string()));
    assert_eq!(app.session.settings().deadline_minutes(), 30);
    assert!(app.status.is_none());
}
