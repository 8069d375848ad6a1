//! # Widget Application
//!
//! [`WidgetApp`] owns the swap session together with the concrete wallet and
//! notifier, and applies the [`UiAction`]s the screen produces.
//!
//! Rendering never mutates state directly: the screen reads a snapshot, pushes
//! actions, and [`WidgetApp::handle`] applies them after the frame's layout is
//! done. Handler failures end up in [`WidgetApp::status`], shown under the
//! primary button.

pub mod actions;

pub use actions::UiAction;

use lib_swap::config::SwapConfig;
use lib_swap::{SwapError, SwapSession};
use tracing::{debug, warn};

use crate::core::Result;
use crate::services::LocalWallet;
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;

/// Text fields whose content must survive between frames while being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffers {
    pub custom_slippage: String,
    pub deadline: String,
}

pub struct WidgetApp {
    pub session: SwapSession,
    pub wallet: LocalWallet,
    pub notifications: NotificationManager,
    pub inputs: InputBuffers,
    pub theme: Theme,
    /// Last handler error, cleared by the next successful action
    pub status: Option<String>,
}

impl WidgetApp {
    pub fn new(session: SwapSession, wallet: LocalWallet) -> Self {
        let inputs = InputBuffers {
            custom_slippage: String::new(),
            deadline: session.settings().deadline_minutes().to_string(),
        };

        Self {
            session,
            wallet,
            notifications: NotificationManager::new(),
            inputs,
            theme: Theme::default(),
            status: None,
        }
    }

    pub fn from_config(config: &SwapConfig) -> Result<Self> {
        let session = SwapSession::from_config(config)?;
        let wallet = LocalWallet::from_config(config);
        Ok(Self::new(session, wallet))
    }

    /// Apply one user action.
    pub fn handle(&mut self, action: UiAction) {
        debug!(?action, "Handling action");

        match self.apply(action) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!(error = %e, "Action failed");
                self.status = Some(e.to_string());
            }
        }
    }

    fn apply(&mut self, action: UiAction) -> lib_swap::Result<()> {
        match action {
            UiAction::SetAmount(amount) => self.session.pair_mut().set_source_amount(&amount),
            UiAction::SelectToken(side, symbol) => {
                let token = self
                    .session
                    .registry()
                    .get(&symbol)
                    .cloned()
                    .ok_or_else(|| SwapError::Validation(format!("Unknown token {}", symbol)))?;
                self.session.pair_mut().select_token(side, token);
            }
            UiAction::Flip => self.session.pair_mut().flip(),
            UiAction::Max => {
                if !self.session.pair_mut().set_max_from_balance() {
                    debug!("Selected token has no balance; max ignored");
                }
            }
            UiAction::Primary => {
                self.session
                    .trigger_primary(&mut self.wallet, &mut self.notifications)?;
            }
            UiAction::Disconnect => {
                self.session.disconnect(&mut self.wallet, &mut self.notifications);
            }
            UiAction::ToggleSettings => self.session.toggle_settings(),
            UiAction::SlippagePreset(bps) => {
                self.session.settings_mut().select_slippage_preset(bps)?;
                self.inputs.custom_slippage.clear();
            }
            UiAction::CustomSlippage(percent) => {
                self.session.settings_mut().set_custom_slippage(&percent)?;
            }
            UiAction::Deadline(minutes) => {
                if let Err(e) = self.session.settings_mut().set_deadline(&minutes) {
                    self.inputs.deadline = self.session.settings().deadline_minutes().to_string();
                    return Err(e);
                }
            }
            UiAction::SelectProvider(provider) => self.session.settings_mut().set_provider(provider),
        }
        Ok(())
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::render(ctx, self);
    }
}

#[cfg(test)]
mod tests;
