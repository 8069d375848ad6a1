//! # Settings Panel Widget
//!
//! Slippage tolerance presets with a custom percentage field, the transaction
//! deadline, and the routing provider.

use lib_swap::settings::{bps_to_percent_str, Provider, SwapSettings, SLIPPAGE_PRESETS_BPS};

use crate::app::{InputBuffers, UiAction};
use crate::ui::theme::Theme;

pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    settings: &SwapSettings,
    inputs: &mut InputBuffers,
    actions: &mut Vec<UiAction>,
) {
    ui.group(|ui| {
        ui.label("Slippage Tolerance");
        ui.horizontal(|ui| {
            let current = settings.slippage_bps();

            for &bps in SLIPPAGE_PRESETS_BPS {
                if ui
                    .selectable_label(bps == current, bps_to_percent_str(bps))
                    .clicked()
                {
                    actions.push(UiAction::SlippagePreset(bps));
                }
            }

            let custom = ui.add(
                egui::TextEdit::singleline(&mut inputs.custom_slippage)
                    .hint_text("Custom")
                    .desired_width(60.0),
            );
            if custom.lost_focus() && !inputs.custom_slippage.trim().is_empty() {
                actions.push(UiAction::CustomSlippage(inputs.custom_slippage.clone()));
            }
            ui.label("%");
        });

        if !settings.is_preset_slippage() {
            ui.colored_label(
                theme.text_muted,
                format!("{} (custom)", settings.slippage_label()),
            );
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Transaction deadline");
            let deadline = ui.add(
                egui::TextEdit::singleline(&mut inputs.deadline).desired_width(40.0),
            );
            if deadline.lost_focus() {
                actions.push(UiAction::Deadline(inputs.deadline.clone()));
            }
            ui.label("minutes");
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Provider");
            for &provider in Provider::all() {
                if ui
                    .selectable_label(settings.provider() == provider, provider.label())
                    .clicked()
                {
                    actions.push(UiAction::SelectProvider(provider));
                }
            }
        });
    });
}
