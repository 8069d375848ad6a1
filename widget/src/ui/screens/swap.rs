//! # Swap Screen
//!
//! The whole widget: a centered card with the header, optional settings panel,
//! the two pair sides around the flip button, the price line, and the primary
//! button with provider and disconnect links below it.

use lib_swap::{Side, Token, WalletConnector};

use crate::app::{UiAction, WidgetApp};
use crate::ui::widgets::{header, settings_panel, swap_input};

const CARD_WIDTH: f32 = 420.0;
const PRIMARY_BUTTON_HEIGHT: f32 = 44.0;

pub fn render(ui: &mut egui::Ui, app: &mut WidgetApp, actions: &mut Vec<UiAction>) {
    let theme = app.theme;
    let state = app.session.pair().state().clone();
    let tokens: Vec<Token> = app.session.registry().list_tokens().to_vec();
    let settings = app.session.settings().clone();
    let price_line = app.session.pair().price_line();
    let primary = app.session.primary_action(&app.wallet);
    let wallet_label = app.session.wallet_label(&app.wallet);
    let connected = app.wallet.is_connected();

    ui.vertical_centered(|ui| {
        ui.set_max_width(CARD_WIDTH);
        ui.add_space(24.0);

        egui::Frame::group(ui.style())
            .fill(theme.card)
            .stroke(egui::Stroke::new(1.0, theme.border))
            .show(ui, |ui| {
                header::render(ui, &theme, &wallet_label, actions);

                if app.session.settings_open() {
                    settings_panel::render(ui, &theme, &settings, &mut app.inputs, actions);
                }

                ui.add_space(8.0);
                swap_input::render(ui, &theme, Side::Source, &state, &tokens, actions);

                ui.vertical_centered(|ui| {
                    if ui.button("⇅").on_hover_text("Flip").clicked() {
                        actions.push(UiAction::Flip);
                    }
                });

                swap_input::render(ui, &theme, Side::Destination, &state, &tokens, actions);

                if let Some(line) = &price_line {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.text_muted, &line.label);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(&line.value);
                        });
                    });
                }

                ui.add_space(10.0);
                let button = egui::Button::new(
                    egui::RichText::new(primary.label())
                        .size(16.0)
                        .strong()
                        .color(theme.on_accent),
                )
                .fill(theme.accent)
                .min_size(egui::vec2(ui.available_width(), PRIMARY_BUTTON_HEIGHT));
                if ui.add(button).clicked() {
                    actions.push(UiAction::Primary);
                }

                if let Some(status) = &app.status {
                    ui.colored_label(theme.error, status);
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let provider = settings.provider();
                    ui.colored_label(theme.text_muted, format!("Powered by {}", provider));

                    let alternative = provider.alternative();
                    if ui.link(format!("Or try {}", alternative)).clicked() {
                        actions.push(UiAction::SelectProvider(alternative));
                    }

                    if connected {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Disconnect").clicked() {
                                actions.push(UiAction::Disconnect);
                            }
                        });
                    }
                });
            });
    });
}
