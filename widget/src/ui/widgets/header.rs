//! Card header: title, wallet label and the settings toggle.

use crate::app::UiAction;
use crate::APP_NAME;
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, theme: &Theme, wallet_label: &str, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(APP_NAME).size(20.0).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").on_hover_text("Settings").clicked() {
                actions.push(UiAction::ToggleSettings);
            }
            ui.colored_label(theme.text_muted, wallet_label);
        });
    });
}
