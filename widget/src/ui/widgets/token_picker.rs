//! # Token Picker Widget
//!
//! Drop-down list of every catalog token for one side of the pair.

use lib_swap::{Side, Token};

use crate::app::UiAction;

pub fn render(
    ui: &mut egui::Ui,
    side: Side,
    selected: &Token,
    tokens: &[Token],
    actions: &mut Vec<UiAction>,
) {
    egui::ComboBox::from_id_salt(("token_picker", side.label()))
        .selected_text(format!("{} {}", selected.icon, selected.symbol))
        .show_ui(ui, |ui| {
            for token in tokens {
                let is_selected = token.symbol == selected.symbol;
                let text = format!("{} {}  {}", token.icon, token.symbol, token.name);

                if ui.selectable_label(is_selected, text).clicked() && !is_selected {
                    actions.push(UiAction::SelectToken(side, token.symbol.clone()));
                }
            }
        });
}
