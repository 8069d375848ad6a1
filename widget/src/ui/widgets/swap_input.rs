//! # Swap Input Widget
//!
//! One side of the pair: label, balance, amount field and token picker. The
//! "From" side is editable and offers MAX; the "To" side is read-only.

use lib_swap::quote::ZERO_QUOTE;
use lib_swap::{PairState, Side, Token};

use super::token_picker;
use crate::app::UiAction;
use crate::ui::theme::Theme;

const AMOUNT_WIDTH: f32 = 200.0;

pub fn render(
    ui: &mut egui::Ui,
    theme: &Theme,
    side: Side,
    state: &PairState,
    tokens: &[Token],
    actions: &mut Vec<UiAction>,
) {
    let token = state.token(side);

    egui::Frame::group(ui.style())
        .fill(theme.input)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme.text_muted, side.label());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(balance) = &token.balance {
                        if side.is_editable() && ui.small_button("MAX").clicked() {
                            actions.push(UiAction::Max);
                        }
                        ui.colored_label(theme.text_muted, format!("Balance: {}", balance));
                    }
                });
            });

            ui.horizontal(|ui| {
                let mut amount = state.amount(side).to_string();
                let edit = egui::TextEdit::singleline(&mut amount)
                    .hint_text(ZERO_QUOTE)
                    .font(egui::TextStyle::Heading)
                    .desired_width(AMOUNT_WIDTH)
                    .interactive(side.is_editable());

                if ui.add(edit).changed() && side.is_editable() {
                    actions.push(UiAction::SetAmount(amount));
                }

                token_picker::render(ui, side, token, tokens, actions);
            });
        });
}
