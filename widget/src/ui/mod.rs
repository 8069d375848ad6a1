//! # UI Rendering
//!
//! - `screens`: the swap card
//! - `widgets`: header, amount inputs, token picker, settings panel, notifications
//! - `theme`: color palette

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::WidgetApp;

/// Render one frame and apply the actions it produced.
pub fn render(ctx: &egui::Context, app: &mut WidgetApp) {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::swap::render(ui, app, &mut actions);
    });

    for action in actions {
        app.handle(action);
    }

    app.notifications.show(ctx);
}
