//! # Widget Theme
//!
//! Dark swap-card palette for egui.

use egui::{Color32, Context, Stroke, Visuals};

/// Colors used by the swap screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Swap card
    pub card: Color32,
    /// Card and input borders
    pub border: Color32,
    /// Amount input boxes
    pub input: Color32,
    pub text: Color32,
    /// Labels, balances, price line
    pub text_muted: Color32,
    /// Primary button and selection
    pub accent: Color32,
    /// Text on the accent color
    pub on_accent: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(13, 17, 23),
            card: Color32::from_rgb(22, 27, 34),
            border: Color32::from_rgb(48, 54, 61),
            input: Color32::from_rgb(13, 17, 23),
            text: Color32::from_rgb(230, 237, 243),
            text_muted: Color32::from_rgb(139, 148, 158),
            accent: Color32::from_rgb(0, 184, 217),
            on_accent: Color32::from_rgb(13, 17, 23),
            error: Color32::from_rgb(248, 81, 73),
        }
    }
}

impl Theme {
    /// Install the palette as egui's dark visuals
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.card;
        visuals.extreme_bg_color = self.input;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.on_accent);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}
