//! DEXTswap desktop widget.
//!
//! Reads `SWAP_*` settings (and an optional `.env`), then opens the swap card in a
//! native window.

use lib_swap::config::SwapConfig;
use widget::logging::{self, LogConfig};
use widget::ui::theme::Theme;
use widget::{Result, WidgetApp, APP_NAME};

fn main() -> Result<()> {
    let _log_guard = logging::init(&LogConfig::from_env())?;

    let config = SwapConfig::from_env()?;
    config.validate()?;
    tracing::info!(
        chain = %config.chain,
        connector = %config.connector,
        source = %config.default_source,
        dest = %config.default_dest,
        "Starting widget"
    );

    let app = WidgetApp::from_config(&config)?;
    let theme: Theme = app.theme;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([460.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    tracing::info!("Widget closed");
    Ok(())
}
