//! # DEXTswap Widget - Library Root
//!
//! Native desktop front end for the swap core in `lib_swap`.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              widget (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe   - Immediate-mode GUI, native window   │
//! │  egui-notify     - Toast notifications                 │
//! │  LocalWallet     - In-memory wallet connector          │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  lib_swap: SwapSession, PairController, QuoteEngine    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`WidgetApp`] and the [`UiAction`]s it applies
//! - **core**: [`AppError`]
//! - **logging**: tracing subscriber with daily file rotation
//! - **services**: [`LocalWallet`]
//! - **ui**: screen, widgets and theme
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin dextswap
//! ```

/// Product name shown in the window title and the card header.
pub const APP_NAME: &str = "DEXTswap";

pub mod app;
pub mod core;
pub mod logging;
pub mod services;
pub mod ui;

pub use app::{UiAction, WidgetApp};
pub use core::{AppError, Result};
pub use services::LocalWallet;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_is_product_name() {
        assert_eq!(APP_NAME, "DEXTswap");
    }
}
