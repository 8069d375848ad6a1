//! # Logging
//!
//! File-based structured logging for the widget binary.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `widget=info,lib_swap=info,warn`)
//! - `WIDGET_LOG_DIR`: Directory for the daily rotated `widget.log` (default `logs`)
//! - `WIDGET_LOG_STDERR`: Set to `0` to stop mirroring logs to stderr
//!
//! ## Usage
//!
//! ```rust,no_run
//! use widget::logging::{self, LogConfig};
//!
//! let _guard = logging::init(&LogConfig::from_env())?;
//! tracing::info!("Widget starting");
//! # Ok::<(), widget::AppError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
