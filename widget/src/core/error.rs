//! # Widget Error Types
//!
//! [`AppError`] covers everything that can stop the widget from starting or
//! that a handler reports back to the screen.
//!
//! ## Error Conversion
//!
//! - [`SwapError`] → `AppError::Swap`
//! - [`eframe::Error`] → `AppError::Window`
//!
//! Handler failures are rendered as a status line, not propagated out of the
//! frame loop.

use lib_swap::SwapError;
use thiserror::Error;

/// Widget-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Swap core failure (configuration, catalog, validation, wallet)
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// Native window failed to start or crashed
    #[error("Window error: {0}")]
    Window(#[from] eframe::Error),

    /// Log directory or subscriber setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Convenience alias for widget results.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_error_is_transparent() {
        let err: AppError = SwapError::Validation("Slippage 'x' is not a number".to_string()).into();
        assert_eq!(err.to_string(), SwapError::Validation("Slippage 'x' is not a number".to_string()).to_string());
    }

    #[test]
    fn test_logging_error_display() {
        let err = AppError::Logging("permission denied".to_string());
        assert_eq!(err.to_string(), "Logging error: permission denied");
    }
}
