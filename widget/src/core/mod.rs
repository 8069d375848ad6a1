//! Core types shared across the widget: the application error.

pub mod error;

pub use error::{AppError, Result};
