//! # Shared Types Library
//!
//! Types and helpers used by both `lib-swap` and the `widget` front end.
//!
//! ## Structure
//!
//! - **[`dto`]**: Serializable records
//!   - **[`dto::catalog`]**: Token catalog and rate table file format
//! - **[`utils`]**: Display helpers
//!   - **[`utils::truncate_address`]**: Truncate wallet addresses with ellipsis
//!   - **[`utils::format_number`]**: Thousands-separated fixed-point numbers
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::CatalogFile;
//! use shared::utils::truncate_address;
//!
//! let file: CatalogFile = serde_json::from_str(r#"{ "tokens": [] }"#).unwrap();
//! assert!(file.tokens.is_empty());
//! assert_eq!(truncate_address("0x52908400098527886E0F7030069857D2E4169EE7"), "0x5290...9EE7");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
