//! # Data Transfer Objects (DTOs)
//!
//! Serializable records read from disk at startup.
//!
//! ## Module Organization
//!
//! - [`catalog`] - Token catalog and rate table file format
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`

pub mod catalog;

pub use catalog::*;
