//! Data models
//!
//! Record shapes stored in the key-value store. Field names are camelCase on
//! the wire so records written by other terminals deserialize unchanged.
//! All timestamps are Unix millis (`i64`).

pub mod menu;
pub mod order;
pub mod role;
pub mod user;

// Re-exports
pub use menu::*;
pub use order::*;
pub use role::*;
pub use user::*;

use thiserror::Error;

/// Failed to parse a wire tag into one of the model enums
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
