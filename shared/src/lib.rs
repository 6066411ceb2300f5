//! Shared types for the POS workspace
//!
//! Record shapes persisted in the key-value store (orders, staff, menu),
//! the role capability table, store keys and small id/time helpers.

pub mod keys;
pub mod models;
pub mod util;

// Re-exports
pub use models::{
    MenuItem, Order, OrderItem, OrderSource, OrderStatus, ParseEnumError, PaymentMethod, User,
    UserRole, View,
};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
