//! Order entry and workflow
//!
//! - **money**: totals calculator (subtotal, tax, discount, tip, total)
//! - **numbering**: human-facing order number sequence
//! - **cart**: cashier cart and checkout
//! - **lifecycle**: status transitions and kitchen urgency
//! - **book**: store-backed order collection
//! - **register**: cart + sequence configured from [`Config`](crate::Config)
//!
//! # Data Flow
//!
//! ```text
//! Cart ──checkout──► Order (pending) ──place──► OrderBook ──► store["orders"]
//!                                                  │
//!                     kitchen / reports ◄── snapshot read
//! ```

pub mod book;
pub mod cart;
pub mod error;
pub mod lifecycle;
pub mod money;
pub mod numbering;
pub mod register;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use book::OrderBook;
pub use cart::{Cart, Checkout, browse};
pub use error::{OrderError, OrderResult};
pub use lifecycle::{KitchenTicket, Lifecycle, Urgency, active_orders, kitchen_queue, urgency};
pub use money::{DEFAULT_TAX_RATE, OrderTotals, compute_totals};
pub use numbering::{ORDER_NUMBER_BASE, OrderNumberSequence};
pub use register::Register;
