//! Human-facing order numbers
//!
//! The sequence is an owned value handed to checkout. It is not persisted on
//! its own; [`OrderNumberSequence::resume_after`] picks up after the highest
//! number already in the order collection so a restart doesn't reuse numbers
//! on a single terminal.

use shared::Order;

use super::{OrderError, OrderResult};

/// First order number handed out by a fresh sequence
pub const ORDER_NUMBER_BASE: u64 = 1000;

/// Monotonic order number counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNumberSequence {
    next: u64,
}

impl OrderNumberSequence {
    pub fn new(base: u64) -> Self {
        Self { next: base }
    }

    /// Continue after the highest number in `orders`, never below `base`
    pub fn resume_after(base: u64, orders: &[Order]) -> Self {
        let next = orders
            .iter()
            .map(|order| order.order_number.saturating_add(1))
            .max()
            .map_or(base, |after_highest| after_highest.max(base));
        Self { next }
    }

    /// Number the next order will receive
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hand out the next number
    ///
    /// # Errors
    ///
    /// - [`OrderError::OrderNumbersExhausted`]: the counter is at `u64::MAX`
    ///   (only reachable by resuming after a corrupt stored number).
    pub fn allocate(&mut self) -> OrderResult<u64> {
        let number = self.next;
        self.next = number
            .checked_add(1)
            .ok_or(OrderError::OrderNumbersExhausted)?;
        Ok(number)
    }
}

impl Default for OrderNumberSequence {
    fn default() -> Self {
        Self::new(ORDER_NUMBER_BASE)
    }
}
