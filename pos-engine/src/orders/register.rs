//! Cash register: one cart plus the order number sequence for a terminal
//!
//! Built from [`Config`] so the tax rate and the first order number follow
//! `TAX_RATE` / `ORDER_NUMBER_BASE`. Every checkout is placed in the
//! [`OrderBook`] straight away.

use shared::Order;

use super::{Cart, Checkout, OrderBook, OrderNumberSequence, OrderResult};
use crate::core::Config;

#[derive(Debug)]
pub struct Register {
    book: OrderBook,
    cart: Cart,
    sequence: OrderNumberSequence,
}

impl Register {
    /// Open the register, continuing after the orders already stored
    pub fn open(book: OrderBook, config: &Config) -> OrderResult<Self> {
        let sequence = book.sequence(config.order_number_base)?;
        tracing::info!(
            tax_rate = %config.tax_rate,
            next_order_number = sequence.peek(),
            "Register opened"
        );
        Ok(Self {
            book,
            cart: Cart::new(config.tax_rate),
            sequence,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Number the next checkout will receive
    pub fn next_order_number(&self) -> u64 {
        self.sequence.peek()
    }

    /// Check the cart out and store the order
    pub fn ring_up(&mut self, checkout: Checkout, now: i64) -> OrderResult<Order> {
        let order = self.cart.checkout(checkout, &mut self.sequence, now)?;
        self.book.place(order.clone())?;
        Ok(order)
    }
}
