//! Cashier cart
//!
//! The in-progress list of lines before an order exists. Lines are merged
//! per menu item; a line whose quantity reaches zero is dropped. Checkout
//! stamps the totals onto a new `pending` order and empties the cart.

use rust_decimal::Decimal;
use shared::util::{line_id, order_id};
use shared::{MenuItem, Order, OrderItem, OrderSource, OrderStatus, PaymentMethod};

use super::money::{self, DEFAULT_TAX_RATE, OrderTotals, validate_adjustment, validate_line};
use super::numbering::OrderNumberSequence;
use super::{OrderError, OrderResult};

/// Available menu items in `category` whose name contains `query`
pub fn browse<'a>(menu: &'a [MenuItem], category: &str, query: &str) -> Vec<&'a MenuItem> {
    menu.iter()
        .filter(|item| item.available && item.category == category && item.matches_search(query))
        .collect()
}

/// Who/how an order is being paid for
#[derive(Debug, Clone)]
pub struct Checkout {
    pub payment_method: PaymentMethod,
    pub source: OrderSource,
    /// Staff id of the signed-in user
    pub created_by: String,
}

/// Lines being assembled at the register
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<OrderItem>,
    discount: Decimal,
    tax_rate: Decimal,
}

impl Cart {
    pub fn new(tax_rate: Decimal) -> Self {
        Self {
            lines: Vec::new(),
            discount: Decimal::ZERO,
            tax_rate,
        }
    }

    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Set the flat discount for the whole cart
    pub fn set_discount(&mut self, discount: Decimal) -> OrderResult<()> {
        validate_adjustment(discount, "discount")?;
        self.discount = discount;
        Ok(())
    }

    /// Add one of `menu_item`, merging into an existing line for the same item
    pub fn add(&mut self, menu_item: &MenuItem) -> OrderResult<&OrderItem> {
        validate_line(menu_item.price, 1)?;

        let index = match self
            .lines
            .iter()
            .position(|line| line.menu_item_id == menu_item.id)
        {
            Some(index) => {
                let quantity = self.lines[index].quantity + 1;
                validate_line(menu_item.price, quantity)?;
                self.lines[index].quantity = quantity;
                index
            }
            None => {
                self.lines.push(OrderItem {
                    id: line_id(),
                    menu_item_id: menu_item.id.clone(),
                    name: menu_item.name.clone(),
                    quantity: 1,
                    price: menu_item.price,
                    modifiers: None,
                    notes: None,
                });
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[index])
    }

    /// Change a line's quantity by `delta`; at zero the line is removed
    pub fn update_quantity(&mut self, line_id: &str, delta: i32) -> OrderResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == line_id)
            .ok_or_else(|| OrderError::LineNotFound(line_id.to_string()))?;

        let quantity = line.quantity.saturating_add(delta).max(0);
        if quantity > 0 {
            validate_line(line.price, quantity)?;
        }
        line.quantity = quantity;
        self.lines.retain(|line| line.quantity > 0);
        Ok(())
    }

    /// Attach a kitchen note to a line
    pub fn set_notes(&mut self, line_id: &str, notes: Option<String>) -> OrderResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == line_id)
            .ok_or_else(|| OrderError::LineNotFound(line_id.to_string()))?;
        line.notes = notes.filter(|n| !n.trim().is_empty());
        Ok(())
    }

    pub fn remove(&mut self, line_id: &str) -> OrderResult<()> {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != line_id);
        if self.lines.len() == before {
            return Err(OrderError::LineNotFound(line_id.to_string()));
        }
        Ok(())
    }

    /// Drop every line and reset the discount
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = Decimal::ZERO;
    }

    /// Running totals; no tip is taken at the register
    pub fn totals(&self) -> OrderTotals {
        money::compute_totals(&self.lines, self.discount, Decimal::ZERO, self.tax_rate)
    }

    /// Turn the cart into a `pending` order and empty the cart
    ///
    /// # Errors
    ///
    /// - [`OrderError::EmptyCart`]: nothing to sell; the sequence is untouched.
    /// - [`OrderError::OrderNumbersExhausted`]: the cart is kept as it was.
    pub fn checkout(
        &mut self,
        checkout: Checkout,
        sequence: &mut OrderNumberSequence,
        now: i64,
    ) -> OrderResult<Order> {
        if self.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_number = sequence.allocate()?;
        let totals = self.totals();
        let order = Order {
            id: order_id(),
            order_number,
            items: std::mem::take(&mut self.lines),
            status: OrderStatus::Pending,
            source: checkout.source,
            table_id: None,
            customer_id: None,
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: totals.discount,
            tip: totals.tip,
            total: totals.total,
            payment_method: Some(checkout.payment_method),
            created_at: now,
            updated_at: now,
            completed_at: None,
            created_by: checkout.created_by,
            notes: None,
        };
        self.clear();

        tracing::info!(
            order_number = order.order_number,
            items = order.items.len(),
            total = %order.total,
            payment = %checkout.payment_method,
            "Order checked out"
        );

        Ok(order)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}
