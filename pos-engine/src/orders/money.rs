//! Order totals using rust_decimal for precision
//!
//! Every amount is a [`Decimal`]; tax is rounded to cents before the total is
//! formed so `total == (subtotal - discount) + tax + tip` holds exactly.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::OrderItem;

use super::{OrderError, OrderResult};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tax rate used when the caller does not supply one (8%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Maximum allowed price per item
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
const MAX_QUANTITY: i32 = 9999;

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `a + b` for running report sums
///
/// Stored records come from outside; a sum that leaves the [`Decimal`] range
/// is clamped and logged rather than aborting the whole report.
pub fn add_money(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        tracing::warn!(%a, %b, "Amount overflow, clamping");
        a.saturating_add(b)
    })
}

/// Anything with a unit price and a quantity
pub trait Priced {
    fn unit_price(&self) -> Decimal;
    fn quantity(&self) -> i32;

    /// `None` when the product doesn't fit in a [`Decimal`]
    fn checked_line_amount(&self) -> Option<Decimal> {
        self.unit_price().checked_mul(Decimal::from(self.quantity()))
    }

    /// Line amount, clamped to the [`Decimal`] range
    fn line_amount(&self) -> Decimal {
        self.unit_price().saturating_mul(Decimal::from(self.quantity()))
    }
}

impl Priced for OrderItem {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl Priced for (Decimal, i32) {
    fn unit_price(&self) -> Decimal {
        self.0
    }

    fn quantity(&self) -> i32 {
        self.1
    }
}

/// Money fields stamped onto an order at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub tip: Decimal,
    pub total: Decimal,
}

/// `Σ unit_price × quantity`
pub fn subtotal<P: Priced>(items: &[P]) -> Decimal {
    items
        .iter()
        .map(Priced::line_amount)
        .fold(Decimal::ZERO, add_money)
}

/// Compute subtotal, tax and total for a cart
///
/// `discount` is a flat amount taken off before tax. The taxable base is
/// clamped at zero, the total is not: a discount larger than the subtotal
/// yields a negative total.
pub fn compute_totals<P: Priced>(
    items: &[P],
    discount: Decimal,
    tip: Decimal,
    tax_rate: Decimal,
) -> OrderTotals {
    let subtotal = subtotal(items);
    let discounted = subtotal.saturating_sub(discount);
    let tax = round_money(discounted.max(Decimal::ZERO).saturating_mul(tax_rate));
    let total = add_money(add_money(discounted, tax), tip);

    OrderTotals {
        subtotal,
        tax,
        discount,
        tip,
        total,
    }
}

/// Validate a line before it enters a cart
pub fn validate_line(price: Decimal, quantity: i32) -> OrderResult<()> {
    if price < Decimal::ZERO {
        return Err(OrderError::InvalidAmount(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(OrderError::InvalidAmount(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    if quantity <= 0 {
        return Err(OrderError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            quantity
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(())
}

/// Validate a flat adjustment (discount or tip)
pub fn validate_adjustment(value: Decimal, field_name: &str) -> OrderResult<()> {
    if value < Decimal::ZERO {
        return Err(OrderError::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_PRICE {
        return Err(OrderError::InvalidAmount(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_PRICE, value
        )));
    }
    Ok(())
}
