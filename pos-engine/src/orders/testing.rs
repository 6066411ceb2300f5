//! Order fixtures shared by unit tests

use rust_decimal::Decimal;
use shared::{Order, OrderItem, OrderSource, OrderStatus, PaymentMethod};

use super::money::{DEFAULT_TAX_RATE, compute_totals};

pub(crate) fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(crate) fn line(menu_item_id: &str, name: &str, cents: i64, quantity: i32) -> OrderItem {
    OrderItem {
        id: format!("item-{menu_item_id}-{quantity}"),
        menu_item_id: menu_item_id.to_string(),
        name: name.to_string(),
        quantity,
        price: dec(cents),
        modifiers: None,
        notes: None,
    }
}

/// Order with a single 10.00 line, totals at 8%
pub(crate) fn order_with(id: &str, status: OrderStatus, created_at: i64) -> Order {
    build_order(
        id,
        vec![line("1", "Caesar Salad", 1000, 1)],
        Decimal::ZERO,
        status,
        created_at,
    )
}

pub(crate) fn build_order(
    id: &str,
    items: Vec<OrderItem>,
    discount: Decimal,
    status: OrderStatus,
    created_at: i64,
) -> Order {
    let totals = compute_totals(&items, discount, Decimal::ZERO, DEFAULT_TAX_RATE);
    Order {
        id: id.to_string(),
        order_number: 1000,
        items,
        status,
        source: OrderSource::DineIn,
        table_id: None,
        customer_id: None,
        subtotal: totals.subtotal,
        tax: totals.tax,
        discount: totals.discount,
        tip: totals.tip,
        total: totals.total,
        payment_method: Some(PaymentMethod::Cash),
        created_at,
        updated_at: created_at,
        completed_at: None,
        created_by: "user-2".to_string(),
        notes: None,
    }
}
