//! Revenue sums and per-method / per-source breakdowns

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Order, OrderSource, PaymentMethod};
use std::collections::BTreeMap;

use crate::orders::money::{add_money, round_money};

/// Accountant totals over a set of orders
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub order_count: usize,
    pub total_revenue: Decimal,
    pub total_tax: Decimal,
    pub total_discounts: Decimal,
    pub total_tips: Decimal,
    /// `total_revenue - total_discounts`
    pub net_revenue: Decimal,
    /// Orders without a payment method are left out here but still counted
    /// in the revenue sums
    pub by_payment_method: BTreeMap<PaymentMethod, Decimal>,
}

/// Manager headline numbers
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    pub total_sales: Decimal,
    pub total_orders: usize,
    pub average_order_value: Decimal,
    pub by_payment_method: BTreeMap<PaymentMethod, Decimal>,
    pub by_source: BTreeMap<OrderSource, Decimal>,
}

/// `total / count` rounded to cents, or zero when there are no orders
pub fn average_order_value(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_money(total / Decimal::from(count))
}

/// Summed `total` per payment method
pub fn payment_breakdown<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
) -> BTreeMap<PaymentMethod, Decimal> {
    let mut by_method = BTreeMap::new();
    for order in orders {
        if let Some(method) = order.payment_method {
            let sum = by_method.entry(method).or_insert(Decimal::ZERO);
            *sum = add_money(*sum, order.total);
        }
    }
    by_method
}

/// Summed `total` per order source, one entry per source seen
pub fn source_breakdown<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
) -> BTreeMap<OrderSource, Decimal> {
    let mut by_source = BTreeMap::new();
    for order in orders {
        let sum = by_source.entry(order.source).or_insert(Decimal::ZERO);
        *sum = add_money(*sum, order.total);
    }
    by_source
}

pub fn financial_summary<'a>(orders: impl IntoIterator<Item = &'a Order>) -> FinancialSummary {
    let mut summary = FinancialSummary::default();
    for order in orders {
        summary.order_count += 1;
        summary.total_revenue = add_money(summary.total_revenue, order.total);
        summary.total_tax = add_money(summary.total_tax, order.tax);
        summary.total_discounts = add_money(summary.total_discounts, order.discount);
        summary.total_tips = add_money(summary.total_tips, order.tip);
        if let Some(method) = order.payment_method {
            let sum = summary
                .by_payment_method
                .entry(method)
                .or_insert(Decimal::ZERO);
            *sum = add_money(*sum, order.total);
        }
    }
    summary.net_revenue = summary.total_revenue.saturating_sub(summary.total_discounts);

    tracing::debug!(
        orders = summary.order_count,
        revenue = %summary.total_revenue,
        net = %summary.net_revenue,
        "Computed financial summary"
    );
    summary
}

pub fn sales_stats<'a>(orders: impl IntoIterator<Item = &'a Order>) -> SalesStats {
    let orders: Vec<&Order> = orders.into_iter().collect();
    let total_sales = orders
        .iter()
        .map(|order| order.total)
        .fold(Decimal::ZERO, add_money);

    SalesStats {
        total_sales,
        total_orders: orders.len(),
        average_order_value: average_order_value(total_sales, orders.len()),
        by_payment_method: payment_breakdown(orders.iter().copied()),
        by_source: source_breakdown(orders.iter().copied()),
    }
}
