//! CSV export of accountant transactions
//!
//! One header line, then one line per order. Currency fields are plain
//! decimals with two places; dates are `YYYY-MM-DD` and times `HH:MM` in the
//! business time zone so no field ever contains a comma.

use chrono_tz::Tz;
use shared::Order;

use crate::utils::time::{format_date, format_time};

pub const CSV_HEADER: &str = "OrderNumber,Date,Time,Source,PaymentMethod,Subtotal,Tax,Discount,Tip,Total";

/// Placeholder for orders without a payment method
const NO_PAYMENT: &str = "N/A";

/// One CSV line (no trailing newline)
pub fn csv_row(order: &Order, tz: Tz) -> String {
    let payment = order
        .payment_method
        .map_or(NO_PAYMENT, |method| method.as_str());

    format!(
        "{},{},{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
        order.order_number,
        format_date(order.created_at, tz),
        format_time(order.created_at, tz),
        order.source,
        payment,
        order.subtotal,
        order.tax,
        order.discount,
        order.tip,
        order.total,
    )
}

/// Header plus one line per order, `\n`-separated
pub fn transactions_csv<'a>(orders: impl IntoIterator<Item = &'a Order>, tz: Tz) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(orders.into_iter().map(|order| csv_row(order, tz)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `transactions-<millis>.csv`
pub fn export_file_name(now: i64) -> String {
    format!("transactions-{}.csv", now)
}
