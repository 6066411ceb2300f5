//! Per-staff order counts and revenue

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Order, User};
use std::collections::HashMap;

use crate::orders::money::add_money;

/// Display name for a `created_by` id missing from the directory
pub const UNKNOWN_STAFF: &str = "Unknown";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerformance {
    pub user_id: String,
    pub name: String,
    pub orders: u64,
    pub revenue: Decimal,
}

/// Group orders by `created_by`, highest revenue first
pub fn staff_performance<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    staff: &[User],
) -> Vec<StaffPerformance> {
    let names: HashMap<&str, &str> = staff
        .iter()
        .map(|user| (user.id.as_str(), user.name.as_str()))
        .collect();

    let mut rows: Vec<StaffPerformance> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for order in orders {
        match index.get(order.created_by.as_str()) {
            Some(&i) => {
                let row = &mut rows[i];
                row.orders += 1;
                row.revenue = add_money(row.revenue, order.total);
            }
            None => {
                let name = match names.get(order.created_by.as_str()) {
                    Some(name) => (*name).to_string(),
                    None => {
                        tracing::warn!(user_id = %order.created_by, "Order created by unknown staff");
                        UNKNOWN_STAFF.to_string()
                    }
                };
                index.insert(order.created_by.as_str(), rows.len());
                rows.push(StaffPerformance {
                    user_id: order.created_by.clone(),
                    name,
                    orders: 1,
                    revenue: order.total,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}
