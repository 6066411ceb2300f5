//! Best-selling menu items

use rust_decimal::Decimal;
use serde::Serialize;
use shared::Order;
use std::collections::HashMap;

use crate::orders::money::add_money;

/// Length of the dashboard ranking
pub const TOP_ITEMS_LIMIT: usize = 10;

/// Quantity and revenue for one menu item
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopItem {
    pub menu_item_id: String,
    /// Name from the first line seen for this item
    pub name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

/// Rank menu items by revenue, highest first, keeping at most `limit`
///
/// Equal revenue keeps first-seen order, so the result is deterministic for
/// a given input order.
pub fn top_items<'a>(orders: impl IntoIterator<Item = &'a Order>, limit: usize) -> Vec<TopItem> {
    let mut ranking: Vec<TopItem> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in orders.into_iter().flat_map(|order| order.items.iter()) {
        let quantity = i64::from(item.quantity);
        let Some(revenue) = item.line_total() else {
            tracing::warn!(
                menu_item_id = %item.menu_item_id,
                price = %item.price,
                quantity = item.quantity,
                "Line amount overflows, skipping"
            );
            continue;
        };
        match index.get(item.menu_item_id.as_str()) {
            Some(&i) => {
                let entry = &mut ranking[i];
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.revenue = add_money(entry.revenue, revenue);
            }
            None => {
                index.insert(item.menu_item_id.as_str(), ranking.len());
                ranking.push(TopItem {
                    menu_item_id: item.menu_item_id.clone(),
                    name: item.name.clone(),
                    quantity,
                    revenue,
                });
            }
        }
    }

    ranking.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranking.truncate(limit);
    ranking
}
