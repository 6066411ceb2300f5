//! Dashboard and reconciliation views
//!
//! Each view filters the order snapshot first and then runs the
//! aggregations over the filtered set.

use serde::Serialize;
use shared::{Order, OrderStatus, ParseEnumError, PaymentMethod, User};

use super::items::{TOP_ITEMS_LIMIT, TopItem, top_items};
use super::staff::{StaffPerformance, staff_performance};
use super::summary::{FinancialSummary, SalesStats, financial_summary, sales_stats};

/// Filter value meaning "no restriction"
pub const FILTER_ALL: &str = "all";

/// Orders with status `completed`
pub fn completed<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .collect()
}

/// Orders created at or after `since` (Unix millis)
pub fn created_since<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    since: i64,
) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|order| order.created_at >= since)
        .collect()
}

/// Manager dashboard for one business day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboard {
    pub stats: SalesStats,
    /// Staff members marked active in the directory
    pub active_staff: usize,
    pub top_items: Vec<TopItem>,
    pub staff_performance: Vec<StaffPerformance>,
}

impl ManagerDashboard {
    /// Completed orders created on or after `day_start`
    pub fn build(orders: &[Order], staff: &[User], day_start: i64) -> Self {
        let today = completed(created_since(orders, day_start));

        tracing::debug!(
            orders = orders.len(),
            completed_today = today.len(),
            day_start,
            "Building manager dashboard"
        );

        Self {
            stats: sales_stats(today.iter().copied()),
            active_staff: staff.iter().filter(|user| user.active).count(),
            top_items: top_items(today.iter().copied(), TOP_ITEMS_LIMIT),
            staff_performance: staff_performance(today.iter().copied(), staff),
        }
    }
}

/// Accountant transaction list filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Matches an order number substring or a source substring (any case)
    pub search: String,
    /// `None` = all methods
    pub payment: Option<PaymentMethod>,
    /// `None` = all statuses
    pub status: Option<OrderStatus>,
}

impl TransactionFilter {
    /// Build from the raw select values, where `"all"` means no restriction
    pub fn parse(search: &str, payment: &str, status: &str) -> Result<Self, ParseEnumError> {
        let payment = match payment {
            FILTER_ALL => None,
            other => Some(other.parse()?),
        };
        let status = match status {
            FILTER_ALL => None,
            other => Some(other.parse()?),
        };
        Ok(Self {
            search: search.to_string(),
            payment,
            status,
        })
    }

    pub fn matches(&self, order: &Order) -> bool {
        let query = self.search.to_lowercase();
        let matches_search = order.order_number.to_string().contains(&self.search)
            || order.source.as_str().contains(&query);
        let matches_payment = self
            .payment
            .is_none_or(|method| order.payment_method == Some(method));
        let matches_status = self.status.is_none_or(|status| order.status == status);

        matches_search && matches_payment && matches_status
    }
}

/// Accountant reconciliation over every completed order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountantView<'a> {
    pub summary: FinancialSummary,
    pub completed: Vec<&'a Order>,
}

impl<'a> AccountantView<'a> {
    pub fn build(orders: &'a [Order]) -> Self {
        let completed = completed(orders);
        Self {
            summary: financial_summary(completed.iter().copied()),
            completed,
        }
    }

    /// Completed orders passing `filter`, in stored order
    pub fn transactions(&self, filter: &TransactionFilter) -> Vec<&'a Order> {
        self.completed
            .iter()
            .copied()
            .filter(|order| filter.matches(order))
            .collect()
    }
}
