//! Aggregation engine
//!
//! Pure reductions over an order snapshot. Nothing here reads the store or
//! the clock; callers pass the orders (already filtered as they need) and
//! any time boundary.
//!
//! | Reduction | Function |
//! |-----------|----------|
//! | revenue, tax, discounts, tips, net | [`financial_summary`] |
//! | sales, count, average | [`sales_stats`] |
//! | total per payment method / source | [`payment_breakdown`], [`source_breakdown`] |
//! | best sellers | [`top_items`] |
//! | per staff member | [`staff_performance`] |

pub mod export;
pub mod items;
pub mod staff;
pub mod summary;
pub mod views;

pub use export::{CSV_HEADER, export_file_name, transactions_csv};
pub use items::{TOP_ITEMS_LIMIT, TopItem, top_items};
pub use staff::{StaffPerformance, UNKNOWN_STAFF, staff_performance};
pub use summary::{
    FinancialSummary, SalesStats, average_order_value, financial_summary, payment_breakdown,
    sales_stats, source_breakdown,
};
pub use views::{AccountantView, ManagerDashboard, TransactionFilter, completed, created_since};

#[cfg(test)]
mod tests;
