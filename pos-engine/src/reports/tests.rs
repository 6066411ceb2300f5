use super::*;
use crate::orders::testing::{build_order, dec, line};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use shared::models::default_staff;
use shared::{Order, OrderSource, OrderStatus, PaymentMethod};

// 2025-10-14 09:30:00 UTC
const T0: i64 = 1_760_434_200_000;

fn completed_order(
    id: &str,
    created_by: &str,
    payment: Option<PaymentMethod>,
    source: OrderSource,
    items: Vec<shared::OrderItem>,
) -> Order {
    let mut order = build_order(id, items, Decimal::ZERO, OrderStatus::Completed, T0);
    order.created_by = created_by.to_string();
    order.payment_method = payment;
    order.source = source;
    order.completed_at = Some(T0);
    order
}

fn sample_orders() -> Vec<Order> {
    vec![
        // 25.00 + 2.00 tax = 27.00
        completed_order(
            "o1",
            "user-2",
            Some(PaymentMethod::Card),
            OrderSource::DineIn,
            vec![line("1", "Caesar Salad", 1000, 2), line("2", "Garlic Bread", 500, 1)],
        ),
        // 10.00 + 0.80 = 10.80
        completed_order(
            "o2",
            "user-5",
            Some(PaymentMethod::Cash),
            OrderSource::Takeout,
            vec![line("1", "Caesar Salad", 1000, 1)],
        ),
        // 50.00 + 4.00 = 54.00
        completed_order(
            "o3",
            "user-2",
            None,
            OrderSource::UberEats,
            vec![line("6", "Ribeye Steak", 2500, 2)],
        ),
    ]
}

// ========================================================================
// Financial summary
// ========================================================================

#[test]
fn test_empty_collection_is_all_zero() {
    let orders: Vec<Order> = Vec::new();

    let summary = financial_summary(&orders);
    assert_eq!(summary, FinancialSummary::default());
    assert_eq!(summary.net_revenue, Decimal::ZERO);
    assert!(summary.by_payment_method.is_empty());

    let stats = sales_stats(&orders);
    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.average_order_value, Decimal::ZERO);
    assert!(stats.by_source.is_empty());

    assert!(top_items(&orders, TOP_ITEMS_LIMIT).is_empty());
    assert!(staff_performance(&orders, &default_staff()).is_empty());
}

#[test]
fn test_financial_summary_sums() {
    let mut orders = sample_orders();
    orders[1].discount = dec(100);
    orders[1].tip = dec(200);

    let summary = financial_summary(&orders);
    assert_eq!(summary.order_count, 3);
    assert_eq!(summary.total_revenue, dec(9180));
    assert_eq!(summary.total_tax, dec(680));
    assert_eq!(summary.total_discounts, dec(100));
    assert_eq!(summary.total_tips, dec(200));
    assert_eq!(summary.net_revenue, dec(9080));
}

#[test]
fn test_orders_without_payment_method_only_skip_the_breakdown() {
    let orders = sample_orders();
    let summary = financial_summary(&orders);

    assert_eq!(summary.by_payment_method.len(), 2);
    assert_eq!(summary.by_payment_method[&PaymentMethod::Card], dec(2700));
    assert_eq!(summary.by_payment_method[&PaymentMethod::Cash], dec(1080));
    // o3 (54.00) has no method but is still revenue
    assert_eq!(summary.total_revenue, dec(9180));
}

#[test]
fn test_sums_invariant_under_permutation() {
    let orders = sample_orders();
    let reversed: Vec<Order> = orders.iter().rev().cloned().collect();
    let rotated: Vec<Order> = orders[1..].iter().chain(&orders[..1]).cloned().collect();

    let base = financial_summary(&orders);
    assert_eq!(financial_summary(&reversed), base);
    assert_eq!(financial_summary(&rotated), base);
    assert_eq!(sales_stats(&reversed), sales_stats(&orders));
}

#[test]
fn test_sales_stats_and_average() {
    let orders = sample_orders();
    let stats = sales_stats(&orders);

    assert_eq!(stats.total_sales, dec(9180));
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.average_order_value, dec(3060));
    assert_eq!(stats.by_payment_method.len(), 2);
    assert_eq!(stats.by_source.len(), 3);
}

#[test]
fn test_average_order_value_rounds_to_cents() {
    assert_eq!(average_order_value(dec(1000), 3), dec(333));
    assert_eq!(average_order_value(dec(1000), 0), Decimal::ZERO);
}

#[test]
fn test_source_breakdown_one_entry_per_source() {
    let mut orders = sample_orders();
    orders[1].source = OrderSource::DineIn;

    let by_source = source_breakdown(&orders);
    assert_eq!(by_source.len(), 2);
    assert_eq!(by_source[&OrderSource::DineIn], dec(3780));
    assert_eq!(by_source[&OrderSource::UberEats], dec(5400));
}

#[test]
fn test_breakdown_serializes_with_wire_tags() {
    let by_source = source_breakdown(&sample_orders());
    let json = serde_json::to_value(&by_source).unwrap();
    assert!(json.get("uber-eats").is_some());
    assert!(json.get("dine-in").is_some());
}

// ========================================================================
// Top items
// ========================================================================

#[test]
fn test_top_items_accumulate_by_menu_item() {
    let orders = sample_orders();
    let ranking = top_items(&orders, TOP_ITEMS_LIMIT);

    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[0].menu_item_id, "6");
    assert_eq!(ranking[0].revenue, dec(5000));
    assert_eq!(ranking[1].menu_item_id, "1");
    assert_eq!(ranking[1].quantity, 3);
    assert_eq!(ranking[1].revenue, dec(3000));
    assert_eq!(ranking[2].name, "Garlic Bread");
}

#[test]
fn test_top_items_truncates_to_limit() {
    let items = (0..15)
        .map(|i| line(&i.to_string(), &format!("Item {i}"), 100 * (i + 1), 1))
        .collect();
    let orders = vec![completed_order("o", "user-2", None, OrderSource::DineIn, items)];

    let ranking = top_items(&orders, TOP_ITEMS_LIMIT);
    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking[0].menu_item_id, "14");
    assert_eq!(ranking[9].menu_item_id, "5");
}

#[test]
fn test_top_item_ties_keep_first_seen_order() {
    let orders = vec![completed_order(
        "o",
        "user-2",
        None,
        OrderSource::DineIn,
        vec![
            line("b", "Beer", 500, 2),
            line("a", "Ice Cream", 1000, 1),
            line("c", "Cola", 250, 4),
        ],
    )];

    let ids: Vec<String> = top_items(&orders, TOP_ITEMS_LIMIT)
        .into_iter()
        .map(|item| item.menu_item_id)
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn test_top_item_set_invariant_under_permutation() {
    let orders = sample_orders();
    let reversed: Vec<Order> = orders.iter().rev().cloned().collect();

    let mut a = top_items(&orders, TOP_ITEMS_LIMIT);
    let mut b = top_items(&reversed, TOP_ITEMS_LIMIT);
    a.sort_by(|x, y| x.menu_item_id.cmp(&y.menu_item_id));
    b.sort_by(|x, y| x.menu_item_id.cmp(&y.menu_item_id));
    assert_eq!(a, b);
}

// ========================================================================
// Staff performance
// ========================================================================

#[test]
fn test_reports_survive_overflowing_records() {
    let mut orders = sample_orders();
    let mut corrupt = completed_order(
        "corrupt",
        "user-5",
        Some(PaymentMethod::Card),
        OrderSource::DineIn,
        vec![line("1", "Caesar Salad", 1000, 1)],
    );
    corrupt.items[0].price = Decimal::MAX;
    corrupt.items[0].quantity = 9;
    corrupt.total = Decimal::MAX;
    orders.push(corrupt);

    // the overflowing line is skipped, the rest still ranks
    let top = top_items(&orders, TOP_ITEMS_LIMIT);
    let salad = top.iter().find(|i| i.menu_item_id == "1").unwrap();
    assert_eq!(salad.quantity, 3);
    assert_eq!(salad.revenue, dec(3000));

    let summary = financial_summary(&orders);
    assert_eq!(summary.order_count, 4);
    assert_eq!(summary.total_revenue, Decimal::MAX);
    assert_eq!(summary.by_payment_method[&PaymentMethod::Card], Decimal::MAX);

    let stats = sales_stats(&orders);
    assert_eq!(stats.total_sales, Decimal::MAX);

    let staff = staff_performance(&orders, &default_staff());
    assert_eq!(staff[0].revenue, Decimal::MAX);
}

#[test]
fn test_staff_performance_two_staff_three_orders() {
    let orders = sample_orders();
    let rows = staff_performance(&orders, &default_staff());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].user_id, "user-2");
    assert_eq!(rows[0].name, "Sarah Cashier");
    assert_eq!(rows[0].orders, 2);
    assert_eq!(rows[0].revenue, dec(8100));
    assert_eq!(rows[1].user_id, "user-5");
    assert_eq!(rows[1].name, "Tom Waiter");
    assert_eq!(rows[1].orders, 1);
    assert_eq!(rows[1].revenue, dec(1080));
}

#[test]
fn test_staff_performance_unknown_staff() {
    let mut orders = sample_orders();
    orders[1].created_by = "user-99".to_string();

    let rows = staff_performance(&orders, &default_staff());
    let unknown = rows.iter().find(|r| r.user_id == "user-99").unwrap();
    assert_eq!(unknown.name, UNKNOWN_STAFF);

    let rows = staff_performance(&orders, &[]);
    assert!(rows.iter().all(|r| r.name == UNKNOWN_STAFF));
}

// ========================================================================
// Views
// ========================================================================

#[test]
fn test_manager_dashboard_only_counts_completed_today() {
    let mut orders = sample_orders();

    let mut yesterday = completed_order(
        "old",
        "user-2",
        Some(PaymentMethod::Card),
        OrderSource::DineIn,
        vec![line("19", "Chef Special", 2899, 1)],
    );
    yesterday.created_at = T0 - 24 * 3_600_000;
    orders.push(yesterday);

    let mut pending = build_order(
        "pending",
        vec![line("15", "Beer", 599, 3)],
        Decimal::ZERO,
        OrderStatus::Pending,
        T0,
    );
    pending.created_by = "user-5".to_string();
    orders.push(pending);

    let mut staff = default_staff();
    staff[3].active = false;

    let day_start = T0 - 60_000;
    let dashboard = ManagerDashboard::build(&orders, &staff, day_start);

    assert_eq!(dashboard.stats.total_orders, 3);
    assert_eq!(dashboard.active_staff, 4);
    assert_eq!(dashboard.stats.total_sales, dec(9180));
    assert!(dashboard.top_items.iter().all(|i| i.menu_item_id != "19"));
    assert!(dashboard.top_items.iter().all(|i| i.menu_item_id != "15"));
    assert_eq!(dashboard.staff_performance.len(), 2);
}

#[test]
fn test_accountant_view_filters() {
    let mut orders = sample_orders();
    orders[0].order_number = 1000;
    orders[1].order_number = 1001;
    orders[2].order_number = 1012;
    orders.push(build_order(
        "cancelled",
        vec![line("1", "Caesar Salad", 1000, 1)],
        Decimal::ZERO,
        OrderStatus::Cancelled,
        T0,
    ));

    let view = AccountantView::build(&orders);
    assert_eq!(view.completed.len(), 3);
    assert_eq!(view.summary.total_revenue, dec(9180));

    let all = TransactionFilter::default();
    assert_eq!(view.transactions(&all).len(), 3);

    let by_number = TransactionFilter::parse("101", "all", "all").unwrap();
    let hits = view.transactions(&by_number);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "o3");

    let by_source = TransactionFilter::parse("TAKE", "all", "all").unwrap();
    assert_eq!(view.transactions(&by_source)[0].id, "o2");

    let by_payment = TransactionFilter::parse("", "card", "all").unwrap();
    assert_eq!(view.transactions(&by_payment).len(), 1);

    let by_status = TransactionFilter::parse("", "all", "pending").unwrap();
    assert!(view.transactions(&by_status).is_empty());

    assert!(TransactionFilter::parse("", "bitcoin", "all").is_err());
}

// ========================================================================
// CSV export
// ========================================================================

#[test]
fn test_csv_export() {
    let mut orders = sample_orders();
    orders[0].order_number = 1000;
    orders[2].order_number = 1002;

    let csv = transactions_csv([&orders[0], &orders[2]], Tz::UTC);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], "1000,2025-10-14,09:30,dine-in,card,25.00,2.00,0.00,0.00,27.00");
    assert_eq!(lines[2], "1002,2025-10-14,09:30,uber-eats,N/A,50.00,4.00,0.00,0.00,54.00");
    assert!(lines.iter().all(|l| l.split(',').count() == 10));
}

#[test]
fn test_csv_export_uses_business_timezone_and_negative_totals() {
    let mut order = build_order(
        "neg",
        vec![line("1", "Caesar Salad", 1000, 2), line("2", "Garlic Bread", 500, 1)],
        dec(3000),
        OrderStatus::Completed,
        T0,
    );
    order.order_number = 1005;

    let tz: Tz = "Asia/Tokyo".parse().unwrap();
    let csv = transactions_csv([&order], tz);
    assert_eq!(
        csv.lines().nth(1).unwrap(),
        "1005,2025-10-14,18:30,dine-in,cash,25.00,0.00,30.00,0.00,-5.00"
    );
}

#[test]
fn test_csv_header_only_for_no_orders() {
    let orders: Vec<Order> = Vec::new();
    assert_eq!(transactions_csv(&orders, Tz::UTC), CSV_HEADER);
    assert_eq!(export_file_name(1_700_000_000_000), "transactions-1700000000000.csv");
}
