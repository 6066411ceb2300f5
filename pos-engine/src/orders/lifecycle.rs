//! Order workflow and kitchen urgency
//!
//! ```text
//! pending ──► preparing ──► ready ──► completed
//!    └────────────┴───────────┴─────► cancelled
//! ```
//!
//! [`Lifecycle::set_status`] writes any status without looking at the
//! current one, which is how stored records have always been updated.
//! [`Lifecycle::advance`] checks the edge first and is what the kitchen
//! actions go through.

use serde::Serialize;
use shared::{Order, OrderStatus};

use super::{OrderError, OrderResult};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Orders older than this many minutes are flagged `warning`
pub const WARNING_AFTER_MINUTES: i64 = 20;
/// Orders older than this many minutes are flagged `urgent`
pub const URGENT_AFTER_MINUTES: i64 = 30;

/// Kitchen priority derived from order age
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Urgent,
}

/// Whole minutes since the order was created, floored
pub fn elapsed_minutes(order: &Order, now: i64) -> i64 {
    now.saturating_sub(order.created_at).div_euclid(MILLIS_PER_MINUTE)
}

/// Urgency for `order` at wall-clock time `now`
///
/// Never cache the result: it changes as `now` moves even when the order
/// doesn't.
pub fn urgency(order: &Order, now: i64) -> Urgency {
    let minutes = elapsed_minutes(order, now);
    if minutes > URGENT_AFTER_MINUTES {
        Urgency::Urgent
    } else if minutes > WARNING_AFTER_MINUTES {
        Urgency::Warning
    } else {
        Urgency::Normal
    }
}

/// Status changes on an order record
pub trait Lifecycle {
    /// Write `status` unconditionally, stamping `updated_at` (and
    /// `completed_at` when completing)
    fn set_status(&mut self, status: OrderStatus, now: i64);

    /// Like [`Lifecycle::set_status`] but rejects edges the workflow doesn't have
    fn advance(&mut self, status: OrderStatus, now: i64) -> OrderResult<()>;

    fn start_preparing(&mut self, now: i64) -> OrderResult<()> {
        self.advance(OrderStatus::Preparing, now)
    }

    fn mark_ready(&mut self, now: i64) -> OrderResult<()> {
        self.advance(OrderStatus::Ready, now)
    }

    fn complete(&mut self, now: i64) -> OrderResult<()> {
        self.advance(OrderStatus::Completed, now)
    }

    fn cancel(&mut self, now: i64) -> OrderResult<()> {
        self.advance(OrderStatus::Cancelled, now)
    }
}

impl Lifecycle for Order {
    fn set_status(&mut self, status: OrderStatus, now: i64) {
        self.status = status;
        self.updated_at = now;
        if status == OrderStatus::Completed {
            self.completed_at = Some(now);
        }
    }

    fn advance(&mut self, status: OrderStatus, now: i64) -> OrderResult<()> {
        if !self.status.can_transition_to(status) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        self.set_status(status, now);
        Ok(())
    }
}

/// Orders the kitchen still has to work on, oldest first
pub fn active_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Vec<&'a Order> {
    let mut active: Vec<&Order> = orders
        .into_iter()
        .filter(|order| order.status.is_active())
        .collect();
    active.sort_by_key(|order| order.created_at);
    active
}

/// One card on the kitchen display
#[derive(Debug, Clone, Serialize)]
pub struct KitchenTicket<'a> {
    pub order: &'a Order,
    pub elapsed_minutes: i64,
    pub urgency: Urgency,
}

/// Active orders with their age and urgency at `now`
pub fn kitchen_queue<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    now: i64,
) -> Vec<KitchenTicket<'a>> {
    active_orders(orders)
        .into_iter()
        .map(|order| KitchenTicket {
            order,
            elapsed_minutes: elapsed_minutes(order, now),
            urgency: urgency(order, now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::order_with;

    const MINUTE: i64 = MILLIS_PER_MINUTE;
    const T0: i64 = 1_760_000_000_000;

    fn created_minutes_ago(minutes: i64) -> Order {
        order_with("o", OrderStatus::Pending, T0 - minutes * MINUTE)
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(urgency(&created_minutes_ago(0), T0), Urgency::Normal);
        assert_eq!(urgency(&created_minutes_ago(19), T0), Urgency::Normal);
        assert_eq!(urgency(&created_minutes_ago(20), T0), Urgency::Normal);
        assert_eq!(urgency(&created_minutes_ago(21), T0), Urgency::Warning);
        assert_eq!(urgency(&created_minutes_ago(30), T0), Urgency::Warning);
        assert_eq!(urgency(&created_minutes_ago(31), T0), Urgency::Urgent);
    }

    #[test]
    fn test_elapsed_minutes_floors() {
        let order = order_with("o", OrderStatus::Pending, T0);
        assert_eq!(elapsed_minutes(&order, T0 + 20 * MINUTE + 59_999), 20);
        assert_eq!(urgency(&order, T0 + 20 * MINUTE + 59_999), Urgency::Normal);
        assert_eq!(urgency(&order, T0 + 21 * MINUTE), Urgency::Warning);
        // clock skew: created slightly in the future
        assert_eq!(elapsed_minutes(&order, T0 - 1), -1);
        assert_eq!(urgency(&order, T0 - 1), Urgency::Normal);
    }

    #[test]
    fn test_elapsed_minutes_with_corrupt_timestamp() {
        let order = order_with("o", OrderStatus::Pending, i64::MIN);
        assert_eq!(urgency(&order, T0), Urgency::Urgent);
    }

    #[test]
    fn test_urgency_recomputed_as_time_moves() {
        let order = order_with("o", OrderStatus::Preparing, T0);
        assert_eq!(urgency(&order, T0 + 5 * MINUTE), Urgency::Normal);
        assert_eq!(urgency(&order, T0 + 25 * MINUTE), Urgency::Warning);
        assert_eq!(urgency(&order, T0 + 45 * MINUTE), Urgency::Urgent);
    }

    #[test]
    fn test_happy_path_transitions_stamp_times() {
        let mut order = order_with("o", OrderStatus::Pending, T0);

        order.start_preparing(T0 + MINUTE).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.updated_at, T0 + MINUTE);
        assert!(order.completed_at.is_none());

        order.mark_ready(T0 + 2 * MINUTE).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);

        order.complete(T0 + 3 * MINUTE).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.updated_at, T0 + 3 * MINUTE);
        assert_eq!(order.completed_at, Some(T0 + 3 * MINUTE));
    }

    #[test]
    fn test_advance_rejects_backwards_and_terminal_edges() {
        let mut order = order_with("o", OrderStatus::Ready, T0);
        let err = order.advance(OrderStatus::Preparing, T0 + MINUTE).unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Ready,
                to: OrderStatus::Preparing
            }
        ));
        // rejected edge leaves the record untouched
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.updated_at, T0);

        order.cancel(T0 + MINUTE).unwrap();
        assert!(order.cancel(T0 + 2 * MINUTE).is_err());
        assert!(order.complete(T0 + 2 * MINUTE).is_err());
    }

    #[test]
    fn test_set_status_is_permissive() {
        let mut order = order_with("o", OrderStatus::Ready, T0);
        order.set_status(OrderStatus::Preparing, T0 + MINUTE);
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.updated_at, T0 + MINUTE);
    }

    #[test]
    fn test_money_fields_survive_status_changes() {
        let mut order = order_with("o", OrderStatus::Pending, T0);
        let before = (order.subtotal, order.tax, order.discount, order.tip, order.total);
        order.set_status(OrderStatus::Completed, T0 + MINUTE);
        let after = (order.subtotal, order.tax, order.discount, order.tip, order.total);
        assert_eq!(before, after);
    }

    #[test]
    fn test_active_orders_fifo() {
        let orders = vec![
            order_with("newest", OrderStatus::Pending, T0 + 3 * MINUTE),
            order_with("done", OrderStatus::Completed, T0 - 10 * MINUTE),
            order_with("oldest", OrderStatus::Preparing, T0),
            order_with("ready", OrderStatus::Ready, T0 - 5 * MINUTE),
            order_with("middle", OrderStatus::Pending, T0 + MINUTE),
            order_with("dropped", OrderStatus::Cancelled, T0 - 20 * MINUTE),
        ];

        let ids: Vec<&str> = active_orders(&orders).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["oldest", "middle", "newest"]);
    }

    #[test]
    fn test_kitchen_queue_carries_urgency() {
        let orders = vec![
            order_with("late", OrderStatus::Pending, T0 - 40 * MINUTE),
            order_with("fresh", OrderStatus::Pending, T0 - 2 * MINUTE),
        ];

        let queue = kitchen_queue(&orders, T0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].order.id, "late");
        assert_eq!(queue[0].elapsed_minutes, 40);
        assert_eq!(queue[0].urgency, Urgency::Urgent);
        assert_eq!(queue[1].urgency, Urgency::Normal);
    }
}
