//! Store-backed order collection
//!
//! The whole `orders` collection is read as one snapshot and written back
//! as one value. Two terminals writing at once resolve by last write wins;
//! nothing here merges.

use shared::models::{default_menu, default_staff};
use shared::{MenuItem, Order, OrderStatus, User, keys};

use super::lifecycle::Lifecycle;
use super::numbering::OrderNumberSequence;
use super::{OrderError, OrderResult};
use crate::store::{KvStoreExt, SharedStore, StoreResult};

/// Read/write access to orders, staff and menu in the store
#[derive(Clone)]
pub struct OrderBook {
    store: SharedStore,
}

impl std::fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBook").finish_non_exhaustive()
    }
}

impl OrderBook {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Write the seed staff directory and menu if they are missing
    pub fn seed_defaults(&self) -> StoreResult<()> {
        if self.store.get_raw(keys::STAFF_USERS)?.is_none() {
            let staff = default_staff();
            self.store.set(keys::STAFF_USERS, &staff)?;
            tracing::info!(count = staff.len(), "Seeded staff directory");
        }
        if self.store.get_raw(keys::MENU_ITEMS)?.is_none() {
            let menu = default_menu();
            self.store.set(keys::MENU_ITEMS, &menu)?;
            tracing::info!(count = menu.len(), "Seeded menu");
        }
        Ok(())
    }

    // ========== Snapshots ==========

    /// Current order collection, newest first; empty when never written
    pub fn orders(&self) -> StoreResult<Vec<Order>> {
        self.store.get_or_default(keys::ORDERS)
    }

    pub fn staff(&self) -> StoreResult<Vec<User>> {
        self.store.get_or_default(keys::STAFF_USERS)
    }

    pub fn menu(&self) -> StoreResult<Vec<MenuItem>> {
        self.store.get_or_default(keys::MENU_ITEMS)
    }

    /// Order number sequence continuing after the stored orders
    pub fn sequence(&self, base: u64) -> StoreResult<OrderNumberSequence> {
        Ok(OrderNumberSequence::resume_after(base, &self.orders()?))
    }

    // ========== Writes ==========

    /// Replace the whole order collection
    pub fn save_orders(&self, orders: &[Order]) -> StoreResult<()> {
        self.store.set(keys::ORDERS, orders)
    }

    pub fn save_staff(&self, staff: &[User]) -> StoreResult<()> {
        self.store.set(keys::STAFF_USERS, staff)
    }

    /// Prepend a freshly checked-out order
    pub fn place(&self, order: Order) -> OrderResult<()> {
        let mut orders = self.orders()?;
        tracing::info!(
            order_id = %order.id,
            order_number = order.order_number,
            total = %order.total,
            "Placing order"
        );
        orders.insert(0, order);
        self.save_orders(&orders)?;
        Ok(())
    }

    /// Write `status` onto one order without checking the workflow
    pub fn update_status(&self, order_id: &str, status: OrderStatus, now: i64) -> OrderResult<Order> {
        self.modify(order_id, |order| {
            order.set_status(status, now);
            Ok(())
        })
    }

    /// Move one order along the workflow, rejecting edges it doesn't have
    pub fn advance_status(&self, order_id: &str, status: OrderStatus, now: i64) -> OrderResult<Order> {
        self.modify(order_id, |order| order.advance(status, now))
    }

    fn modify(
        &self,
        order_id: &str,
        change: impl FnOnce(&mut Order) -> OrderResult<()>,
    ) -> OrderResult<Order> {
        let mut orders = self.orders()?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;

        let from = order.status;
        change(order)?;
        let updated = order.clone();

        self.save_orders(&orders)?;
        tracing::info!(
            order_id,
            from = %from,
            to = %updated.status,
            "Order status updated"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::order_with;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn book() -> OrderBook {
        OrderBook::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_empty_store_reads_as_empty_collections() {
        let book = book();
        assert!(book.orders().unwrap().is_empty());
        assert!(book.staff().unwrap().is_empty());
        assert_eq!(book.sequence(1000).unwrap().peek(), 1000);
    }

    #[test]
    fn test_seed_defaults_does_not_overwrite() {
        let book = book();
        book.save_staff(&[]).unwrap();
        book.seed_defaults().unwrap();

        assert!(book.staff().unwrap().is_empty());
        assert_eq!(book.menu().unwrap().len(), 19);
    }

    #[test]
    fn test_place_prepends() {
        let book = book();
        book.place(order_with("first", OrderStatus::Pending, 1)).unwrap();
        book.place(order_with("second", OrderStatus::Pending, 2)).unwrap();

        let ids: Vec<String> = book.orders().unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn test_update_status_rewrites_one_order() {
        let book = book();
        book.place(order_with("a", OrderStatus::Pending, 1)).unwrap();
        book.place(order_with("b", OrderStatus::Pending, 2)).unwrap();

        let updated = book.update_status("a", OrderStatus::Completed, 99).unwrap();
        assert_eq!(updated.completed_at, Some(99));

        let orders = book.orders().unwrap();
        let a = orders.iter().find(|o| o.id == "a").unwrap();
        let b = orders.iter().find(|o| o.id == "b").unwrap();
        assert_eq!(a.status, OrderStatus::Completed);
        assert_eq!(a.updated_at, 99);
        assert_eq!(b.status, OrderStatus::Pending);
        assert_eq!(b.updated_at, 2);
    }

    #[test]
    fn test_advance_status_keeps_store_on_rejection() {
        let book = book();
        book.place(order_with("a", OrderStatus::Pending, 1)).unwrap();

        let err = book.advance_status("a", OrderStatus::Ready, 5).unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));
        assert_eq!(book.orders().unwrap()[0].status, OrderStatus::Pending);

        book.advance_status("a", OrderStatus::Preparing, 6).unwrap();
        assert_eq!(book.orders().unwrap()[0].status, OrderStatus::Preparing);
    }

    #[test]
    fn test_unknown_order() {
        let book = book();
        assert!(matches!(
            book.update_status("missing", OrderStatus::Ready, 0),
            Err(OrderError::OrderNotFound(_))
        ));
    }
}
