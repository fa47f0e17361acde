//! Order records and the in-memory order store.
//!
//! Orders are seed data only; no checkout flow creates new ones. Totals are
//! computed once at purchase time and stored, never rederived from live
//! product prices. The admin mutates status in place; any status can be set
//! from any status.

pub mod seed;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderItemId, OrderStatus, PaymentType, ProductId, UserId, VariantId};

/// A postal address captured on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payment method descriptor stored on an order. Card fields are present
/// only for card payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<u16>,
}

/// One line of an order, capturing the unit price at time of purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub quantity: u32,
    /// Price at time of order, not the live catalog price.
    pub price: Decimal,
}

/// An order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Grand total as charged; stored, not derived.
    pub total_amount: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-status order counts for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub returned: usize,
}

/// Aggregate order numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
    pub status_counts: StatusCounts,
}

/// In-memory order store, seeded with mock orders.
#[derive(Debug)]
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl OrderStore {
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Create a store seeded with the mock orders.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::orders())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Order>> {
        self.orders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Order>> {
        self.orders.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All orders, most recent first.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        let mut orders = self.read().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    #[must_use]
    pub fn by_id(&self, id: &OrderId) -> Option<Order> {
        self.read().iter().find(|o| &o.id == id).cloned()
    }

    /// Orders currently in the given status, most recent first.
    #[must_use]
    pub fn by_status(&self, status: OrderStatus) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .read()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Case-insensitive search by order id or shipping name.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Order> {
        let term = query.to_lowercase();
        self.read()
            .iter()
            .filter(|o| {
                o.id.as_str().to_lowercase().contains(&term)
                    || o.shipping_address.first_name.to_lowercase().contains(&term)
                    || o.shipping_address.last_name.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Set an order's status, restamping `updated_at`.
    ///
    /// Transitions are free-form: any status can be set from any status.
    /// Returns the updated order, or `None` when the id is unknown.
    pub fn set_status(&self, id: &OrderId, status: OrderStatus) -> Option<Order> {
        let mut orders = self.write();
        let order = orders.iter_mut().find(|o| &o.id == id)?;
        order.status = status;
        order.updated_at = Utc::now();
        Some(order.clone())
    }

    /// Aggregate numbers for the admin dashboard.
    #[must_use]
    pub fn stats(&self) -> OrderStats {
        let orders = self.read();
        let total_orders = orders.len();
        let total_revenue: Decimal = orders.iter().map(|o| o.total_amount).sum();
        let average_order_value = if total_orders == 0 {
            Decimal::ZERO
        } else {
            (total_revenue / Decimal::from(total_orders)).round_dp(2)
        };

        let mut counts = StatusCounts::default();
        for order in orders.iter() {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::Processing => counts.processing += 1,
                OrderStatus::Shipped => counts.shipped += 1,
                OrderStatus::Delivered => counts.delivered += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
                OrderStatus::Returned => counts.returned += 1,
            }
        }

        OrderStats {
            total_orders,
            total_revenue,
            average_order_value,
            status_counts: counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn store() -> OrderStore {
        OrderStore::seeded()
    }

    #[test]
    fn test_seeded_orders() {
        assert_eq!(store().len(), 5);
    }

    #[test]
    fn test_all_sorted_newest_first() {
        let orders = store().all();
        assert!(orders
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(orders.first().map(|o| o.id.as_str()), Some("ORD-004"));
    }

    #[test]
    fn test_by_id() {
        let store = store();
        let order = store.by_id(&OrderId::new("ORD-001")).expect("order");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert!(store.by_id(&OrderId::new("ORD-999")).is_none());
    }

    #[test]
    fn test_by_status() {
        let delivered = store().by_status(OrderStatus::Delivered);
        assert_eq!(delivered.len(), 2);
        assert!(delivered
            .iter()
            .all(|o| o.status == OrderStatus::Delivered));
    }

    #[test]
    fn test_search_by_id_and_name() {
        let store = store();
        assert_eq!(store.search("ord-002").len(), 1);
        assert_eq!(store.search("sarah").len(), 1);
        // "ord" matches every seeded id.
        assert_eq!(store.search("ORD").len(), 5);
        assert!(store.search("nobody").is_empty());
    }

    #[test]
    fn test_set_status_is_free_form() {
        let store = store();
        let id = OrderId::new("ORD-001");
        let before = store.by_id(&id).expect("order");
        assert_eq!(before.status, OrderStatus::Delivered);

        // Nothing prevents walking a delivered order back to pending.
        let updated = store.set_status(&id, OrderStatus::Pending).expect("order");
        assert_eq!(updated.status, OrderStatus::Pending);
        assert!(updated.updated_at > before.updated_at);

        assert!(store
            .set_status(&OrderId::new("ORD-999"), OrderStatus::Shipped)
            .is_none());
    }

    #[test]
    fn test_stats() {
        let stats = store().stats();
        assert_eq!(stats.total_orders, 5);
        assert_eq!(stats.total_revenue, dec!(1588.10));
        assert_eq!(stats.average_order_value, dec!(317.62));
        assert_eq!(stats.status_counts.delivered, 2);
        assert_eq!(stats.status_counts.shipped, 1);
        assert_eq!(stats.status_counts.processing, 1);
        assert_eq!(stats.status_counts.pending, 1);
        assert_eq!(stats.status_counts.cancelled, 0);
    }

    #[test]
    fn test_stats_empty_store() {
        let stats = OrderStore::default().stats();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.average_order_value, Decimal::ZERO);
    }

    #[test]
    fn test_totals_are_stored_not_derived() {
        // ORD-001's line prices no longer sum to the live catalog prices;
        // the stored totals must win.
        let order = store().by_id(&OrderId::new("ORD-001")).expect("order");
        let line_sum: Decimal = order
            .items
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum();
        assert_eq!(line_sum, order.subtotal);
        assert_eq!(order.total_amount, dec!(399.97));
    }
}
