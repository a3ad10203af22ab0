use crate::core::error::{AppError, Result};
use crate::features::orders::models::{Order, OrderStatus};
use crate::modules::store::SharedStore;

/// Service for order queries and status changes
pub struct OrderService {
    store: SharedStore,
}

impl OrderService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// List orders, optionally narrowed by a search query and a status.
    ///
    /// A blank query lists everything; the store's search itself has no
    /// special case for it.
    pub async fn list(&self, query: Option<&str>, status: Option<OrderStatus>) -> Vec<Order> {
        let store = self.store.read().await;

        let orders = match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => store.search_orders(q),
            None => store.orders(),
        };

        match status {
            Some(status) => orders.into_iter().filter(|o| o.status == status).collect(),
            None => orders,
        }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Order> {
        self.store
            .read()
            .await
            .order_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Order '{}' not found", id)))
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let mut store = self.store.write().await;

        let previous = store
            .order_by_id(id)
            .map(|o| o.status)
            .ok_or_else(|| AppError::NotFound(format!("Order '{}' not found", id)))?;

        let order = store
            .update_order_status(id, status)
            .ok_or_else(|| AppError::NotFound(format!("Order '{}' not found", id)))?;

        tracing::info!(
            "Order status updated: id={}, {} -> {}",
            order.id,
            previous,
            order.status
        );

        Ok(order)
    }
}
