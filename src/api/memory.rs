//! In-process order service backend.

use crate::api::{ApiError, OrderApi};
use crate::model::{CatalogItem, Order, OrderId, OrderUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// An [`OrderApi`] that keeps everything in memory.
///
/// Used by the demo binary and the end-to-end tests. Saved orders are stored
/// with their reconciled lines, so reopening one yields exactly what was saved.
pub struct InMemoryOrderApi {
    catalog: Vec<CatalogItem>,
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderApi {
    pub fn new(catalog: Vec<CatalogItem>) -> Self {
        Self {
            catalog,
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Stores an order so it can be edited and updated.
    pub async fn insert_order(&self, order: Order) {
        self.orders.write().await.insert(order.id.clone(), order);
    }

    /// Current stored state of an order.
    pub async fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().await.get(id).cloned()
    }
}

#[async_trait]
impl OrderApi for InMemoryOrderApi {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ApiError> {
        debug!(items = self.catalog.len(), "Serving catalog");
        Ok(self.catalog.clone())
    }

    async fn update_order(&self, id: &OrderId, update: OrderUpdate) -> Result<(), ApiError> {
        let details = serde_json::to_value(&update.order_details)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let mut orders = self.orders.write().await;
        let Some(order) = orders.get_mut(id) else {
            warn!(%id, "Update for unknown order");
            return Err(ApiError::rejected(format!("Order not found: {}", id)));
        };
        order.date = Some(update.date);
        order.total_amount = update.total_amount;
        order.order_details = details;
        info!(%id, total_amount = order.total_amount, "Order updated");
        Ok(())
    }
}
