use super::order_log::format_order_line;
use crate::domain::order::Order;
use crate::domain::ports::{OrderLog, OrderStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for placed orders.
///
/// Uses `Arc<RwLock<BTreeMap<u32, Order>>>` so that `all_orders` comes back
/// sorted by order id.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<u32, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn store(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id(), order);
        Ok(())
    }

    async fn get(&self, order_id: u32) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&order_id).cloned())
    }

    async fn remove(&self, order_id: u32) -> Result<Option<Order>> {
        let mut orders = self.orders.write().await;
        Ok(orders.remove(&order_id))
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}

/// Keeps log lines in memory instead of on disk.
#[derive(Default, Clone)]
pub struct InMemoryOrderLog {
    lines: Arc<RwLock<Vec<String>>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.read().await.clone()
    }
}

#[async_trait]
impl OrderLog for InMemoryOrderLog {
    async fn append(&self, order: &Order) -> Result<()> {
        self.lines.write().await.push(format_order_line(order));
        Ok(())
    }
}
