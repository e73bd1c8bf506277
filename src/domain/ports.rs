use super::order::Order;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: u32) -> Result<Option<Order>>;
    async fn remove(&self, order_id: u32) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

/// Durable, append-only record of finalized orders.
#[async_trait]
pub trait OrderLog: Send + Sync {
    async fn append(&self, order: &Order) -> Result<()>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type OrderLogBox = Box<dyn OrderLog>;
