use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::error::{Result, ShopError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// How long order processing takes unless configured otherwise.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Runs the delayed finalization step of an order on a background task.
#[derive(Debug, Clone, Copy)]
pub struct AsyncOrderProcessor {
    delay: Duration,
}

impl Default for AsyncOrderProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_DELAY)
    }
}

impl AsyncOrderProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Starts processing. The order's total is captured now; later changes to
    /// the order are not seen by the task.
    pub fn spawn(&self, order: &Order) -> ProcessingHandle {
        let order_id = order.id();
        let total = order.total();
        let delay = self.delay;

        debug!(order_id, ?delay, "Spawning order processing");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!(order_id, %total, "Order processed");
            total
        });

        ProcessingHandle { order_id, handle }
    }
}

/// Handle to a running processing task. Await [`ProcessingHandle::wait`]
/// before shutting down, otherwise the task may be dropped mid-flight.
#[derive(Debug)]
pub struct ProcessingHandle {
    order_id: u32,
    handle: JoinHandle<Money>,
}

impl ProcessingHandle {
    pub fn order_id(&self) -> u32 {
        self.order_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task and returns the processed total.
    pub async fn wait(self) -> Result<Money> {
        self.handle
            .await
            .map_err(|e| ShopError::Processing(format!("order {}: {}", self.order_id, e)))
    }
}
