use crate::domain::catalog::Catalog;
use crate::domain::order::Order;
use crate::domain::payment::{PaymentProcessor, Receipt};
use crate::domain::ports::{OrderLogBox, OrderStoreBox};
use crate::error::{PaymentError, Result};
use tracing::{info, warn};

/// Outcome of [`Shop::checkout`].
#[derive(Debug)]
pub struct Checkout {
    /// Receipt for the order's total, or why the payment was refused.
    pub payment: std::result::Result<Receipt, PaymentError>,
    /// False when the order could not be appended to the order log.
    pub logged: bool,
}

/// The shop front: owns the catalog, the placed orders and the order log.
pub struct Shop {
    catalog: Catalog,
    orders: OrderStoreBox,
    order_log: OrderLogBox,
    payments: PaymentProcessor,
}

impl Shop {
    /// Creates a new `Shop`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Items on sale, in display order.
    /// * `orders` - Where placed orders are kept.
    /// * `order_log` - Append-only record of checked-out orders.
    pub fn new(catalog: Catalog, orders: OrderStoreBox, order_log: OrderLogBox) -> Self {
        Self {
            catalog,
            orders,
            order_log,
            payments: PaymentProcessor::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Records the order. An existing order with the same id is replaced.
    pub async fn place_order(&self, order: Order) -> Result<()> {
        info!(order_id = order.id(), items = order.items().len(), "Order placed");
        self.orders.store(order).await
    }

    /// Removes a placed order. Returns whether one existed.
    pub async fn cancel_order(&self, order_id: u32) -> Result<bool> {
        let removed = self.orders.remove(order_id).await?.is_some();
        info!(order_id, removed, "Order cancellation requested");
        Ok(removed)
    }

    pub async fn order(&self, order_id: u32) -> Result<Option<Order>> {
        self.orders.get(order_id).await
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.orders.all_orders().await
    }

    /// Takes payment for the order's total and appends it to the order log.
    ///
    /// On a successful payment the order is marked finalized in the store.
    /// The log append happens whether or not the payment was accepted. A
    /// failed append is reported through [`Checkout::logged`] and never
    /// returned as an error.
    pub async fn checkout(&self, order: &mut Order, method: &str) -> Checkout {
        let total = order.total();
        let payment = self.payments.make_payment(total.value(), method);
        match &payment {
            Ok(_) => {
                order.finalize();
                if let Err(e) = self.orders.store(order.clone()).await {
                    warn!(order_id = order.id(), error = %e, "Failed to record finalized order");
                }
            }
            Err(e) => warn!(order_id = order.id(), error = %e, "Payment rejected"),
        }

        let logged = match self.order_log.append(order).await {
            Ok(()) => true,
            Err(e) => {
                warn!(order_id = order.id(), error = %e, "Failed to append order to log");
                false
            }
        };

        Checkout { payment, logged }
    }
}
