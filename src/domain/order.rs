use super::item::Item;
use super::money::Money;
use super::pricing;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OrderStatus {
    #[default]
    Empty,
    Accumulating,
    Finalized,
}

/// A customer's order: the items selected so far, in selection order.
///
/// The total is never stored. It is recomputed from the selected items each
/// time it is requested.
#[derive(Debug, Clone)]
pub struct Order {
    id: u32,
    items: Vec<Arc<Item>>,
    status: OrderStatus,
}

impl Order {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            items: Vec::new(),
            status: OrderStatus::Empty,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Appends an item. Duplicates and items outside the catalog are accepted.
    pub fn add_item(&mut self, item: Arc<Item>) {
        self.items.push(item);
        if self.status == OrderStatus::Empty {
            self.status = OrderStatus::Accumulating;
        }
    }

    /// Sum of effective prices, before the order-level discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| pricing::effective_price(item)).sum()
    }

    /// Final amount due.
    pub fn total(&self) -> Money {
        pricing::apply_discount(self.subtotal())
    }

    /// Marks the order as paid. Nothing prevents further mutation afterwards.
    pub fn finalize(&mut self) {
        self.status = OrderStatus::Finalized;
    }
}
