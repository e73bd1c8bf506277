use super::item::{Category, Item};
use super::money::Money;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// The list of purchasable items, in display order.
///
/// Items are shared with orders through `Arc`, so the catalog keeps ownership
/// while orders hold cheap references.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in clothing catalog.
    pub fn clothing() -> Self {
        let mut catalog = Self::new();
        let products = [
            (1, "Boys T-Shirt", "Boys", dec!(1200)),
            (2, "Boys Jeans", "Boys", dec!(2500)),
            (3, "Girls Kurti", "Girls", dec!(1800)),
            (4, "Girls Saree", "Girls", dec!(6000)),
            (5, "Boys Jacket", "Boys", dec!(4500)),
            (6, "Girls Top", "Girls", dec!(1500)),
        ];
        for (id, name, section, price) in products {
            catalog.add(Item::new(id, name, Category::Apparel, Money::new(price)).with_section(section));
        }
        catalog
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(Arc::new(item));
    }

    pub fn list_items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn find(&self, id: u32) -> Option<Arc<Item>> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}
