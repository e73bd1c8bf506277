use crate::domain::catalog::Catalog;
use crate::domain::item::{Category, Item};
use crate::domain::money::Money;
use crate::domain::pricing::MAX_BASE_PRICE;
use crate::error::{Result, ShopError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;

/// One row of a catalog file: `id,name,section,category,price`.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    name: String,
    section: Option<String>,
    category: Option<String>,
    price: Decimal,
}

impl TryFrom<CatalogRow> for Item {
    type Error = ShopError;

    fn try_from(row: CatalogRow) -> Result<Self> {
        if row.price < Decimal::ZERO {
            return Err(ShopError::InvalidItem {
                id: row.id,
                reason: format!("negative price {}", row.price),
            });
        }
        if row.price > MAX_BASE_PRICE {
            return Err(ShopError::InvalidItem {
                id: row.id,
                reason: format!("price {} exceeds {}", row.price, MAX_BASE_PRICE),
            });
        }
        let category = match row.category.as_deref() {
            Some(raw) => raw
                .parse::<Category>()
                .map_err(|reason| ShopError::InvalidItem { id: row.id, reason })?,
            None => Category::default(),
        };

        Ok(Item {
            id: row.id,
            name: row.name,
            section: row.section,
            category,
            base_price: Money::new(row.price),
        })
    }
}

/// Reads catalog items from a CSV source.
///
/// Wraps `csv::Reader` and trims whitespace around every field. Empty
/// `section` and `category` fields are allowed.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates items.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.reader
            .into_deserialize::<CatalogRow>()
            .map(|result| result.map_err(ShopError::from).and_then(Item::try_from))
    }

    /// Reads the whole source into a catalog, stopping at the first bad row.
    ///
    /// Item ids must be unique; a repeated id is rejected.
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut seen = HashSet::new();
        let mut catalog = Catalog::new();
        for item in self.items() {
            let item = item?;
            if !seen.insert(item.id) {
                return Err(ShopError::InvalidItem {
                    id: item.id,
                    reason: "duplicate id".to_string(),
                });
            }
            catalog.add(item);
        }
        Ok(catalog)
    }
}
