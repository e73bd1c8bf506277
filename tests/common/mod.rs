#![allow(dead_code)]

use clothshop::domain::item::{Category, Item};
use clothshop::domain::money::Money;
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a catalog CSV with the given rows of `(id, name, section, category, price)`.
pub fn write_catalog_csv(path: &Path, rows: &[(&str, &str, &str, &str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "name", "section", "category", "price"])?;
    for (id, name, section, category, price) in rows {
        wtr.write_record([*id, *name, *section, *category, *price])?;
    }

    wtr.flush()?;
    Ok(())
}

/// A random item priced between 0.00 and 20000.00.
pub fn random_item<R: Rng>(rng: &mut R, id: u32) -> Item {
    let category = if rng.gen_bool(0.3) {
        Category::Electronics
    } else {
        Category::Apparel
    };
    let cents: i64 = rng.gen_range(0..=2_000_000);
    Item::new(id, format!("Item {}", id), category, Money::new(Decimal::new(cents, 2)))
}
