//! Category pricing rules and the order-level discount.
//!
//! Each category maps to a fixed adjustment of the base price. The discount is
//! applied once to the sum of effective prices, never per item.

use super::item::{Category, Item};
use super::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Mandatory service fee added to every electronics item.
pub const ELECTRONICS_SURCHARGE: Decimal = dec!(200);

/// Subtotals strictly above this amount receive the discount.
pub const DISCOUNT_THRESHOLD: Decimal = dec!(10000);

/// Multiplier applied to a discounted subtotal (5% off).
pub const DISCOUNT_FACTOR: Decimal = dec!(0.95);

/// Highest base price a catalog accepts. Keeps order sums far below the
/// range where `Decimal` addition overflows.
pub const MAX_BASE_PRICE: Decimal = dec!(1000000000000);

/// Price adjustment for a category.
pub fn surcharge(category: Category) -> Money {
    match category {
        Category::Apparel => Money::ZERO,
        Category::Electronics => Money::new(ELECTRONICS_SURCHARGE),
    }
}

/// Base price plus the category adjustment, before any order-level discount.
pub fn effective_price(item: &Item) -> Money {
    item.base_price + surcharge(item.category)
}

/// Applies the whole-order discount to a subtotal.
pub fn apply_discount(subtotal: Money) -> Money {
    if subtotal.value() > DISCOUNT_THRESHOLD {
        subtotal * DISCOUNT_FACTOR
    } else {
        subtotal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electronics_surcharge() {
        let tv = Item::new(2, "Television", Category::Electronics, Money::new(dec!(10000)));
        assert_eq!(effective_price(&tv), Money::new(dec!(10200)));
    }

    #[test]
    fn test_apparel_has_no_surcharge() {
        let shirt = Item::new(1, "Boys T-Shirt", Category::Apparel, Money::new(dec!(1200)));
        assert_eq!(effective_price(&shirt), Money::new(dec!(1200)));
    }

    #[test]
    fn test_discount_boundary_is_exclusive() {
        assert_eq!(
            apply_discount(Money::new(dec!(10000))),
            Money::new(dec!(10000))
        );
        assert_eq!(
            apply_discount(Money::new(dec!(10000.01))),
            Money::new(dec!(10000.01) * dec!(0.95))
        );
    }

    #[test]
    fn test_discount_on_large_subtotal() {
        assert_eq!(
            apply_discount(Money::new(dec!(10200))),
            Money::new(dec!(9690.0))
        );
    }
}
