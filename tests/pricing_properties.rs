mod common;

use clothshop::domain::item::{Category, Item};
use clothshop::domain::money::Money;
use clothshop::domain::order::Order;
use clothshop::domain::pricing::{self, DISCOUNT_FACTOR, DISCOUNT_THRESHOLD};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal_macros::dec;
use std::sync::Arc;

#[test]
fn test_effective_price_by_category() {
    let mut rng = StdRng::seed_from_u64(7);
    for id in 0..500 {
        let item = common::random_item(&mut rng, id);
        let expected = match item.category {
            Category::Electronics => item.base_price + Money::new(dec!(200)),
            Category::Apparel => item.base_price,
        };
        assert_eq!(pricing::effective_price(&item), expected);
    }
}

#[test]
fn test_total_matches_discount_rule() {
    let mut rng = StdRng::seed_from_u64(42);
    for order_id in 0..200 {
        let mut order = Order::new(order_id);
        for id in 0..rng.gen_range(0..6) {
            order.add_item(Arc::new(common::random_item(&mut rng, id)));
        }

        let sum: Money = order.items().iter().map(|i| pricing::effective_price(i)).sum();
        let expected = if sum.value() > DISCOUNT_THRESHOLD {
            sum * DISCOUNT_FACTOR
        } else {
            sum
        };

        assert_eq!(order.subtotal(), sum);
        assert_eq!(order.total(), expected);
        assert_eq!(order.total(), order.total());
    }
}

#[test]
fn test_threshold_boundary() {
    let mut order = Order::new(1);
    order.add_item(Arc::new(Item::new(1, "Exact", Category::Apparel, Money::new(dec!(10000)))));
    assert_eq!(order.total(), Money::new(dec!(10000)));

    // 9800 + 200 surcharge lands exactly on the threshold
    let mut order = Order::new(2);
    order.add_item(Arc::new(Item::new(2, "Radio", Category::Electronics, Money::new(dec!(9800)))));
    assert_eq!(order.total(), Money::new(dec!(10000)));

    order.add_item(Arc::new(Item::new(3, "Sock", Category::Apparel, Money::new(dec!(1)))));
    assert_eq!(order.total(), Money::new(dec!(9500.95)));
}
