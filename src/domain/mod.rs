//! Domain model: catalog items, orders, pricing rules and payments.

pub mod catalog;
pub mod item;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod pricing;
