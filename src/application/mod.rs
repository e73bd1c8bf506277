//! Application layer orchestrating the ordering workflow.
//!
//! `Shop` owns the catalog and the storage ports and drives checkout.
//! `AsyncOrderProcessor` runs the delayed processing step on a `tokio` task
//! whose handle the caller joins before exiting.

pub mod processor;
pub mod shop;
