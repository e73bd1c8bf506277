use rust_decimal::Decimal;
use thiserror::Error;

/// Raised when a payment cannot be accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(Decimal),
}

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid item {id}: {reason}")]
    InvalidItem { id: u32, reason: String },
    #[error("Order processing failed: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
