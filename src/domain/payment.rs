use super::money::Amount;
use crate::error::PaymentError;
use rust_decimal::Decimal;

/// The person placing and paying for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(id: u32, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Confirmation of an accepted payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub amount: Amount,
    pub method: String,
}

/// Validates payments. Nothing is stored; the receipt is the only record.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Accepts a payment of `amount` via `method`.
    ///
    /// Fails with [`PaymentError::InvalidAmount`] when the amount is zero or
    /// negative. There is no retry; the caller decides what to do next.
    pub fn make_payment(&self, amount: Decimal, method: &str) -> Result<Receipt, PaymentError> {
        let amount = Amount::new(amount)?;
        Ok(Receipt {
            amount,
            method: method.to_string(),
        })
    }
}
