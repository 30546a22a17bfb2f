use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{line_total, Money, Quantity};

/// A single synthetic sale.
///
/// `total` is always derived from `price` and `quantity` at construction, so
/// the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transaction {
    /// Calendar day of the sale.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Single free-text product token.
    #[serde(rename = "Product")]
    pub product: String,
    /// Unit price, two decimal places.
    #[serde(rename = "Price")]
    pub price: Money,
    /// Units sold.
    #[serde(rename = "Quantity")]
    pub quantity: Quantity,
    /// `price * quantity`, rounded to two decimal places.
    #[serde(rename = "Total Sales")]
    total: Money
}

impl Transaction {
    pub fn new(date: NaiveDate, product: impl Into<String>, price: Money, quantity: Quantity) -> Self {
        Self {
            date,
            product: product.into(),
            price,
            quantity,
            total: line_total(price, quantity)
        }
    }

    pub fn total(&self) -> Money {
        self.total
    }
}
