use crate::models::Transaction;
use crate::types::chart_value;

/// The fixed set of columns every dataset exposes, in report order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Column {
    Date,
    Product,
    Price,
    Quantity,
    TotalSales
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Date,
        Column::Product,
        Column::Price,
        Column::Quantity,
        Column::TotalSales
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Product => "Product",
            Column::Price => "Price",
            Column::Quantity => "Quantity",
            Column::TotalSales => "Total Sales"
        }
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Product => "string",
            Column::Price => "decimal(2)",
            Column::Quantity => "uint32",
            Column::TotalSales => "decimal(2)"
        }
    }

    /// Only the product token can be absent; every other field is required by construction.
    pub fn is_missing(&self, transaction: &Transaction) -> bool {
        match self {
            Column::Product => transaction.product.trim().is_empty(),
            _ => false
        }
    }

    pub fn render(&self, transaction: &Transaction) -> String {
        match self {
            Column::Date => transaction.date.to_string(),
            Column::Product => transaction.product.clone(),
            Column::Price => transaction.price.to_string(),
            Column::Quantity => transaction.quantity.to_string(),
            Column::TotalSales => transaction.total().to_string()
        }
    }

    /// Returns `None` for non-numeric columns.
    pub fn numeric_value(&self, transaction: &Transaction) -> Option<f64> {
        match self {
            Column::Price => Some(chart_value(transaction.price)),
            Column::Quantity => Some(f64::from(transaction.quantity)),
            Column::TotalSales => Some(chart_value(transaction.total())),
            Column::Date | Column::Product => None
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Price | Column::Quantity | Column::TotalSales)
    }
}
