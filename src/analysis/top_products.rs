use std::collections::BTreeMap;
use std::fmt::Write;

use crate::charts::{Bar, Figure, Panel, Plot, GREEN};
use crate::models::{DatasetError, Transaction};
use crate::types::{chart_value, Money};

pub const TOP_PRODUCT_COUNT: usize = 5;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product: String,
    pub total: Money
}

/// Ranks products by summed sales, largest first, keeping at most `limit`.
///
/// Equal sums are ordered by product name ascending.
pub fn top_products<'a>(records: impl IntoIterator<Item = &'a Transaction>, limit: usize) -> Vec<ProductSales> {
    let mut sums = BTreeMap::<&str, Money>::new();

    for record in records {
        *sums.entry(record.product.as_str()).or_insert(Money::ZERO) += record.total();
    }

    let mut ranked: Vec<ProductSales> = sums.into_iter()
        .map(|(product, total)| ProductSales { product: product.to_string(), total })
        .collect();

    //NOTE: sort_by is stable, so the name order from the BTreeMap settles ties
    ranked.sort_by(|left, right| right.total.cmp(&left.total));
    ranked.truncate(limit);

    ranked
}

pub fn top_products_report(ranking: &[ProductSales]) -> String {
    let product_width = ranking.iter().map(|entry| entry.product.len()).fold("Product".len(), usize::max);
    let total_width = ranking.iter().map(|entry| entry.total.to_string().len()).fold("Total Sales".len(), usize::max);
    let mut report = format!("{:<product_width$}  {:>total_width$}", "Product", "Total Sales");

    for entry in ranking {
        let _ = write!(report, "\n{:<product_width$}  {:>total_width$}", entry.product, entry.total.to_string());
    }

    report
}

/// # Errors
/// Returns `DatasetError::EmptyDataset` for an empty ranking.
pub fn top_products_figure(ranking: &[ProductSales]) -> Result<Figure, DatasetError> {
    if ranking.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let bars = ranking.iter()
        .map(|entry| Bar { label: entry.product.clone(), value: chart_value(entry.total) })
        .collect();

    Ok(Figure::single(WIDTH, HEIGHT, Panel::new("Top Selling Products", "Product", "Total Sales", Plot::Bar { bars, color: GREEN })))
}
