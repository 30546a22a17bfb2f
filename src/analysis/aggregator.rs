use std::collections::BTreeMap;

use crate::charts::{Bar, Figure, Panel, Plot, SALMON, SKY_BLUE};
use crate::models::{CalendarDataset, DatasetError};
use crate::types::{chart_value, Money};

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: Money
}

impl MonthlyTotal {
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTotal {
    pub year: i32,
    pub total: Money
}

/// Read-only summaries grouped by the derived calendar fields.
///
/// Only groups that contain at least one sale appear. Both views are sorted
/// ascending by their key.
#[derive(Debug, Clone, Default)]
pub struct SalesAggregates {
    pub monthly: Vec<MonthlyTotal>,
    pub yearly: Vec<YearlyTotal>
}

impl SalesAggregates {
    pub fn from_dataset(dataset: &CalendarDataset) -> Self {
        let mut monthly = BTreeMap::<(i32, u32), Money>::new();
        let mut yearly = BTreeMap::<i32, Money>::new();

        for record in dataset.records() {
            let total = record.transaction.total();
            *monthly.entry((record.year, record.month)).or_insert(Money::ZERO) += total;
            *yearly.entry(record.year).or_insert(Money::ZERO) += total;
        }

        Self {
            monthly: monthly.into_iter().map(|((year, month), total)| MonthlyTotal { year, month, total }).collect(),
            yearly: yearly.into_iter().map(|(year, total)| YearlyTotal { year, total }).collect()
        }
    }

    pub fn monthly_sum(&self) -> Money {
        self.monthly.iter().map(|entry| entry.total).sum()
    }

    pub fn yearly_sum(&self) -> Money {
        self.yearly.iter().map(|entry| entry.total).sum()
    }

    /// Monthly bars on the left, yearly bars on the right.
    ///
    /// # Errors
    /// Returns `DatasetError::EmptyDataset` when no groups were produced.
    pub fn figure(&self) -> Result<Figure, DatasetError> {
        if self.monthly.is_empty() || self.yearly.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        let monthly_bars = self.monthly.iter()
            .map(|entry| Bar { label: entry.label(), value: chart_value(entry.total) })
            .collect();

        let yearly_bars = self.yearly.iter()
            .map(|entry| Bar { label: entry.year.to_string(), value: chart_value(entry.total) })
            .collect();

        Ok(Figure::side_by_side(WIDTH, HEIGHT, vec![
            Panel::new("Monthly Sales Trends", "Year-Month", "Total Sales", Plot::Bar { bars: monthly_bars, color: SKY_BLUE }),
            Panel::new("Yearly Sales Trends", "Year", "Total Sales", Plot::Bar { bars: yearly_bars, color: SALMON }),
        ]))
    }
}
