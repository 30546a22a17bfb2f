use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::charts::{Figure, LineStyle, Panel, Plot, Series, SEABORN_BLUE, SEABORN_ORANGE};
use crate::models::{DatasetError, DateIndexedDataset};
use crate::types::{chart_value, Money};

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// A calendar bucket produced by resampling, labelled by its last day.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotal {
    pub period_end: NaiveDate,
    pub total: Money
}

/// Sums sales into every calendar month from the first to the last record.
///
/// Months without sales are kept with a zero total so the line has no gaps.
pub fn resample_monthly(dataset: &DateIndexedDataset) -> Vec<PeriodTotal> {
    let sums = period_sums(dataset, |date| (date.year(), date.month()));

    let (Some(first), Some(last)) = (dataset.first_date(), dataset.last_date()) else {
        return Vec::new();
    };

    let mut periods = Vec::new();
    let (mut year, mut month) = (first.year(), first.month());

    while (year, month) <= (last.year(), last.month()) {
        if let Some(period_end) = month_end(year, month) {
            periods.push(PeriodTotal {
                period_end,
                total: sums.get(&(year, month)).copied().unwrap_or(Money::ZERO)
            });
        }

        (year, month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    }

    periods
}

/// Sums sales into every calendar year from the first to the last record.
pub fn resample_yearly(dataset: &DateIndexedDataset) -> Vec<PeriodTotal> {
    let sums = period_sums(dataset, |date| date.year());

    let (Some(first), Some(last)) = (dataset.first_date(), dataset.last_date()) else {
        return Vec::new();
    };

    (first.year()..=last.year())
        .filter_map(|year| {
            Some(PeriodTotal {
                period_end: NaiveDate::from_ymd_opt(year, 12, 31)?,
                total: sums.get(&year).copied().unwrap_or(Money::ZERO)
            })
        })
        .collect()
}

/// Overlays the monthly (solid) and yearly (dashed) resampled totals.
///
/// # Errors
/// Returns `DatasetError::EmptyDataset` when there is nothing to resample.
pub fn trends_figure(dataset: &DateIndexedDataset) -> Result<Figure, DatasetError> {
    let monthly = resample_monthly(dataset);
    let yearly = resample_yearly(dataset);

    if monthly.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    debug!("Resampled {} records into {} months and {} years", dataset.len(), monthly.len(), yearly.len());

    let series = vec![
        to_series("Monthly Sales", &monthly, LineStyle::Solid, SEABORN_BLUE),
        to_series("Yearly Sales", &yearly, LineStyle::Dashed, SEABORN_ORANGE),
    ];

    Ok(Figure::single(WIDTH, HEIGHT, Panel::new("Sales Trends Over Time", "Date", "Total Sales", Plot::TimeSeries { series })))
}

fn to_series(label: &str, periods: &[PeriodTotal], style: LineStyle, color: plotters::style::RGBColor) -> Series {
    Series {
        label: label.to_string(),
        points: periods.iter().map(|period| (period.period_end, chart_value(period.total))).collect(),
        style,
        color
    }
}

fn period_sums<K: Ord>(dataset: &DateIndexedDataset, key: impl Fn(&NaiveDate) -> K) -> BTreeMap<K, Money> {
    let mut sums = BTreeMap::new();

    for record in dataset.records() {
        *sums.entry(key(&record.date)).or_insert(Money::ZERO) += record.total();
    }

    sums
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
