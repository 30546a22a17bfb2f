use plotters::style::RGBColor;
use tracing::debug;

use crate::analysis::stats::{density_curve, histogram};
use crate::charts::{Figure, Panel, Plot, PURPLE, SEABORN_BLUE};
use crate::models::{Column, DatasetError};

/// Fixed binning and labelling for one histogram artifact.
#[derive(Debug, Clone, Copy)]
pub struct DistributionChart {
    pub column: Column,
    pub title: &'static str,
    pub bins: usize,
    pub color: RGBColor,
    pub filename: &'static str
}

pub const TOTAL_SALES_DISTRIBUTION: DistributionChart = DistributionChart {
    column: Column::TotalSales,
    title: "Distribution of Total Sales",
    bins: 30,
    color: SEABORN_BLUE,
    filename: "total_sales_distribution"
};

pub const PRICE_DISTRIBUTION: DistributionChart = DistributionChart {
    column: Column::Price,
    title: "Distribution of Product Prices",
    bins: 20,
    color: PURPLE,
    filename: "price_distribution"
};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Builds a histogram with a density overlay for a numeric column.
///
/// # Errors
/// Returns `DatasetError::EmptyColumn` when there are no values to bin.
pub fn distribution_figure(values: &[f64], chart: &DistributionChart) -> Result<Figure, DatasetError> {
    let bins = histogram(values, chart.bins);

    let Some(bin_width) = bins.first().map(|bin| bin.width()) else {
        return Err(DatasetError::EmptyColumn { column: chart.column.name() });
    };

    let density = density_curve(values, bin_width);

    debug!("{}: {} values in {} bins, {} density points", chart.title, values.len(), bins.len(), density.len());

    let plot = Plot::Histogram { bins, density, color: chart.color };

    Ok(Figure::single(WIDTH, HEIGHT, Panel::new(chart.title, chart.column.name(), "Count", plot)))
}
