use std::io::{stdout, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::analysis::{
    distribution_figure, duplicates_report, head_report, info_report, missing_values_report, top_products,
    top_products_figure, top_products_report, trends_figure, SalesAggregates, PREVIEW_ROWS, PRICE_DISTRIBUTION,
    TOP_PRODUCT_COUNT, TOTAL_SALES_DISTRIBUTION
};
use crate::engine::{ReportConfig, ReportError};
use crate::generator::RecordGenerator;
use crate::models::Column;
use crate::output::{ChartViewer, OutputSink};

pub const DATASET_FILE: &str = "sales_data.csv";
pub const DATA_INFO_FILE: &str = "data_info.txt";
pub const DATA_HEAD_FILE: &str = "data_head.txt";
pub const DUPLICATES_FILE: &str = "duplicate_entries.txt";
pub const MISSING_VALUES_FILE: &str = "missing_values.txt";
pub const TOP_PRODUCTS_FILE: &str = "top_selling_products.txt";
pub const SALES_TRENDS_CHART: &str = "sales_trends_over_time";
pub const AGGREGATES_CHART: &str = "aggregated_sales_trends";
pub const TOP_PRODUCTS_CHART: &str = "top_selling_products";

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub record_count: usize,
    pub artifacts: Vec<PathBuf>
}

/// Runs the whole report once, end to end.
///
/// Stages run in a fixed order and the first error aborts the run; artifacts
/// written before the failure are left in place.
pub struct ReportPipeline {
    config: ReportConfig,
    today: NaiveDate
}

impl ReportPipeline {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            today: Local::now().date_naive()
        }
    }

    /// Pins the end of the generated date window.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn run(&self) -> Result<ReportSummary, ReportError> {
        let sink = OutputSink::create(&self.config.output_dir, ChartViewer::new(self.config.display))?;
        let mut artifacts = Vec::new();

        let mut generator = RecordGenerator::from_seed(self.config.numeric_seed, self.today);
        let dataset = generator.generate(self.config.record_count);
        info!("Generated {} sales records", dataset.len());
        artifacts.push(sink.persist_table(dataset.records(), DATASET_FILE)?);

        info!("Inspecting dataset");
        artifacts.push(publish(&sink, &info_report(dataset.records()), DATA_INFO_FILE)?);
        artifacts.push(publish(&sink, &head_report(dataset.records(), PREVIEW_ROWS), DATA_HEAD_FILE)?);

        info!("Checking duplicates and missing values");
        artifacts.push(publish(&sink, &duplicates_report(dataset.records()), DUPLICATES_FILE)?);
        artifacts.push(publish(&sink, &missing_values_report(dataset.records()), MISSING_VALUES_FILE)?);

        info!("Visualizing total sales distribution");
        let total_sales = dataset.numeric_column(Column::TotalSales)?;
        let figure = distribution_figure(&total_sales, &TOTAL_SALES_DISTRIBUTION)?;
        artifacts.push(sink.persist_image(&figure, TOTAL_SALES_DISTRIBUTION.filename)?);

        info!("Visualizing sales trends over time");
        let indexed = dataset.index_by_date();
        artifacts.push(sink.persist_image(&trends_figure(&indexed)?, SALES_TRENDS_CHART)?);

        info!("Deriving month and year fields");
        let calendar = indexed.derive_calendar_fields();

        info!("Aggregating sales by month and year");
        let aggregates = SalesAggregates::from_dataset(&calendar);
        debug!(
            "{} months totalling {}, {} years totalling {}",
            aggregates.monthly.len(),
            aggregates.monthly_sum(),
            aggregates.yearly.len(),
            aggregates.yearly_sum()
        );
        artifacts.push(sink.persist_image(&aggregates.figure()?, AGGREGATES_CHART)?);

        info!("Ranking top selling products");
        let ranking = top_products(calendar.transactions(), TOP_PRODUCT_COUNT);
        let ranking_text = top_products_report(&ranking);
        print_console(&format!("Top Selling Products:\n{ranking_text}"))?;
        artifacts.push(sink.persist_text(&ranking_text, TOP_PRODUCTS_FILE)?);
        artifacts.push(sink.persist_image(&top_products_figure(&ranking)?, TOP_PRODUCTS_CHART)?);

        info!("Visualizing price distribution");
        let prices = calendar.numeric_column(Column::Price)?;
        let figure = distribution_figure(&prices, &PRICE_DISTRIBUTION)?;
        artifacts.push(sink.persist_image(&figure, PRICE_DISTRIBUTION.filename)?);

        Ok(ReportSummary {
            record_count: calendar.len(),
            artifacts
        })
    }
}

/// Prints a report to stdout and persists the same text.
fn publish(sink: &OutputSink, text: &str, filename: &str) -> Result<PathBuf, ReportError> {
    print_console(text)?;
    Ok(sink.persist_text(text, filename)?)
}

fn print_console(text: &str) -> Result<(), ReportError> {
    let mut output = stdout().lock();

    writeln!(output, "{text}")?;
    output.flush()?;

    Ok(())
}
