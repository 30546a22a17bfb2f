mod aggregator;
mod distribution;
mod inspector;
mod stats;
mod top_products;
mod trends;

pub use aggregator::SalesAggregates;
pub use distribution::{distribution_figure, PRICE_DISTRIBUTION, TOTAL_SALES_DISTRIBUTION};
pub use inspector::{duplicates_report, head_report, info_report, missing_values_report, PREVIEW_ROWS};
pub use top_products::{top_products, top_products_figure, top_products_report, TOP_PRODUCT_COUNT};
pub use trends::trends_figure;
