mod column;
mod dataset;
mod errors;
mod transaction;

pub use column::Column;
pub use dataset::{CalendarDataset, DateIndexedDataset, SalesDataset};
pub use errors::DatasetError;
pub use transaction::Transaction;
