use std::io;

use thiserror::Error;

use crate::models::DatasetError;
use crate::output::OutputError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: record count must be a positive integer, got {0}")]
    InvalidRecordCount(i64),
    #[error("Configuration error: record count '{0}' is not an integer")]
    UnparsableRecordCount(String),
    #[error("Configuration error: record count '{0}' is out of range")]
    RecordCountOutOfRange(String)
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Could not write report to the console: {0}")]
    Console(#[from] io::Error)
}
