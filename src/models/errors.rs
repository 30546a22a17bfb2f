use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset error: no records to analyse")]
    EmptyDataset,
    #[error("Dataset error: column [{column}] is not numeric")]
    NonNumericColumn {
        column: &'static str
    },
    #[error("Dataset error: column [{column}] has no values")]
    EmptyColumn {
        column: &'static str
    }
}
