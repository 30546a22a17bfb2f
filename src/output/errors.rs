use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Could not create output directory [{path}]: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write artifact [{path}]: {source}")]
    WriteFile {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write table [{path}]: {source}")]
    WriteTable {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Could not render chart [{path}]: {message}")]
    RenderChart {
        path: PathBuf,
        message: String
    },
    #[error("Chart [{filename}] has nothing to draw")]
    EmptyFigure {
        filename: String
    }
}
