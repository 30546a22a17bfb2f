mod config;
mod errors;
mod pipeline;

pub use config::ReportConfig;
pub use errors::{ConfigError, ReportError};
pub use pipeline::ReportPipeline;
