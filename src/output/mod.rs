mod errors;
mod output_sink;
#[cfg(test)]
mod tests;
mod viewer;

pub use errors::OutputError;
pub use output_sink::OutputSink;
pub use viewer::{ChartViewer, DisplayMode};
