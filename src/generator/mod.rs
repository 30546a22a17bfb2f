mod record_generator;
#[cfg(test)]
mod tests;
mod words;

pub use record_generator::{RecordGenerator, DEFAULT_RECORD_COUNT};
pub use words::WordSource;
