use std::env;
use std::num::{IntErrorKind, NonZeroUsize, ParseIntError};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::engine::ConfigError;
use crate::generator::DEFAULT_RECORD_COUNT;
use crate::output::DisplayMode;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DISPLAY_ENV_VAR: &str = "SALES_REPORT_DISPLAY";

/// Everything a single report run needs to know up front.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub record_count: NonZeroUsize,
    /// Created relative to the working directory when relative.
    pub output_dir: PathBuf,
    pub display: DisplayMode,
    /// Seeds price, quantity and date draws. `None` draws from OS entropy.
    pub numeric_seed: Option<u64>
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            record_count: NonZeroUsize::new(DEFAULT_RECORD_COUNT).unwrap_or(NonZeroUsize::MIN),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            display: DisplayMode::Auto,
            numeric_seed: None
        }
    }
}

impl ReportConfig {
    /// Builds the run configuration from the optional record-count argument and the environment.
    ///
    /// # Errors
    /// Returns `ConfigError` when the record count is not a positive integer.
    pub fn from_args(record_count: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self {
            display: display_from_env(),
            ..Self::default()
        };

        if let Some(value) = record_count {
            config.record_count = parse_record_count(value)?;
        }

        Ok(config)
    }
}

pub fn parse_record_count(value: &str) -> Result<NonZeroUsize, ConfigError> {
    let value = value.trim();

    //NOTE: Parsing as signed first so a negative count is reported as such rather than as garbage
    let count: i64 = value.parse().map_err(|error: ParseIntError| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConfigError::RecordCountOutOfRange(value.to_string()),
        _ => ConfigError::UnparsableRecordCount(value.to_string())
    })?;

    usize::try_from(count).ok()
        .and_then(NonZeroUsize::new)
        .ok_or(ConfigError::InvalidRecordCount(count))
}

fn display_from_env() -> DisplayMode {
    let Ok(value) = env::var(DISPLAY_ENV_VAR) else {
        return DisplayMode::Auto;
    };

    DisplayMode::from_str(&value).unwrap_or_else(|error| {
        warn!("{error} in {DISPLAY_ENV_VAR}, charts will open only when a display is detected");
        DisplayMode::Auto
    })
}
