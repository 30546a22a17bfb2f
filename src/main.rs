mod analysis;
mod charts;
mod engine;
mod generator;
mod models;
mod output;
mod types;

use std::io::stderr;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{ReportConfig, ReportPipeline};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: sales-report [record_count:optional] [log_level:optional]");
        eprintln!("Defaults: 1000 records, log level info. Artifacts are written to ./output");
        eprintln!("Set SALES_REPORT_DISPLAY=headless to skip opening charts in a viewer");
        exit(1);
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::INFO);

    setup_logging(log_level);

    let config = ReportConfig::from_args(args.get(1).map(String::as_str))
        .inspect_err(|error| error!("{error}"))?;

    let output_dir = config.output_dir.clone();
    let pipeline = ReportPipeline::new(config);

    let timer = Instant::now();
    let summary = pipeline.run()
        .inspect_err(|error| error!("Report aborted: {error}"))?;
    let duration = timer.elapsed();

    info!(
        "Analysed {} records, wrote {} artifacts to {} in {duration:?}",
        summary.record_count,
        summary.artifacts.len(),
        output_dir.display()
    );

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports are printed to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
