use super::{ChartViewer, DisplayMode, OutputError, OutputSink};
use crate::charts::{Bar, Figure, Panel, Plot, GREEN};

use std::fs;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use tempfile::tempdir;

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Product")]
    product: &'static str,
    #[serde(rename = "Total Sales")]
    total: f64
}

#[test]
fn test_sink_creates_missing_nested_directory() -> Result<()> {
    let scratch = tempdir()?;
    let directory = scratch.path().join("nested").join("output");

    let sink = OutputSink::create(&directory, ChartViewer::headless())?;

    assert!(directory.is_dir());
    assert_eq!(sink.directory(), directory.as_path());

    Ok(())
}

#[test]
fn test_sink_accepts_existing_directory() -> Result<()> {
    let scratch = tempdir()?;

    OutputSink::create(scratch.path(), ChartViewer::headless())?;
    OutputSink::create(scratch.path(), ChartViewer::headless())?;

    Ok(())
}

#[test]
fn test_sink_reports_offending_path_when_directory_cannot_be_created() -> Result<()> {
    let scratch = tempdir()?;
    let blocker = scratch.path().join("blocker");
    fs::write(&blocker, "not a directory")?;

    let result = OutputSink::create(blocker.join("output"), ChartViewer::headless());

    match result {
        Err(OutputError::CreateDirectory { path, .. }) => assert_eq!(path, blocker.join("output")),
        other => panic!("Expected a directory creation error, got {:?}", other.map(|sink| sink.directory().to_path_buf()))
    }

    Ok(())
}

#[test]
fn test_persist_text_overwrites_previous_artifact() -> Result<()> {
    let scratch = tempdir()?;
    let sink = OutputSink::create(scratch.path(), ChartViewer::headless())?;

    sink.persist_text("first run", "report.txt")?;
    let path = sink.persist_text("second run", "report.txt")?;

    assert_eq!(fs::read_to_string(path)?, "second run");

    Ok(())
}

#[test]
fn test_persist_table_writes_header_and_rows() -> Result<()> {
    let scratch = tempdir()?;
    let sink = OutputSink::create(scratch.path(), ChartViewer::headless())?;

    let path = sink.persist_table(&[Row { product: "lamp", total: 12.5 }, Row { product: "desk", total: 3.0 }], "table.csv")?;
    let content = fs::read_to_string(path)?;

    assert_eq!(content.lines().collect::<Vec<_>>(), vec!["Product,Total Sales", "lamp,12.5", "desk,3.0"]);

    Ok(())
}

#[test]
fn test_persist_image_rejects_empty_figure() -> Result<()> {
    let scratch = tempdir()?;
    let sink = OutputSink::create(scratch.path(), ChartViewer::headless())?;

    let result = sink.persist_image(&Figure::side_by_side(100, 100, vec![]), "empty");

    assert!(matches!(result, Err(OutputError::EmptyFigure { ref filename }) if filename == "empty.png"));
    assert!(!scratch.path().join("empty.png").exists());

    Ok(())
}

#[test]
fn test_persist_image_leaves_no_file_when_render_fails() -> Result<()> {
    let scratch = tempdir()?;
    let sink = OutputSink::create(scratch.path(), ChartViewer::headless())?;
    let drawn = Panel::new("Drawn", "x", "y", Plot::Bar { bars: vec![Bar { label: "a".to_string(), value: 1.0 }], color: GREEN });
    let broken = Panel::new("Broken", "x", "y", Plot::Bar { bars: vec![], color: GREEN });

    let result = sink.persist_image(&Figure::side_by_side(400, 200, vec![drawn, broken]), "broken");

    assert!(matches!(result, Err(OutputError::RenderChart { ref path, .. }) if path.ends_with("broken.png")));
    assert!(!scratch.path().join("broken.png").exists());

    Ok(())
}

#[test]
fn test_display_mode_parsing_and_resolution() {
    assert_eq!(DisplayMode::from_str("headless"), Ok(DisplayMode::Headless));
    assert_eq!(DisplayMode::from_str(" NONE "), Ok(DisplayMode::Headless));
    assert_eq!(DisplayMode::from_str("open"), Ok(DisplayMode::Open));
    assert_eq!(DisplayMode::from_str("auto"), Ok(DisplayMode::Auto));
    assert!(DisplayMode::from_str("hologram").is_err());

    assert!(!DisplayMode::Headless.shows_charts(true));
    assert!(DisplayMode::Open.shows_charts(false));
    assert!(DisplayMode::Auto.shows_charts(true));
    assert!(!DisplayMode::Auto.shows_charts(false));
    assert!(!ChartViewer::headless().is_enabled());
}
