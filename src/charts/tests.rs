use super::render::{ensure_font, padded_max, FONT_FAMILY};
use super::{render_png, Bar, Figure, HistogramBin, Panel, Plot, GREEN};

use std::fs;

use anyhow::{anyhow, Result};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tempfile::tempdir;

#[test]
fn test_padded_max_adds_headroom() {
    assert!((padded_max([10.0, 50.0, 20.0].into_iter()) - 55.0).abs() < 1e-9);
}

#[test]
fn test_padded_max_never_collapses_to_zero() {
    assert_eq!(padded_max(std::iter::empty()), 1.0);
    assert_eq!(padded_max([0.0, 0.0].into_iter()), 1.0);
}

#[test]
fn test_histogram_bin_width() {
    let bin = HistogramBin { start: 5.0, end: 9.75, count: 3 };

    assert!((bin.width() - 4.75).abs() < 1e-9);
}

#[test]
fn test_side_by_side_figure_keeps_panel_order() {
    let left = Panel::new("Left", "x", "y", Plot::Bar { bars: vec![Bar { label: "a".to_string(), value: 1.0 }], color: GREEN });
    let right = Panel::new("Right", "x", "y", Plot::Bar { bars: vec![], color: GREEN });
    let figure = Figure::side_by_side(1400, 600, vec![left, right]);

    let titles: Vec<&str> = figure.panels.iter().map(|panel| panel.title.as_str()).collect();

    assert_eq!(titles, vec!["Left", "Right"]);
    assert_eq!((figure.width, figure.height), (1400, 600));
}

#[test]
fn test_bundled_font_measures_text() -> Result<()> {
    ensure_font()?;

    let (width, height) = FontDesc::new(FontFamily::Name(FONT_FAMILY), 14.0, FontStyle::Normal)
        .box_size("Total Sales")
        .map_err(|error| anyhow!("{error:?}"))?;

    assert!(width > 0 && height > 0);

    Ok(())
}

#[test]
fn test_render_png_draws_labelled_chart() -> Result<()> {
    let scratch = tempdir()?;
    let path = scratch.path().join("bars.png");
    let bars = vec![Bar { label: "lamp".to_string(), value: 12.5 }, Bar { label: "desk".to_string(), value: 3.0 }];
    let figure = Figure::single(400, 300, Panel::new("Top Products", "Product", "Total Sales", Plot::Bar { bars, color: GREEN }));

    render_png(&figure, &path)?;

    let bytes = fs::read(&path)?;
    assert!(bytes.starts_with(b"\x89PNG"));

    Ok(())
}
