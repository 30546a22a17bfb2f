use std::path::Path;
use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::register_font;

use crate::charts::{Bar, Figure, HistogramBin, LineStyle, Panel, Plot, Series};

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub(crate) const FONT_FAMILY: &str = "sans-serif";

static SANS_SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Registers the bundled typeface under `FONT_FAMILY`; chart text never consults system fonts.
pub(crate) fn ensure_font() -> Result<()> {
    let registered = *FONT_REGISTERED.get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, SANS_SERIF).is_ok());

    if registered {
        Ok(())
    } else {
        Err(anyhow!("Bundled font [{FONT_FAMILY}] could not be loaded"))
    }
}

/// Renders a figure to a PNG file, overwriting anything already at `path`.
pub fn render_png(figure: &Figure, path: &Path) -> Result<()> {
    if figure.panels.is_empty() {
        return Err(anyhow!("Figure has no panels to draw"));
    }

    ensure_font()?;

    let root = BitMapBackend::new(path, (figure.width, figure.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((1, figure.panels.len()));

    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel)?;
    }

    root.present()?;

    Ok(())
}

fn draw_panel(area: &Area<'_>, panel: &Panel) -> Result<()> {
    match &panel.plot {
        Plot::Histogram { bins, density, color } => draw_histogram(area, panel, bins, density, *color),
        Plot::TimeSeries { series } => draw_time_series(area, panel, series),
        Plot::Bar { bars, color } => draw_bars(area, panel, bars, *color)
    }
}

fn draw_histogram(area: &Area<'_>, panel: &Panel, bins: &[HistogramBin], density: &[(f64, f64)], color: RGBColor) -> Result<()> {
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err(anyhow!("Histogram [{}] has no bins", panel.title));
    };

    let x_min = first.start;
    let x_max = if last.end > x_min { last.end } else { x_min + 1.0 };
    let y_max = padded_max(bins.iter().map(|bin| bin.count as f64).chain(density.iter().map(|(_, y)| *y)));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, 26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style((FONT_FAMILY, 14))
        .draw()?;

    chart.draw_series(bins.iter().map(|bin| {
        Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], color.mix(0.55).filled())
    }))?;

    chart.draw_series(bins.iter().map(|bin| {
        Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], ShapeStyle::from(&color).stroke_width(1))
    }))?;

    if !density.is_empty() {
        chart.draw_series(LineSeries::new(density.iter().copied(), ShapeStyle::from(&color).stroke_width(2)))?;
    }

    Ok(())
}

fn draw_time_series(area: &Area<'_>, panel: &Panel, series: &[Series]) -> Result<()> {
    let dates = || series.iter().flat_map(|line| line.points.iter().map(|(date, _)| *date));

    let (Some(origin), Some(end)) = (dates().min(), dates().max()) else {
        return Err(anyhow!("Time series [{}] has no points", panel.title));
    };

    let to_x = |date: NaiveDate| (date - origin).num_days() as f64;
    let x_max = to_x(end).max(1.0);
    let y_max = padded_max(series.iter().flat_map(|line| line.points.iter().map(|(_, value)| *value)));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, 26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style((FONT_FAMILY, 14))
        .x_label_formatter(&|x| date_label(origin, *x))
        .draw()?;

    for line in series {
        let points: Vec<(f64, f64)> = line.points.iter().map(|(date, value)| (to_x(*date), *value)).collect();
        let style = ShapeStyle::from(&line.color).stroke_width(2);
        let color = line.color;

        let annotation = match line.style {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, style))?,
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 6, style))?
        };

        annotation
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&color).stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, 14))
        .draw()?;

    Ok(())
}

fn draw_bars(area: &Area<'_>, panel: &Panel, bars: &[Bar], color: RGBColor) -> Result<()> {
    if bars.is_empty() {
        return Err(anyhow!("Bar chart [{}] has no bars", panel.title));
    }

    let labels: Vec<&str> = bars.iter().map(|bar| bar.label.as_str()).collect();
    let y_max = padded_max(bars.iter().map(|bar| bar.value));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, 26))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style((FONT_FAMILY, 12))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => labels.get(*index).map(|label| label.to_string()).unwrap_or_default(),
            _ => String::new()
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(color.filled())
            .margin(6)
            .data(bars.iter().enumerate().map(|(index, bar)| (index, bar.value)))
    )?;

    Ok(())
}

fn date_label(origin: NaiveDate, offset: f64) -> String {
    if offset < 0.0 {
        return String::new();
    }

    origin.checked_add_days(Days::new(offset as u64))
        .map(|date| date.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// Upper axis bound with 10% headroom; never zero so an all-zero series still gets an axis.
pub(crate) fn padded_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);

    if max > 0.0 { max * 1.1 } else { 1.0 }
}
