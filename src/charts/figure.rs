use chrono::NaiveDate;
use plotters::style::RGBColor;

pub const SEABORN_BLUE: RGBColor = RGBColor(31, 119, 180);
pub const SEABORN_ORANGE: RGBColor = RGBColor(255, 127, 14);
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const SALMON: RGBColor = RGBColor(250, 128, 114);
pub const GREEN: RGBColor = RGBColor(0, 128, 0);
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);

/// A fully described chart, ready to be rendered.
///
/// Visualizers build a `Figure` and hand it back; nothing is drawn until the
/// output sink renders it to a file.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Pixel width of the whole image.
    pub width: u32,
    /// Pixel height of the whole image.
    pub height: u32,
    /// Panels laid out left to right.
    pub panels: Vec<Panel>
}

impl Figure {
    pub fn single(width: u32, height: u32, panel: Panel) -> Self {
        Self { width, height, panels: vec![panel] }
    }

    pub fn side_by_side(width: u32, height: u32, panels: Vec<Panel>) -> Self {
        Self { width, height, panels }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub plot: Plot
}

impl Panel {
    pub fn new(title: &str, x_label: &str, y_label: &str, plot: Plot) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            plot
        }
    }
}

#[derive(Debug, Clone)]
pub enum Plot {
    /// Binned counts with an optional smoothed density curve in count units.
    Histogram {
        bins: Vec<HistogramBin>,
        density: Vec<(f64, f64)>,
        color: RGBColor
    },
    /// One or more date-keyed lines sharing an axis.
    TimeSeries {
        series: Vec<Series>
    },
    /// Categorical bars drawn in the given order.
    Bar {
        bars: Vec<Bar>,
        color: RGBColor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineStyle {
    Solid,
    Dashed
}

#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub points: Vec<(NaiveDate, f64)>,
    pub style: LineStyle,
    pub color: RGBColor
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64
}
