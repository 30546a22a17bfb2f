mod figure;
mod render;
#[cfg(test)]
mod tests;

pub use figure::{Bar, Figure, HistogramBin, LineStyle, Panel, Plot, Series, GREEN, PURPLE, SALMON, SEABORN_BLUE, SEABORN_ORANGE, SKY_BLUE};
pub use render::render_png;
