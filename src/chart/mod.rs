//! SVG charts for the overview page.

mod axis;
mod bar;
mod boxplot;
mod scatter;

pub use axis::{Frame, LinearScale, format_tick, nice_ticks};
pub use bar::BarChart;
pub use boxplot::BoxChart;
pub use scatter::{ScatterChart, ScatterSeries};

/// Shorten long category names for axis labels; the full name stays in tooltips.
pub(crate) fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars { return label.to_string() }
    let mut short = label.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    short.push('…');
    short
}
