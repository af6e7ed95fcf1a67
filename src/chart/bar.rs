use std::io::Write;

use anyhow::Result;

use crate::io::svg::{SvgStringWriter, bright, escape_xml};
use super::{axis::{Frame, format_tick, nice_ticks}, truncate_label};

/// Categorical bar chart; each bar gets its own palette color.
#[derive(Clone, Debug)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    /// Rotate category labels a full 90 degrees.
    pub rotate_labels: bool,
    pub frame: Frame,
}

impl BarChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
            rotate_labels: true,
            frame: Frame::new(900.0, 520.0).with_bottom(170.0),
        }
    }

    pub fn with_bars(mut self, bars: Vec<(String, f64)>) -> Self {
        self.bars = bars;
        self
    }

    pub fn render(&self) -> Result<String> {
        let frame = self.frame;
        let max = self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        let (y_domain, y_ticks) = nice_ticks(0.0, max.max(1.0), 5);
        let y_scale = frame.y_scale(y_domain);

        let mut writer = SvgStringWriter::new();
        writer.write_header(frame.width, frame.height)?;
        writer.write_styles()?;
        frame.write_title(&mut writer, &self.title)?;
        frame.write_y_axis(&mut writer, &y_scale, &y_ticks, &self.y_label, true)?;

        let band = frame.plot_width() / self.bars.len().max(1) as f64;
        let base = y_scale.map(0.0);
        for (i, (name, value)) in self.bars.iter().enumerate() {
            let x = frame.plot_left() + band * i as f64;
            let top = y_scale.map(*value);
            writeln!(writer, r#"<rect x="{:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {}</title></rect>"#,
                x + band * 0.1, band * 0.8, (base - top).max(0.0), bright(i), escape_xml(name), format_tick(*value))?;

            let (cx, ly) = (x + band / 2.0, frame.plot_bottom() + 10.0);
            let angle = if self.rotate_labels { -90 } else { 0 };
            let anchor = if self.rotate_labels { "end" } else { "middle" };
            writeln!(writer, r#"<text class="tick" x="{cx:.1}" y="{ly:.1}" text-anchor="{anchor}" dominant-baseline="middle" transform="rotate({angle} {cx:.1} {ly:.1})">{}</text>"#,
                escape_xml(&truncate_label(name, 28)))?;
        }

        writeln!(writer, r#"<line class="axis" x1="{:.1}" y1="{base:.1}" x2="{:.1}" y2="{base:.1}"/>"#, frame.plot_left(), frame.plot_right())?;
        frame.write_x_label(&mut writer, &self.x_label)?;
        writer.write_footer()?;
        writer.into_string()
    }
}
