//! Linear scales, tick placement and the shared plot frame.

use std::io::Write;

use anyhow::Result;

use crate::io::svg::escape_xml;

/// Maps a data interval onto a pixel interval.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self { Self { domain, range } }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        let t = if span != 0.0 { (value - self.domain.0) / span } else { 0.5 };
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Tick step on a 1/2/5 × 10^k ladder giving roughly `target` intervals.
fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 { 1.0 } else if residual <= 2.0 { 2.0 } else if residual <= 5.0 { 5.0 } else { 10.0 };
    nice * magnitude
}

/// Widen `(min, max)` to whole tick steps and list the ticks.
/// A zero-width extent is padded to one unit either side.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> ((f64, f64), Vec<f64>) {
    let (min, max) = if max > min { (min, max) } else { (min - 1.0, max + 1.0) };
    let step = nice_step(max - min, target);
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    let count = ((hi - lo) / step).round() as usize;
    let ticks = (0..=count).map(|i| lo + i as f64 * step).collect();
    ((lo, hi), ticks)
}

/// Compact tick label: 1500 -> "1.5k", 2000000 -> "2M".
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "k")
    } else {
        (value, "")
    };
    let text = format!("{scaled:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    let text = if text == "-0" { "0" } else { text };
    format!("{text}{suffix}")
}

/// Outer size and margins of a chart; the plot area is what remains.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, left: 70.0, right: 20.0, top: 40.0, bottom: 55.0 }
    }

    pub fn with_bottom(self, bottom: f64) -> Self { Self { bottom, ..self } }

    pub fn plot_left(&self) -> f64 { self.left }
    pub fn plot_right(&self) -> f64 { self.width - self.right }
    pub fn plot_top(&self) -> f64 { self.top }
    pub fn plot_bottom(&self) -> f64 { self.height - self.bottom }
    pub fn plot_width(&self) -> f64 { self.plot_right() - self.plot_left() }

    /// Y scale for the plot area (values grow upward).
    pub fn y_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.plot_bottom(), self.plot_top()))
    }

    pub fn x_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.plot_left(), self.plot_right()))
    }

    /// Centered chart title.
    pub fn write_title(&self, writer: &mut impl Write, title: &str) -> Result<()> {
        writeln!(writer, r#"<text class="title" x="{:.1}" y="24" text-anchor="middle">{}</text>"#, self.width / 2.0, escape_xml(title))?;
        Ok(())
    }

    /// Y axis line, ticks, optional grid and rotated label.
    pub fn write_y_axis(&self, writer: &mut impl Write, scale: &LinearScale, ticks: &[f64], label: &str, grid: bool) -> Result<()> {
        let (x0, x1) = (self.plot_left(), self.plot_right());
        for &tick in ticks {
            let y = scale.map(tick);
            if grid {
                writeln!(writer, r#"<line class="grid" x1="{x0:.1}" y1="{y:.1}" x2="{x1:.1}" y2="{y:.1}"/>"#)?;
            }
            writeln!(writer, r#"<text class="tick" x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#, x0 - 6.0, y + 3.0, format_tick(tick))?;
        }
        writeln!(writer, r#"<line class="axis" x1="{x0:.1}" y1="{:.1}" x2="{x0:.1}" y2="{:.1}"/>"#, self.plot_top(), self.plot_bottom())?;
        let (lx, ly) = (16.0, (self.plot_top() + self.plot_bottom()) / 2.0);
        writeln!(writer, r#"<text class="label" x="{lx:.1}" y="{ly:.1}" text-anchor="middle" transform="rotate(-90 {lx:.1} {ly:.1})">{}</text>"#, escape_xml(label))?;
        Ok(())
    }

    /// X axis line, numeric ticks, optional grid and label.
    pub fn write_x_axis(&self, writer: &mut impl Write, scale: &LinearScale, ticks: &[f64], label: &str, grid: bool) -> Result<()> {
        let (y0, y1) = (self.plot_top(), self.plot_bottom());
        for &tick in ticks {
            let x = scale.map(tick);
            if grid {
                writeln!(writer, r#"<line class="grid" x1="{x:.1}" y1="{y0:.1}" x2="{x:.1}" y2="{y1:.1}"/>"#)?;
            }
            writeln!(writer, r#"<text class="tick" x="{x:.1}" y="{:.1}" text-anchor="middle">{}</text>"#, y1 + 16.0, format_tick(tick))?;
        }
        writeln!(writer, r#"<line class="axis" x1="{:.1}" y1="{y1:.1}" x2="{:.1}" y2="{y1:.1}"/>"#, self.plot_left(), self.plot_right())?;
        self.write_x_label(writer, label)
    }

    /// X axis title below the plot area.
    pub fn write_x_label(&self, writer: &mut impl Write, label: &str) -> Result<()> {
        writeln!(writer, r#"<text class="label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            (self.plot_left() + self.plot_right()) / 2.0, self.height - 10.0, escape_xml(label))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_land_on_round_numbers() {
        let ((lo, hi), ticks) = nice_ticks(3.0, 97.0, 5);
        assert_eq!((lo, hi), (0.0, 100.0));
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn zero_width_extent_is_padded() {
        let ((lo, hi), ticks) = nice_ticks(5.0, 5.0, 4);
        assert!(lo < 5.0 && hi > 5.0);
        assert!(ticks.len() >= 2);
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(250.0), "250");
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(2_000_000.0), "2M");
        assert_eq!(format_tick(-0.5), "-0.5");
    }

    #[test]
    fn y_scale_grows_upward() {
        let frame = Frame::new(400.0, 300.0);
        let scale = frame.y_scale((0.0, 10.0));
        assert!(scale.map(10.0) < scale.map(0.0));
        assert_eq!(scale.map(0.0), frame.plot_bottom());
    }
}
