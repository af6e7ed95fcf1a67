use std::io::Write;

use anyhow::Result;

use crate::{data::BoxStats, io::svg::{Rgb, SvgStringWriter, escape_xml}};
use super::{axis::{Frame, nice_ticks}, truncate_label};

/// Box-and-whisker chart, one box per category.
#[derive(Clone, Debug)]
pub struct BoxChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<(String, BoxStats)>,
    pub color: Rgb,
    pub frame: Frame,
}

impl BoxChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>, color: Rgb) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            groups: Vec::new(),
            color,
            frame: Frame::new(900.0, 560.0).with_bottom(170.0),
        }
    }

    pub fn with_group(mut self, name: impl Into<String>, stats: BoxStats) -> Self {
        self.groups.push((name.into(), stats));
        self
    }

    pub fn render(&self) -> Result<String> {
        let frame = self.frame;
        let (lo, hi) = self.groups.iter()
            .map(|(_, stats)| stats.span())
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))
            .unwrap_or((0.0, 1.0));
        let (y_domain, y_ticks) = nice_ticks(lo, hi, 5);
        let y_scale = frame.y_scale(y_domain);

        let mut writer = SvgStringWriter::new();
        writer.write_header(frame.width, frame.height)?;
        writer.write_styles()?;
        frame.write_title(&mut writer, &self.title)?;
        frame.write_y_axis(&mut writer, &y_scale, &y_ticks, &self.y_label, true)?;
        writeln!(writer, r#"<line class="axis" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
            frame.plot_left(), frame.plot_bottom(), frame.plot_right(), frame.plot_bottom())?;

        let band = frame.plot_width() / self.groups.len().max(1) as f64;
        let half = (band * 0.3).min(40.0);
        for (i, (name, stats)) in self.groups.iter().enumerate() {
            let cx = frame.plot_left() + band * (i as f64 + 0.5);
            let (q1, median, q3) = (y_scale.map(stats.q1), y_scale.map(stats.median), y_scale.map(stats.q3));
            let (whisker_lo, whisker_hi) = (y_scale.map(stats.lower_whisker), y_scale.map(stats.upper_whisker));

            writeln!(writer, r#"<g stroke="{color}" fill="{color}">"#, color = self.color)?;
            writeln!(writer, "<title>{} (n={}, median {})</title>", escape_xml(name), stats.count, stats.median)?;
            writeln!(writer, r#"<line x1="{cx:.1}" y1="{whisker_lo:.1}" x2="{cx:.1}" y2="{q1:.1}"/>"#)?;
            writeln!(writer, r#"<line x1="{cx:.1}" y1="{q3:.1}" x2="{cx:.1}" y2="{whisker_hi:.1}"/>"#)?;
            for y in [whisker_lo, whisker_hi] {
                writeln!(writer, r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}"/>"#, cx - half / 2.0, cx + half / 2.0)?;
            }
            writeln!(writer, r#"<rect x="{:.1}" y="{q3:.1}" width="{:.1}" height="{:.1}" fill-opacity="0.5"/>"#,
                cx - half, 2.0 * half, (q1 - q3).max(0.5))?;
            writeln!(writer, r#"<line x1="{:.1}" y1="{median:.1}" x2="{:.1}" y2="{median:.1}" stroke-width="2"/>"#, cx - half, cx + half)?;
            for &outlier in &stats.outliers {
                writeln!(writer, r#"<circle cx="{cx:.1}" cy="{:.1}" r="2.5" fill-opacity="0.4"/>"#, y_scale.map(outlier))?;
            }
            writeln!(writer, "</g>")?;

            let ly = frame.plot_bottom() + 12.0;
            writeln!(writer, r#"<text class="tick" x="{cx:.1}" y="{ly:.1}" text-anchor="end" transform="rotate(-35 {cx:.1} {ly:.1})">{}</text>"#,
                escape_xml(&truncate_label(name, 32)))?;
        }

        frame.write_x_label(&mut writer, &self.x_label)?;
        writer.write_footer()?;
        writer.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::svg::series;

    #[test]
    fn one_box_per_group_with_outliers() {
        let chart = BoxChart::new("t", "NIC Name", "Total", series(0))
            .with_group("Retail", BoxStats::from_values([1.0, 2.0, 3.0, 4.0, 100.0]).unwrap())
            .with_group("Mining & quarrying", BoxStats::from_values([5.0, 6.0]).unwrap());
        let svg = chart.render().unwrap();
        assert_eq!(svg.matches(r#"fill-opacity="0.5""#).count(), 2);
        assert_eq!(svg.matches(r#"r="2.5""#).count(), 1);
        assert!(svg.contains("Mining &amp; quarrying"));
    }
}
