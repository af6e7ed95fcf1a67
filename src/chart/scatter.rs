use std::io::Write;

use anyhow::Result;

use crate::{data::extent, io::svg::{Rgb, SvgStringWriter, escape_xml}};
use super::axis::{Frame, nice_ticks};

/// One named set of points.
#[derive(Clone, Debug)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub color: Rgb,
    pub opacity: f64,
}

impl ScatterSeries {
    /// Pair up two columns, dropping rows where either side is null.
    pub fn from_columns(name: impl Into<String>, xs: &[Option<f64>], ys: &[Option<f64>], color: Rgb, opacity: f64) -> Self {
        let points = xs.iter().zip(ys)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
            .collect();
        Self { name: name.into(), points, color, opacity }
    }
}

#[derive(Clone, Debug)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
    pub legend: bool,
    pub grid: bool,
    pub frame: Frame,
}

impl ScatterChart {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
            legend: false,
            grid: true,
            frame: Frame::new(720.0, 450.0),
        }
    }

    pub fn with_series(mut self, series: ScatterSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn render(&self) -> Result<String> {
        let frame = self.frame;
        let points = || self.series.iter().flat_map(|s| s.points.iter().copied());
        let (x_min, x_max) = extent(points().map(|p| p.0)).unwrap_or((0.0, 1.0));
        let (y_min, y_max) = extent(points().map(|p| p.1)).unwrap_or((0.0, 1.0));
        let (x_domain, x_ticks) = nice_ticks(x_min, x_max, 6);
        let (y_domain, y_ticks) = nice_ticks(y_min, y_max, 5);
        let (x_scale, y_scale) = (frame.x_scale(x_domain), frame.y_scale(y_domain));

        let mut writer = SvgStringWriter::new();
        writer.write_header(frame.width, frame.height)?;
        writer.write_styles()?;
        frame.write_title(&mut writer, &self.title)?;
        frame.write_y_axis(&mut writer, &y_scale, &y_ticks, &self.y_label, self.grid)?;
        frame.write_x_axis(&mut writer, &x_scale, &x_ticks, &self.x_label, self.grid)?;

        for series in &self.series {
            writeln!(writer, r#"<g fill="{}" fill-opacity="{:.2}">"#, series.color, series.opacity)?;
            for &(x, y) in &series.points {
                writeln!(writer, r#"<circle cx="{:.1}" cy="{:.1}" r="3"/>"#, x_scale.map(x), y_scale.map(y))?;
            }
            writeln!(writer, "</g>")?;
        }

        if self.legend {
            let x = frame.plot_right() - 110.0;
            for (i, series) in self.series.iter().enumerate() {
                let y = frame.plot_top() + 14.0 + i as f64 * 18.0;
                writeln!(writer, r#"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{}" fill-opacity="{:.2}"/>"#, x, y - 4.0, series.color, series.opacity)?;
                writeln!(writer, r#"<text class="label" x="{:.1}" y="{y:.1}">{}</text>"#, x + 10.0, escape_xml(&series.name))?;
            }
        }

        if self.point_count() == 0 {
            writeln!(writer, r#"<text class="label" x="{:.1}" y="{:.1}" text-anchor="middle">No data</text>"#,
                (frame.plot_left() + frame.plot_right()) / 2.0, (frame.plot_top() + frame.plot_bottom()) / 2.0)?;
        }

        writer.write_footer()?;
        writer.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::svg::series;

    #[test]
    fn null_rows_are_dropped() {
        let s = ScatterSeries::from_columns("Rural", &[Some(1.0), None, Some(3.0)], &[Some(2.0), Some(5.0), None], series(0), 1.0);
        assert_eq!(s.points, vec![(1.0, 2.0)]);
    }

    #[test]
    fn one_circle_per_point_and_legend_entries() {
        let chart = ScatterChart::new("t", "x", "y")
            .with_series(ScatterSeries { name: "Rural".into(), points: vec![(1.0, 2.0), (2.0, 3.0)], color: series(0), opacity: 0.5 })
            .with_series(ScatterSeries { name: "Urban".into(), points: vec![(4.0, 1.0)], color: series(1), opacity: 0.5 })
            .with_legend(true);
        let svg = chart.render().unwrap();
        assert_eq!(svg.matches(r#"r="3""#).count(), 3);
        assert!(svg.contains(">Rural</text>") && svg.contains(">Urban</text>"));
        assert!(svg.contains(r#"fill-opacity="0.50""#));
    }

    #[test]
    fn empty_chart_still_renders() {
        let svg = ScatterChart::new("t", "x", "y").render().unwrap();
        assert!(svg.contains("No data"));
    }
}
