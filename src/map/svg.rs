use std::io::Write;

use anyhow::Result;
use geo::Coord;

use crate::{
    boundary::BoundaryCollection,
    chart::format_tick,
    io::svg::{ColorScale, SvgStringWriter, escape_xml, multipolygon_to_path, viridis},
};
use super::{MapViewport, StateJoin};

/// Fill opacity of colored states.
const MARKER_OPACITY: f64 = 0.7;

/// A choropleth ready to draw: the join result and its color scale.
#[derive(Clone, Debug)]
pub struct Choropleth {
    pub title: String,
    pub join: StateJoin,
    /// `None` when no state has a value.
    pub scale: Option<ColorScale>,
}

impl Choropleth {
    /// Join `state_values` onto `boundaries`, coloring over `domain`.
    ///
    /// `domain` is the selected column's observed `(min, max)`; values outside
    /// it take the end colors of the ramp.
    pub fn new(
        title: impl Into<String>,
        state_values: &[(String, f64)],
        domain: Option<(f64, f64)>,
        boundaries: &BoundaryCollection,
    ) -> Self {
        let scale = domain.map(|(min, max)| ColorScale::new(min, max));
        Self { title: title.into(), join: StateJoin::new(state_values, boundaries), scale }
    }

    /// CSS color for each boundary feature, `None` for uncolored ones.
    pub fn fill_colors(&self) -> Vec<Option<String>> {
        self.join.regions.iter()
            .map(|region| Some(self.scale?.color(region.value?).to_string()))
            .collect()
    }

    /// Draw the boundaries, colored where a value joined, plus a colorbar.
    pub fn to_svg(&self, boundaries: &BoundaryCollection, viewport: &MapViewport) -> Result<String> {
        let colorbar_width = 90.0;
        let width = viewport.width + colorbar_width;
        let viewport = *viewport;
        let project = move |coord: &Coord<f64>| viewport.project(coord);

        let mut writer = SvgStringWriter::new();
        writer.write_header(width, viewport.height)?;
        writer.write_styles()?;

        let fills = self.fill_colors();
        for ((boundary, region), fill) in boundaries.iter().zip(&self.join.regions).zip(&fills) {
            let path = multipolygon_to_path(&boundary.shape, &project);
            match (fill, region.value) {
                (Some(color), Some(value)) => writeln!(writer,
                    r#"<path class="state" d="{path}" fill="{color}" fill-opacity="{MARKER_OPACITY}" data-state="{name}"><title>{name}: {value}</title></path>"#,
                    name = escape_xml(&region.name),
                    value = format_tick(value),
                )?,
                _ => writeln!(writer,
                    r#"<path class="state-empty" d="{path}" data-state="{name}"><title>{name}: no data</title></path>"#,
                    name = escape_xml(&region.name),
                )?,
            }
        }

        if let Some(scale) = self.scale {
            write_colorbar(&mut writer, &scale, viewport.width + 20.0, 40.0, viewport.height - 80.0)?;
        }

        writer.write_footer()?;
        writer.into_string()
    }
}

/// Vertical gradient bar from the scale minimum (bottom) to maximum (top).
fn write_colorbar(writer: &mut impl Write, scale: &ColorScale, x: f64, y: f64, height: f64) -> Result<()> {
    writeln!(writer, r#"<linearGradient id="colorbar" x1="0" y1="1" x2="0" y2="0">"#)?;
    for step in 0..=10 {
        let t = step as f64 / 10.0;
        writeln!(writer, r#"<stop offset="{t:.1}" stop-color="{}"/>"#, viridis(t))?;
    }
    writeln!(writer, "</linearGradient>")?;
    writeln!(writer, r#"<rect x="{x:.1}" y="{y:.1}" width="16" height="{height:.1}" fill="url(#colorbar)" fill-opacity="{MARKER_OPACITY}"/>"#)?;
    for step in 0..=4 {
        let t = step as f64 / 4.0;
        let value = scale.min + (scale.max - scale.min) * t;
        let ty = y + height * (1.0 - t);
        writeln!(writer, r#"<text class="tick" x="{:.1}" y="{:.1}">{}</text>"#, x + 22.0, ty + 3.0, format_tick(value))?;
    }
    Ok(())
}
