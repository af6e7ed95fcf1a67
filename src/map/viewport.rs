use geo::Coord;

/// Geographic center of India.
pub const INDIA_CENTER: (f64, f64) = (20.5937, 78.9629);

/// Zoom level that frames the whole country.
pub const NATIONAL_ZOOM: f64 = 3.0;

/// Tile edge in pixels at zoom 0 (vector-tile convention).
const TILE_SIZE: f64 = 512.0;

/// Fixed Web Mercator view: a center, a zoom level and a pixel size.
#[derive(Clone, Copy, Debug)]
pub struct MapViewport {
    /// Center as (lat, lon) in degrees.
    pub center: (f64, f64),
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self { center: INDIA_CENTER, zoom: NATIONAL_ZOOM, width: 720.0, height: 560.0 }
    }
}

impl MapViewport {
    pub fn with_zoom(self, zoom: f64) -> Self { Self { zoom, ..self } }

    /// World pixel size at this zoom.
    fn world_size(&self) -> f64 { TILE_SIZE * 2f64.powf(self.zoom) }

    /// Project lon/lat to world pixels (origin top-left, Y down).
    fn world_xy(&self, lon: f64, lat: f64) -> (f64, f64) {
        let size = self.world_size();
        let lat = lat.clamp(-85.051_128_78, 85.051_128_78).to_radians();
        let x = (lon + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
        (x, y)
    }

    /// Project lon/lat to viewport pixels, the center landing mid-canvas.
    pub fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let (cx, cy) = self.world_xy(self.center.1, self.center.0);
        let (x, y) = self.world_xy(coord.x, coord.y);
        (x - cx + self.width / 2.0, y - cy + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_projects_to_canvas_middle() {
        let viewport = MapViewport::default();
        let (x, y) = viewport.project(&Coord { x: INDIA_CENTER.1, y: INDIA_CENTER.0 });
        assert!((x - viewport.width / 2.0).abs() < 1e-9);
        assert!((y - viewport.height / 2.0).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let viewport = MapViewport::default();
        let (x0, y0) = viewport.project(&Coord { x: 78.0, y: 20.0 });
        let (x1, y1) = viewport.project(&Coord { x: 80.0, y: 25.0 });
        assert!(x1 > x0);
        assert!(y1 < y0);
    }

    #[test]
    fn zoom_doubles_scale() {
        let near = MapViewport::default().with_zoom(4.0);
        let far = MapViewport::default();
        let span = |v: &MapViewport| v.project(&Coord { x: 88.0, y: 20.5937 }).0 - v.width / 2.0;
        assert!((span(&near) - 2.0 * span(&far)).abs() < 1e-6);
    }
}
