//! Choropleth map of India: state join, projection and SVG output.

mod join;
mod svg;
mod viewport;

pub use join::{RegionValue, StateJoin};
pub use svg::Choropleth;
pub use viewport::{INDIA_CENTER, MapViewport, NATIONAL_ZOOM};
