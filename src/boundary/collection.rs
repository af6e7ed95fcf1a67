use anyhow::Result;
use geo::MultiPolygon;

use crate::io;

/// One state polygon with its name property.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub name: String,
    pub shape: MultiPolygon<f64>,
}

/// Immutable set of state boundaries.
#[derive(Debug, Clone, Default)]
pub struct BoundaryCollection {
    boundaries: Vec<Boundary>,
}

impl BoundaryCollection {
    pub fn new(boundaries: Vec<Boundary>) -> Self {
        Self { boundaries }
    }

    /// Parse a GeoJSON `FeatureCollection`, naming each feature by `name_property`.
    pub fn from_geojson(bytes: &[u8], name_property: &str) -> Result<Self> {
        let boundaries = io::read_named_polygons(bytes, name_property)?
            .into_iter()
            .map(|(name, shape)| Boundary { name, shape })
            .collect();
        Ok(Self { boundaries })
    }

    pub fn len(&self) -> usize { self.boundaries.len() }

    pub fn is_empty(&self) -> bool { self.boundaries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Boundary> { self.boundaries.iter() }

    pub fn get(&self, name: &str) -> Option<&Boundary> {
        self.boundaries.iter().find(|boundary| boundary.name == name)
    }
}
