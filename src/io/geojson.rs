//! GeoJSON reading for state boundary collections.

use anyhow::{Context, Result, bail};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Unsupported,
}

/// Read `(name, shape)` pairs from a GeoJSON `FeatureCollection`.
///
/// The name comes from the string property `name_property`. Features without
/// that property or without polygonal geometry are skipped.
pub(crate) fn read_named_polygons(bytes: &[u8], name_property: &str) -> Result<Vec<(String, MultiPolygon<f64>)>> {
    let collection: FeatureCollection = serde_json::from_slice(bytes)
        .context("[io::geojson] Failed to parse FeatureCollection")?;

    let mut shapes = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(name) = feature.properties.as_ref()
            .and_then(|props| props.get(name_property))
            .and_then(Value::as_str) else { continue };

        let shape = match feature.geometry {
            Some(Geometry::Polygon { coordinates }) => MultiPolygon(vec![parse_polygon(&coordinates)?]),
            Some(Geometry::MultiPolygon { coordinates }) => MultiPolygon(
                coordinates.iter().map(|polygon| parse_polygon(polygon)).collect::<Result<_>>()?,
            ),
            Some(Geometry::Unsupported) | None => continue,
        };
        shapes.push((name.to_string(), shape));
    }

    Ok(shapes)
}

/// Parse polygon rings: the first is the exterior, the rest are holes.
fn parse_polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>> {
    let Some((exterior, interiors)) = rings.split_first() else {
        bail!("[io::geojson] Polygon without an exterior ring");
    };
    Ok(Polygon::new(
        parse_ring(exterior)?,
        interiors.iter().map(|ring| parse_ring(ring)).collect::<Result<_>>()?,
    ))
}

/// Parse a ring of `[x, y]` positions (extra ordinates ignored), closing it if needed.
fn parse_ring(positions: &[Vec<f64>]) -> Result<LineString<f64>> {
    let mut points = positions.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => bail!("[io::geojson] Position needs at least two ordinates"),
        })
        .collect::<Result<Vec<_>>>()?;

    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last { points.push(first) }
    }

    Ok(LineString(points))
}
