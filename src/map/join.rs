use ahash::AHashMap;

use crate::boundary::BoundaryCollection;

/// Value joined onto one boundary feature.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionValue {
    pub name: String,
    /// `None` when the table has no row with exactly this state name.
    pub value: Option<f64>,
}

/// Best-effort exact-match join between table states and boundary features.
///
/// Names are compared byte for byte, with no case folding or trimming. A name
/// present on one side only is left out of the coloring and reported in
/// `unmatched_states` / `unmatched_features`.
#[derive(Clone, Debug, Default)]
pub struct StateJoin {
    /// One entry per boundary feature, in collection order.
    pub regions: Vec<RegionValue>,
    /// Table states with no boundary feature of the same name.
    pub unmatched_states: Vec<String>,
    /// Boundary features with no table state of the same name.
    pub unmatched_features: Vec<String>,
}

impl StateJoin {
    pub fn new(state_values: &[(String, f64)], boundaries: &BoundaryCollection) -> Self {
        let by_name = state_values.iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect::<AHashMap<_, _>>();

        let regions = boundaries.iter()
            .map(|boundary| RegionValue {
                name: boundary.name.clone(),
                value: by_name.get(boundary.name.as_str()).copied(),
            })
            .collect::<Vec<_>>();

        let unmatched_states = state_values.iter()
            .filter(|(name, _)| boundaries.get(name).is_none())
            .map(|(name, _)| name.clone())
            .collect();
        let unmatched_features = regions.iter()
            .filter(|region| region.value.is_none())
            .map(|region| region.name.clone())
            .collect();

        Self { regions, unmatched_states, unmatched_features }
    }

    /// Regions that received a value.
    pub fn matched(&self) -> impl Iterator<Item = &RegionValue> {
        self.regions.iter().filter(|region| region.value.is_some())
    }
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;
    use crate::boundary::Boundary;

    fn boundaries(names: &[&str]) -> BoundaryCollection {
        BoundaryCollection::new(names.iter()
            .map(|name| Boundary { name: name.to_string(), shape: MultiPolygon(vec![]) })
            .collect())
    }

    #[test]
    fn exact_names_join() {
        let join = StateJoin::new(&[("Kerala".into(), 12.0)], &boundaries(&["Kerala", "Goa"]));
        assert_eq!(join.regions[0], RegionValue { name: "Kerala".into(), value: Some(12.0) });
        assert_eq!(join.regions[1].value, None);
        assert_eq!(join.unmatched_features, ["Goa"]);
        assert!(join.unmatched_states.is_empty());
    }

    #[test]
    fn no_normalization_is_applied() {
        let join = StateJoin::new(&[("KERALA".into(), 1.0), ("Goa ".into(), 2.0)], &boundaries(&["Kerala", "Goa"]));
        assert_eq!(join.matched().count(), 0);
        assert_eq!(join.unmatched_states, ["KERALA", "Goa "]);
    }
}
