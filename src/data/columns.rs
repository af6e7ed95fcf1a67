//! Typed column keys for the worker-count columns.
//!
//! Column names are built from `(WorkerType, Area, Sex)` and must match the
//! dataset header exactly. The `Persons` columns carry two spaces before the
//! sex label in the source data; the `Males`/`Females` columns carry one.

use std::fmt;

use crate::error::DashboardError;

/// State name column.
pub const STATE_COLUMN: &str = "India/States";

/// Industry classification column.
pub const INDUSTRY_COLUMN: &str = "NIC Name";

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum WorkerType {
    #[default]
    Main,
    Marginal,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Area {
    Total,
    #[default]
    Rural,
    Urban,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Sex {
    Persons,
    #[default]
    Males,
    Females,
}

impl WorkerType {
    pub const ALL: [Self; 2] = [Self::Main, Self::Marginal];

    /// Label as shown in selectors and titles, e.g. "Main Workers".
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "Main Workers",
            Self::Marginal => "Marginal Workers",
        }
    }

    /// Query-string token.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Marginal => "marginal",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.slug().eq_ignore_ascii_case(slug))
    }
}

impl Area {
    pub const ALL: [Self; 3] = [Self::Total, Self::Rural, Self::Urban];

    /// Areas offered by the map selector.
    pub const MAP: [Self; 2] = [Self::Rural, Self::Urban];

    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Rural => "Rural",
            Self::Urban => "Urban",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Rural => "rural",
            Self::Urban => "urban",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.slug().eq_ignore_ascii_case(slug))
    }
}

impl Sex {
    pub const ALL: [Self; 3] = [Self::Persons, Self::Males, Self::Females];

    /// Sexes offered by the map selector.
    pub const MAP: [Self; 2] = [Self::Males, Self::Females];

    pub fn label(self) -> &'static str {
        match self {
            Self::Persons => "Persons",
            Self::Males => "Males",
            Self::Females => "Females",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Persons => "persons",
            Self::Males => "males",
            Self::Females => "females",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sex| sex.slug().eq_ignore_ascii_case(slug))
    }

    /// Separator between the area and sex segments of the header.
    fn separator(self) -> &'static str {
        match self {
            Self::Persons => " -  ",
            Self::Males | Self::Females => " - ",
        }
    }
}

/// One worker-count column, identified by its three selector values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ColumnKey {
    pub worker: WorkerType,
    pub area: Area,
    pub sex: Sex,
}

impl ColumnKey {
    pub fn new(worker: WorkerType, area: Area, sex: Sex) -> Self {
        Self { worker, area, sex }
    }

    /// `Persons` column for the given worker type and area.
    pub fn persons(worker: WorkerType, area: Area) -> Self {
        Self::new(worker, area, Sex::Persons)
    }

    /// Exact dataset header for this key.
    pub fn column_name(&self) -> String {
        format!("{} - {}{}{}", self.worker.label(), self.area.label(), self.sex.separator(), self.sex.label())
    }

    /// Every key a view can ask for: the overview's Persons columns and the
    /// map's sex-by-area columns.
    pub fn selectable() -> Vec<ColumnKey> {
        let mut keys = Vec::new();
        for worker in WorkerType::ALL {
            for area in Area::ALL {
                keys.push(Self::persons(worker, area));
            }
            for area in Area::MAP {
                for sex in Sex::MAP {
                    keys.push(Self::new(worker, area, sex));
                }
            }
        }
        keys
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column_name())
    }
}

/// Result of checking every selectable key against a loaded header.
#[derive(Clone, Debug, Default)]
pub struct ColumnCatalog {
    resolved: Vec<ColumnKey>,
    missing: Vec<ColumnKey>,
}

impl ColumnCatalog {
    /// Check `keys` plus the state and industry columns against `columns`.
    pub fn validate<'a>(columns: impl IntoIterator<Item = &'a str>, keys: &[ColumnKey]) -> (Self, Vec<String>) {
        let present = columns.into_iter().collect::<ahash::AHashSet<_>>();
        let (resolved, missing) = keys.iter().copied()
            .partition::<Vec<_>, _>(|key| present.contains(key.column_name().as_str()));

        let mut missing_names = [STATE_COLUMN, INDUSTRY_COLUMN].into_iter()
            .filter(|name| !present.contains(name))
            .map(str::to_string)
            .collect::<Vec<_>>();
        missing_names.extend(missing.iter().map(ColumnKey::column_name));

        (Self { resolved, missing }, missing_names)
    }

    /// Validate and fail with every unresolvable name at once.
    pub fn require<'a>(columns: impl IntoIterator<Item = &'a str>, keys: &[ColumnKey]) -> Result<Self, DashboardError> {
        let (catalog, missing) = Self::validate(columns, keys);
        if missing.is_empty() { Ok(catalog) } else { Err(DashboardError::MissingColumns(missing)) }
    }

    pub fn resolved(&self) -> &[ColumnKey] { &self.resolved }

    pub fn missing(&self) -> &[ColumnKey] { &self.missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persons_columns_use_double_space() {
        for worker in WorkerType::ALL {
            let label = worker.label();
            assert_eq!(ColumnKey::persons(worker, Area::Total).column_name(), format!("{label} - Total -  Persons"));
            assert_eq!(ColumnKey::persons(worker, Area::Rural).column_name(), format!("{label} - Rural -  Persons"));
            assert_eq!(ColumnKey::persons(worker, Area::Urban).column_name(), format!("{label} - Urban -  Persons"));
        }
    }

    #[test]
    fn map_selection_resolves_exact_literal() {
        let key = ColumnKey::new(WorkerType::Marginal, Area::Urban, Sex::Females);
        assert_eq!(key.column_name(), "Marginal Workers - Urban - Females");
    }

    #[test]
    fn selectable_keys_are_unique() {
        let keys = ColumnKey::selectable();
        let unique = keys.iter().collect::<ahash::AHashSet<_>>();
        assert_eq!(keys.len(), 14);
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn slugs_parse_case_insensitively() {
        assert_eq!(WorkerType::from_slug("Marginal"), Some(WorkerType::Marginal));
        assert_eq!(Area::from_slug("URBAN"), Some(Area::Urban));
        assert_eq!(Sex::from_slug("females"), Some(Sex::Females));
        assert_eq!(Sex::from_slug("other"), None);
    }

    #[test]
    fn require_lists_all_missing_names() {
        let key = ColumnKey::new(WorkerType::Main, Area::Rural, Sex::Males);
        let columns = [STATE_COLUMN, INDUSTRY_COLUMN];
        let err = ColumnCatalog::require(columns, &[key, ColumnKey::persons(WorkerType::Main, Area::Total)])
            .unwrap_err();
        match err {
            DashboardError::MissingColumns(names) => assert_eq!(names, vec![
                "Main Workers - Rural - Males".to_string(),
                "Main Workers - Total -  Persons".to_string(),
            ]),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_complete_header() {
        let names = ColumnKey::selectable().iter().map(ColumnKey::column_name).collect::<Vec<_>>();
        let header = names.iter().map(String::as_str)
            .chain([STATE_COLUMN, INDUSTRY_COLUMN]);
        let (catalog, missing) = ColumnCatalog::validate(header, &ColumnKey::selectable());
        assert!(missing.is_empty());
        assert!(catalog.missing().is_empty());
        assert_eq!(catalog.resolved().len(), 14);
    }
}
