use std::path::Path;

use polars::{frame::DataFrame, prelude::DataType};

use crate::{error::DashboardError, io};
use super::columns::{ColumnCatalog, ColumnKey, INDUSTRY_COLUMN, STATE_COLUMN};

/// The loaded worker dataset. Read-only after construction.
#[derive(Debug, Clone)]
pub struct WorkerTable {
    data: DataFrame,
}

impl WorkerTable {
    /// Load the dataset from a CSV file.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        let data = io::read_csv(path)?;
        tracing::info!(path = %path.display(), rows = data.height(), columns = data.width(), "[data] loaded dataset");
        Ok(Self { data })
    }

    /// Load the dataset from CSV text.
    pub fn from_csv_str(csv: &str) -> Result<Self, DashboardError> {
        Ok(Self { data: io::read_csv_string(csv)? })
    }

    pub fn height(&self) -> usize { self.data.height() }

    pub fn column_names(&self) -> Vec<&str> {
        self.data.get_column_names().into_iter().map(|name| name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names().contains(&name)
    }

    /// Check every selectable column key against this table's header.
    pub fn catalog(&self) -> (ColumnCatalog, Vec<String>) {
        ColumnCatalog::validate(self.column_names(), &ColumnKey::selectable())
    }

    /// Like [`catalog`](Self::catalog), failing with every missing column name.
    pub fn require_catalog(&self) -> Result<ColumnCatalog, DashboardError> {
        ColumnCatalog::require(self.column_names(), &ColumnKey::selectable())
    }

    /// Numeric values of a column, cast to f64. Nulls and unparsable cells are `None`.
    pub fn numeric(&self, name: &str) -> Result<Vec<Option<f64>>, DashboardError> {
        let column = self.data.column(name)
            .map_err(|_| DashboardError::MissingColumn(name.to_string()))?;
        let column = column.cast(&DataType::Float64)
            .map_err(|source| DashboardError::Parse { origin: format!("column {name:?}"), source })?;
        let values = column.f64()
            .map_err(|source| DashboardError::Parse { origin: format!("column {name:?}"), source })?;
        Ok(values.into_iter().collect())
    }

    /// Numeric values for a typed column key.
    pub fn values(&self, key: ColumnKey) -> Result<Vec<Option<f64>>, DashboardError> {
        self.numeric(&key.column_name())
    }

    /// Text values of a column. Nulls are `None`.
    pub fn text(&self, name: &str) -> Result<Vec<Option<String>>, DashboardError> {
        let column = self.data.column(name)
            .map_err(|_| DashboardError::MissingColumn(name.to_string()))?;
        let column = column.cast(&DataType::String)
            .map_err(|source| DashboardError::Parse { origin: format!("column {name:?}"), source })?;
        let values = column.str()
            .map_err(|source| DashboardError::Parse { origin: format!("column {name:?}"), source })?;
        Ok(values.into_iter().map(|value| value.map(str::to_string)).collect())
    }

    pub fn states(&self) -> Result<Vec<Option<String>>, DashboardError> { self.text(STATE_COLUMN) }

    pub fn industries(&self) -> Result<Vec<Option<String>>, DashboardError> { self.text(INDUSTRY_COLUMN) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "India/States,NIC Name,Main Workers - Total -  Persons\n\
        Kerala,Retail,10\n\
        Goa,Retail,\n\
        Goa,Mining,7\n";

    #[test]
    fn numeric_keeps_nulls() {
        let table = WorkerTable::from_csv_str(CSV).unwrap();
        let values = table.numeric("Main Workers - Total -  Persons").unwrap();
        assert_eq!(values, vec![Some(10.0), None, Some(7.0)]);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let table = WorkerTable::from_csv_str(CSV).unwrap();
        match table.numeric("Main Workers - Urban -  Persons") {
            Err(DashboardError::MissingColumn(name)) => assert_eq!(name, "Main Workers - Urban -  Persons"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn states_in_row_order() {
        let table = WorkerTable::from_csv_str(CSV).unwrap();
        let states = table.states().unwrap().into_iter().flatten().collect::<Vec<_>>();
        assert_eq!(states, ["Kerala", "Goa", "Goa"]);
        assert_eq!(table.height(), 3);
        assert!(table.has_column("NIC Name"));
    }
}
