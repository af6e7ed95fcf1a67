//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::CsvReader};

use crate::error::DashboardError;

/// Reads a CSV file from `path` into a Polars DataFrame with trimmed column names.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame, DashboardError> {
    let file = File::open(path)
        .map_err(|source| DashboardError::FileAccess { path: path.to_path_buf(), source })?;
    let df = CsvReader::new(file)
        .finish()
        .map_err(|source| DashboardError::Parse { origin: path.display().to_string(), source })?;
    trim_column_names(df, &path.display().to_string())
}

/// Reads a CSV from an in-memory string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame, DashboardError> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .map_err(|source| DashboardError::Parse { origin: "<string>".into(), source })?;
    trim_column_names(df, "<string>")
}

/// Strip leading/trailing whitespace from every header so selector-built keys match.
fn trim_column_names(mut df: DataFrame, origin: &str) -> Result<DataFrame, DashboardError> {
    let trimmed = df.get_column_names().iter()
        .map(|name| name.as_str().trim().to_string())
        .collect::<Vec<_>>();
    df.set_column_names(trimmed)
        .map_err(|source| DashboardError::Parse { origin: origin.to_string(), source })?;
    Ok(df)
}
