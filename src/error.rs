//! Error taxonomy for the dashboard.
//!
//! Load failures are fatal at startup. Missing columns and fetch failures stay
//! local to the view that hit them.

use std::path::PathBuf;

use polars::error::PolarsError;

/// Errors with a meaning the views and the CLI act on.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The dataset file could not be opened or read.
    #[error("cannot read dataset {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The dataset is not well-formed tabular data.
    #[error("malformed dataset {origin}: {source}")]
    Parse {
        origin: String,
        source: PolarsError,
    },
    /// A column the renderer expected is absent from the table.
    #[error("missing column {0:?}")]
    MissingColumn(String),
    /// Several selector combinations did not resolve against the loaded schema.
    #[error("missing columns: {}", .0.iter().map(|name| format!("{name:?}")).collect::<Vec<_>>().join(", "))]
    MissingColumns(Vec<String>),
    /// Boundary data could not be fetched or decoded.
    #[error("failed to fetch state boundaries from {url}: {reason}")]
    Fetch { url: String, reason: String },
}

impl DashboardError {
    /// Heading shown above the message when a view reports this error.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } | Self::Parse { .. } => "Dataset unavailable",
            Self::MissingColumn(_) | Self::MissingColumns(_) => "Column not found",
            Self::Fetch { .. } => "Failed to fetch GeoJSON data",
        }
    }
}
