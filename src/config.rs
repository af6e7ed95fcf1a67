//! Startup configuration shared by `serve` and `render`.

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, ValueHint};

use crate::{
    boundary::{BoundaryCache, DEFAULT_BOUNDARY_URL, DEFAULT_NAME_PROPERTY, HttpBoundarySource, RetryPolicy},
    dashboard::Dashboard,
    data::WorkerTable,
    map::{MapViewport, NATIONAL_ZOOM},
};

#[derive(Args, Debug, Clone)]
pub struct DashboardConfig {
    /// Worker dataset (CSV with a header row)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data_path: PathBuf,

    /// GeoJSON FeatureCollection of state boundaries
    #[arg(long, default_value = DEFAULT_BOUNDARY_URL, value_hint = ValueHint::Url)]
    pub boundary_url: String,

    /// Feature property holding the state name
    #[arg(long, default_value = DEFAULT_NAME_PROPERTY)]
    pub name_property: String,

    /// Extra attempts after a failed boundary fetch (0 disables retries)
    #[arg(long, default_value_t = 2)]
    pub fetch_retries: u32,

    /// Per-request timeout for the boundary fetch, in seconds
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Map zoom level
    #[arg(long, default_value_t = NATIONAL_ZOOM)]
    pub zoom: f64,

    /// Start even if some worker columns are missing; affected views show an error
    #[arg(long)]
    pub allow_partial_schema: bool,
}

impl DashboardConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy { max_retries: self.fetch_retries, ..RetryPolicy::default() }
    }

    pub fn viewport(&self) -> MapViewport {
        MapViewport::default().with_zoom(self.zoom)
    }

    /// Load and validate the dataset.
    ///
    /// Load failures are always fatal. Missing worker columns are fatal unless
    /// `allow_partial_schema` is set, in which case they are logged.
    pub fn load_table(&self) -> Result<WorkerTable> {
        let table = WorkerTable::load(&self.data_path)?;
        if self.allow_partial_schema {
            let (catalog, missing) = table.catalog();
            if missing.is_empty() {
                tracing::info!(columns = catalog.resolved().len(), "[config] all worker columns resolved");
            } else {
                tracing::warn!(
                    unresolved_keys = catalog.missing().len(),
                    missing = ?missing,
                    "[config] continuing with missing columns",
                );
            }
        } else {
            let catalog = table.require_catalog()
                .with_context(|| format!("validating {}", self.data_path.display()))?;
            tracing::info!(columns = catalog.resolved().len(), "[config] all worker columns resolved");
        }
        Ok(table)
    }

    /// Everything the views need, constructed once.
    pub fn build(&self) -> Result<Dashboard> {
        let table = self.load_table()?;
        let source = HttpBoundarySource::new(
            &self.boundary_url,
            &self.name_property,
            Duration::from_secs(self.fetch_timeout_secs),
            self.retry_policy(),
        ).context("building HTTP client")?;
        Ok(Dashboard::new(table, BoundaryCache::new(source), self.viewport()))
    }
}
