//! Process-wide dashboard state, built once at startup and shared by every request.

use std::sync::Arc;

use anyhow::Result;

use crate::{
    boundary::BoundaryCache,
    data::WorkerTable,
    error::DashboardError,
    map::MapViewport,
    views::{self, Selection, View},
};

/// The loaded table, the boundary memo and the map viewport.
///
/// Cloning is cheap; clones share the same table and cache.
#[derive(Clone)]
pub struct Dashboard {
    table: Arc<WorkerTable>,
    boundaries: Arc<BoundaryCache>,
    viewport: MapViewport,
}

impl Dashboard {
    pub fn new(table: WorkerTable, boundaries: BoundaryCache, viewport: MapViewport) -> Self {
        Self { table: Arc::new(table), boundaries: Arc::new(boundaries), viewport }
    }

    /// Render one full page.
    ///
    /// Missing columns and fetch failures are shown inside the page so the
    /// other views stay usable. Any other failure is returned.
    pub fn render(&self, view: View, selection: &Selection) -> Result<String> {
        let body = match view {
            View::Landing => Ok(views::landing_body()),
            View::Overview => views::overview_body(&self.table, selection.worker),
            View::Map => views::map_body(&self.table, &self.boundaries, &self.viewport, selection),
        };

        let body = match body {
            Ok(body) => body,
            Err(err) => match err.downcast_ref::<DashboardError>() {
                Some(dashboard_err) => {
                    tracing::warn!(view = view.label(), error = %dashboard_err, "[dashboard] view reported an error");
                    views::error_panel(dashboard_err)
                }
                None => return Err(err),
            },
        };

        Ok(views::page(view, selection, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryCollection, BoundarySource};

    struct Offline;

    impl BoundarySource for Offline {
        fn fetch(&self) -> Result<BoundaryCollection, DashboardError> {
            Err(DashboardError::Fetch { url: "test://offline".into(), reason: "HTTP 503 Service Unavailable".into() })
        }

        fn location(&self) -> &str { "test://offline" }
    }

    fn dashboard() -> Dashboard {
        let table = WorkerTable::from_csv_str("India/States,NIC Name,Main Workers - Rural - Males\nKerala,Retail,1\n").unwrap();
        Dashboard::new(table, BoundaryCache::new(Offline), MapViewport::default())
    }

    #[test]
    fn fetch_failure_stays_inside_the_map_view() {
        let dashboard = dashboard();
        let map = dashboard.render(View::Map, &Selection::default()).unwrap();
        assert!(map.contains("Failed to fetch GeoJSON data"));

        let landing = dashboard.render(View::Landing, &Selection::default()).unwrap();
        assert!(landing.contains("About the Dataset"));
    }

    #[test]
    fn missing_column_is_shown_on_the_overview() {
        let page = dashboard().render(View::Overview, &Selection::default()).unwrap();
        assert!(page.contains("Column not found"));
        assert!(page.contains("Main Workers - Total -  Persons"));
    }
}
