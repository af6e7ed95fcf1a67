use std::fmt::Write;

use anyhow::Result;

use crate::{
    boundary::BoundaryCache,
    data::{ColumnKey, WorkerTable, extent, group_sums},
    io::svg::escape_xml,
    map::{Choropleth, MapViewport},
};
use super::Selection;

pub fn map_title(selection: &Selection) -> String {
    format!(
        "{} ({}, {}) Population Across Indian States",
        selection.worker.label(),
        selection.sex.label(),
        selection.area.label(),
    )
}

/// Choropleth of the selected column, summed per state.
///
/// The color scale spans the column's own minimum to maximum over all rows,
/// not the range of the per-state sums.
///
/// The column is resolved before the boundaries are fetched, so a missing
/// column never costs a network call.
pub fn map_body(table: &WorkerTable, boundaries: &BoundaryCache, viewport: &MapViewport, selection: &Selection) -> Result<String> {
    let key = ColumnKey::new(selection.worker, selection.area, selection.sex);
    let values = table.values(key)?;
    let states = table.states()?;
    let state_values = group_sums(&states, &values);
    let domain = extent(values.iter().flatten().copied());

    let collection = boundaries.get()?;
    let choropleth = Choropleth::new(map_title(selection), &state_values, domain, &collection);
    tracing::debug!(
        column = %key,
        matched = choropleth.join.matched().count(),
        unmatched_states = choropleth.join.unmatched_states.len(),
        unmatched_features = ?choropleth.join.unmatched_features,
        "[views::map] joined states onto boundaries",
    );

    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", escape_xml(&choropleth.title));
    let _ = writeln!(body, "<div class=\"chart\">\n{}</div>", choropleth.to_svg(&collection, viewport)?);

    if !choropleth.join.unmatched_states.is_empty() {
        let names = choropleth.join.unmatched_states.iter()
            .map(|name| escape_xml(name))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(body, "<p class=\"note\">No boundary found for: {names}</p>");
    }
    Ok(body)
}
