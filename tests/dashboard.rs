// Integration tests for the dashboard pipeline:
//   CSV load, overview derivation, map join, boundary memoization

use std::{
    io::Write,
    sync::{Arc, atomic::{AtomicUsize, Ordering}},
};

use workforce_atlas::{
    Dashboard, DashboardError,
    boundary::{BoundaryCache, BoundaryCollection, BoundarySource},
    data::{Area, ColumnKey, Sex, WorkerTable, WorkerType},
    map::{Choropleth, MapViewport},
    views::{OverviewData, Selection, View},
};

const CSV: &str = "\
India/States,NIC Name,Main Workers - Total -  Persons,Main Workers - Rural -  Persons,Main Workers - Urban -  Persons,Main Workers - Rural - Males
Kerala,Retail,10,6,4,3
Goa,Retail,20,5,15,2
Goa,Mining,7,7,0,5
";

const GEOJSON: &[u8] = br#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "properties": {"NAME_1": "Kerala"},
     "geometry": {"type": "Polygon", "coordinates": [[[75.0, 8.0], [77.0, 8.0], [77.0, 12.0], [75.0, 8.0]]]}},
    {"type": "Feature", "properties": {"NAME_1": "Tamil Nadu"},
     "geometry": {"type": "Polygon", "coordinates": [[[77.0, 8.0], [80.0, 10.0], [78.0, 13.0], [77.0, 8.0]]]}}
]}"#;

/// Boundary source that counts fetches and serves a fixed collection.
#[derive(Clone, Default)]
struct CountingSource {
    calls: Arc<AtomicUsize>,
}

impl BoundarySource for CountingSource {
    fn fetch(&self) -> Result<BoundaryCollection, DashboardError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BoundaryCollection::from_geojson(GEOJSON, "NAME_1").expect("fixture parses"))
    }

    fn location(&self) -> &str { "test://counting" }
}

fn dashboard(source: CountingSource) -> Dashboard {
    let table = WorkerTable::from_csv_str(CSV).unwrap();
    Dashboard::new(table, BoundaryCache::new(source), MapViewport::default())
}

#[test]
fn loaded_column_names_are_trimmed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "  India/States , NIC Name,Main Workers - Total -  Persons  \nKerala,Retail,1").unwrap();

    let table = WorkerTable::load(file.path()).unwrap();
    assert_eq!(table.column_names(), ["India/States", "NIC Name", "Main Workers - Total -  Persons"]);
    for name in table.column_names() {
        assert_eq!(name, name.trim());
    }
}

#[test]
fn unreadable_dataset_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorkerTable::load(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, DashboardError::FileAccess { .. }));
}

#[test]
fn state_counts_from_three_rows() {
    let table = WorkerTable::from_csv_str("India/States,NIC Name,Main Workers - Total -  Persons,Main Workers - Rural -  Persons,Main Workers - Urban -  Persons\n\
        Kerala,Retail,1,1,0\nGoa,Retail,1,1,0\nGoa,Mining,1,0,1\n").unwrap();
    let data = OverviewData::build(&table, WorkerType::Main).unwrap();

    let mut counts = data.state_counts.clone();
    counts.sort();
    assert_eq!(counts, vec![("Goa".to_string(), 2), ("Kerala".to_string(), 1)]);
}

#[test]
fn overview_column_names_match_dataset_literals() {
    for (worker, label) in [(WorkerType::Main, "Main"), (WorkerType::Marginal, "Marginal")] {
        for (area, area_label) in [(Area::Total, "Total"), (Area::Rural, "Rural"), (Area::Urban, "Urban")] {
            assert_eq!(
                ColumnKey::persons(worker, area).column_name(),
                format!("{label} Workers - {area_label} -  Persons"),
            );
        }
    }
}

#[test]
fn map_colors_kerala_and_skips_unmatched_states() {
    let table = WorkerTable::from_csv_str(CSV).unwrap();
    let boundaries = BoundaryCollection::from_geojson(GEOJSON, "NAME_1").unwrap();
    let column = table.values(ColumnKey::new(WorkerType::Main, Area::Rural, Sex::Males)).unwrap();
    let values = workforce_atlas::data::group_sums(&table.states().unwrap(), &column);
    let domain = workforce_atlas::data::extent(column.iter().flatten().copied());

    let choropleth = Choropleth::new("test", &values, domain, &boundaries);
    let fills = choropleth.fill_colors();
    assert!(fills[0].is_some(), "Kerala is colored");
    assert!(fills[1].is_none(), "Tamil Nadu has no data");
    assert_eq!(choropleth.join.unmatched_states, ["Goa"]);

    let svg = choropleth.to_svg(&boundaries, &MapViewport::default()).unwrap();
    assert!(svg.contains("data-state=\"Kerala\""));
}

#[test]
fn marginal_female_urban_resolves_to_exact_column() {
    let key = ColumnKey::new(WorkerType::Marginal, Area::Urban, Sex::Females);
    assert_eq!(key.column_name(), "Marginal Workers - Urban - Females");

    let table = WorkerTable::from_csv_str(CSV).unwrap();
    match table.values(key) {
        Err(DashboardError::MissingColumn(name)) => assert_eq!(name, "Marginal Workers - Urban - Females"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn missing_map_column_is_shown_not_fetched() {
    let source = CountingSource::default();
    let dashboard = dashboard(source.clone());
    let selection = Selection { worker: WorkerType::Marginal, sex: Sex::Females, area: Area::Urban };

    let page = dashboard.render(View::Map, &selection).unwrap();
    assert!(page.contains("Column not found"));
    assert!(page.contains("Marginal Workers - Urban - Females"));
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn boundaries_are_fetched_once_per_process() {
    let source = CountingSource::default();
    let dashboard = dashboard(source.clone());

    for _ in 0..2 {
        let page = dashboard.render(View::Map, &Selection::default()).unwrap();
        assert!(page.contains("Main Workers (Males, Rural) Population Across Indian States"));
    }
    dashboard.render(View::Overview, &Selection::default()).unwrap();
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn overview_page_has_all_charts() {
    let page = dashboard(CountingSource::default()).render(View::Overview, &Selection::default()).unwrap();
    for title in [
        "Main Workers - Total vs Rural",
        "Main Workers - Total vs Urban",
        "Main Workers by Top 10 NIC Names",
        "Distribution of Main Workers by India/States",
        "Relationship between Main Workers - Rural/Urban - Persons and Main Workers - Total - Persons",
    ] {
        assert!(page.contains(title), "{title}");
    }
}
