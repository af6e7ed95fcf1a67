use std::fmt::Write;

use anyhow::Result;

use crate::{
    chart::{BarChart, BoxChart, ScatterChart, ScatterSeries},
    data::{Area, BoxStats, ColumnKey, WorkerTable, WorkerType, INDUSTRY_COLUMN, STATE_COLUMN, top_n, value_counts},
    error::DashboardError,
    io::svg::series,
};

/// Number of industries kept for the box plot.
pub const TOP_INDUSTRIES: usize = 10;

/// Everything the overview charts draw, derived from the table for one worker type.
#[derive(Clone, Debug)]
pub struct OverviewData {
    pub worker: WorkerType,
    pub total: Vec<Option<f64>>,
    pub rural: Vec<Option<f64>>,
    pub urban: Vec<Option<f64>>,
    /// Top industries with their Total distributions, most frequent first.
    ///
    /// The box plot draws them in this order, not in order of first appearance;
    /// industries with equal counts keep first-appearance order among themselves.
    pub industry_boxes: Vec<(String, BoxStats)>,
    /// Rows per state, in first-appearance order.
    pub state_counts: Vec<(String, usize)>,
}

impl OverviewData {
    pub fn build(table: &WorkerTable, worker: WorkerType) -> Result<Self, DashboardError> {
        let total = table.values(ColumnKey::persons(worker, Area::Total))?;
        let rural = table.values(ColumnKey::persons(worker, Area::Rural))?;
        let urban = table.values(ColumnKey::persons(worker, Area::Urban))?;
        let industries = table.industries()?;
        let states = table.states()?;

        let industry_boxes = top_n(&industries, TOP_INDUSTRIES).into_iter()
            .filter_map(|(name, _)| {
                let values = industries.iter().zip(&total)
                    .filter(|(industry, _)| industry.as_deref() == Some(name.as_str()))
                    .filter_map(|(_, value)| *value);
                BoxStats::from_values(values).map(|stats| (name, stats))
            })
            .collect();

        Ok(Self {
            worker,
            total,
            rural,
            urban,
            industry_boxes,
            state_counts: value_counts(&states),
        })
    }

    fn column(&self, area: Area) -> String {
        ColumnKey::persons(self.worker, area).column_name()
    }

    pub fn total_vs_rural(&self) -> ScatterChart {
        let label = self.worker.label();
        ScatterChart::new(format!("{label} - Total vs Rural"), self.column(Area::Total), self.column(Area::Rural))
            .with_series(ScatterSeries::from_columns("Rural", &self.total, &self.rural, series(0), 0.8))
    }

    pub fn total_vs_urban(&self) -> ScatterChart {
        let label = self.worker.label();
        ScatterChart::new(format!("{label} - Total vs Urban"), self.column(Area::Total), self.column(Area::Urban))
            .with_series(ScatterSeries::from_columns("Urban", &self.total, &self.urban, series(0), 0.8))
    }

    pub fn industry_box_plot(&self) -> BoxChart {
        let label = self.worker.label();
        let chart = BoxChart::new(format!("{label} by Top 10 NIC Names"), INDUSTRY_COLUMN, self.column(Area::Total), series(0));
        self.industry_boxes.iter()
            .fold(chart, |chart, (name, stats)| chart.with_group(name.clone(), stats.clone()))
    }

    pub fn state_count_plot(&self) -> BarChart {
        let label = self.worker.label();
        let bars = self.state_counts.iter()
            .map(|(state, count)| (state.clone(), *count as f64))
            .collect();
        BarChart::new(format!("Distribution of {label} by {STATE_COLUMN}"), STATE_COLUMN, "count")
            .with_bars(bars)
    }

    /// Rural and Urban against Total on shared axes.
    pub fn rural_urban_vs_total(&self) -> ScatterChart {
        let label = self.worker.label();
        ScatterChart::new(
            format!("Relationship between {label} - Rural/Urban - Persons and {label} - Total - Persons"),
            format!("{label} - Rural - Persons / {label} - Urban - Persons"),
            format!("{label} - Total - Persons"),
        )
            .with_series(ScatterSeries::from_columns("Rural", &self.rural, &self.total, series(0), 0.5))
            .with_series(ScatterSeries::from_columns("Urban", &self.urban, &self.total, series(1), 0.5))
            .with_legend(true)
    }
}

/// The five overview charts for `worker`, in display order.
pub fn overview_body(table: &WorkerTable, worker: WorkerType) -> Result<String> {
    let data = OverviewData::build(table, worker)?;
    tracing::debug!(
        worker = worker.slug(),
        industries = data.industry_boxes.len(),
        states = data.state_counts.len(),
        "[views::overview] derived chart data",
    );

    let charts = [
        data.total_vs_rural().render()?,
        data.total_vs_urban().render()?,
        data.industry_box_plot().render()?,
        data.state_count_plot().render()?,
        data.rural_urban_vs_total().render()?,
    ];

    let mut body = String::new();
    for svg in charts {
        let _ = writeln!(body, "<div class=\"chart\">\n{svg}</div>");
    }
    if table.height() == 0 {
        body.push_str("<p class=\"note\">The dataset has no rows.</p>\n");
    }
    Ok(body)
}
