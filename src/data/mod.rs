//! The worker dataset: loading, typed column keys and aggregations.

mod columns;
mod stats;
mod table;

pub use columns::{Area, ColumnCatalog, ColumnKey, INDUSTRY_COLUMN, STATE_COLUMN, Sex, WorkerType};
pub use stats::{BoxStats, extent, group_sums, top_n, value_counts};
pub use table::WorkerTable;
