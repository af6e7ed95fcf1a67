//! File format reading and writing.

mod csv;
mod geojson;
mod output;
pub mod svg;

pub(crate) use csv::*;
pub(crate) use geojson::*;
pub use output::{PendingWrite, assert_not_stdout};
