//! SVG format writing operations for charts and maps.

mod color;
mod path;
mod writer;

pub use color::*;
pub use path::*;
pub use writer::*;
