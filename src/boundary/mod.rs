//! State boundary polygons: the collection, where it comes from, and its process-wide cache.

mod cache;
mod collection;
mod source;

pub use cache::BoundaryCache;
pub use collection::{Boundary, BoundaryCollection};
pub use source::{BoundarySource, DEFAULT_BOUNDARY_URL, DEFAULT_NAME_PROPERTY, HttpBoundarySource, RetryPolicy, is_retryable_status};
