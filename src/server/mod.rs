//! HTTP surface: one route per view plus a health check.

mod query;
mod router;
mod server;

pub use query::parse_query;
pub use router::Router;
pub use server::Server;
