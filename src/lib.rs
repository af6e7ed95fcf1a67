#![doc = "Industrial workforce dashboard: dataset loading, state boundaries, charts and maps"]
pub mod boundary;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod io;
pub mod logging;
pub mod map;
pub mod server;
pub mod views;

#[doc(inline)]
pub use dashboard::Dashboard;

#[doc(inline)]
pub use error::DashboardError;
