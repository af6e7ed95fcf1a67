//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: this crate at a level picked by the
/// `-v` count, everything else at `warn`.
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("installing tracing subscriber")
}
