use anyhow::{Context, Result};

use crate::{
    cli::{Cli, ServeArgs},
    server::{Router, Server},
};

pub fn run(cli: &Cli, args: &ServeArgs) -> Result<()> {
    tracing::info!(
        data = %args.config.data_path.display(),
        boundaries = %args.config.boundary_url,
        verbose = cli.verbose,
        "[serve] starting",
    );

    // builds the blocking HTTP client, so it must run outside the runtime
    let dashboard = args.config.build()?;
    let router = Router::new(dashboard)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;
    runtime.block_on(Server::new(args.addr, router).serve())
        .with_context(|| format!("serving on {}", args.addr))
}
