use anyhow::Result;
use clap::Parser;

use workforce_atlas::cli::{Cli, Commands};
use workforce_atlas::commands::{render, serve};
use workforce_atlas::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    match &cli.command {
        Commands::Serve(args) => serve::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
    }
}
