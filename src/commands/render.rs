use std::io::Write;

use anyhow::{Context, Result};

use crate::{
    cli::{Cli, RenderArgs},
    io::PendingWrite,
    views::View,
};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    // fail before loading anything if the target is taken
    let mut sink = PendingWrite::open(&args.output, args.force)?;

    let view = View::from(args.view);
    let selection = args.selection();
    tracing::info!(view = view.label(), output = %args.output.display(), verbose = cli.verbose, "[render] rendering page");

    let dashboard = args.config.build()?;
    let page = dashboard.render(view, &selection)?;

    sink.write_all(page.as_bytes())
        .with_context(|| format!("writing {}", sink.target().display()))?;
    sink.finalize()?;
    println!("Rendered {} -> {}", view.label(), args.output.display());
    Ok(())
}
