use std::{net::SocketAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::{
    config::DashboardConfig,
    data::{Area, Sex, WorkerType},
    views::{Selection, View},
};

/// Industrial workforce dashboard
#[derive(Parser, Debug)]
#[command(name = "workforce-atlas", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the dashboard over HTTP
    Serve(ServeArgs),

    /// Render one page to an HTML file (forbids stdout)
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub config: DashboardConfig,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum ViewArg { Landing, Overview, Map }

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Landing => View::Landing,
            ViewArg::Overview => View::Overview,
            ViewArg::Map => View::Map,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum WorkerArg { Main, Marginal }

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum SexArg { Males, Females }

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum AreaArg { Rural, Urban }

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: DashboardConfig,

    /// Page to render
    #[arg(long, value_enum, default_value_t = ViewArg::Landing)]
    pub view: ViewArg,

    #[arg(long, value_enum, default_value_t = WorkerArg::Main)]
    pub worker: WorkerArg,

    /// Map only
    #[arg(long, value_enum, default_value_t = SexArg::Males)]
    pub sex: SexArg,

    /// Map only
    #[arg(long, value_enum, default_value_t = AreaArg::Rural)]
    pub area: AreaArg,

    /// Output HTML file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

impl RenderArgs {
    pub fn selection(&self) -> Selection {
        Selection {
            worker: match self.worker {
                WorkerArg::Main => WorkerType::Main,
                WorkerArg::Marginal => WorkerType::Marginal,
            },
            sex: match self.sex {
                SexArg::Males => Sex::Males,
                SexArg::Females => Sex::Females,
            },
            area: match self.area {
                AreaArg::Rural => Area::Rural,
                AreaArg::Urban => Area::Urban,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["workforce-atlas", "serve", "--data-path", "workers.csv"]).unwrap();
        let Commands::Serve(args) = cli.command else { panic!("expected serve") };
        assert_eq!(args.addr.to_string(), "127.0.0.1:8501");
        assert_eq!(args.config.fetch_retries, 2);
        assert_eq!(args.config.name_property, "NAME_1");
        assert!(!args.config.allow_partial_schema);
    }

    #[test]
    fn render_selection() {
        let cli = Cli::try_parse_from([
            "workforce-atlas", "-v", "render", "--data-path", "workers.csv", "--view", "map",
            "--worker", "marginal", "--sex", "females", "--area", "urban", "-o", "map.html",
        ]).unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Render(args) = cli.command else { panic!("expected render") };
        assert_eq!(View::from(args.view), View::Map);
        assert_eq!(args.selection(), Selection { worker: WorkerType::Marginal, sex: Sex::Females, area: Area::Urban });
    }

    #[test]
    fn map_selectors_reject_persons() {
        assert!(Cli::try_parse_from([
            "workforce-atlas", "render", "--data-path", "w.csv", "--sex", "persons", "-o", "x.html",
        ]).is_err());
    }
}
