use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mapanalyzer_cli::output::OutputFormat;

mod commands;

use commands::analyze::handle_analyze_command;
use commands::route::{handle_route_command, RouteCommandArgs};
use commands::spanning::handle_spanning_command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fastest routes and barely connected maps for road networks"
)]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full analysis and write the report.
    Analyze {
        /// Tab-separated road map to read.
        input: PathBuf,
        /// Report destination; printed to stdout when omitted.
        output: Option<PathBuf>,
    },
    /// Compute the fastest route between two points.
    Route {
        /// Tab-separated road map to read.
        input: PathBuf,
        /// Starting point name (defaults to the map's start).
        #[arg(long = "from")]
        from: Option<String>,
        /// Destination point name (defaults to the map's end).
        #[arg(long = "to")]
        to: Option<String>,
    },
    /// List the roads of the barely connected map.
    Spanning {
        /// Tab-separated road map to read.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { input, output } => {
            handle_analyze_command(&input, output.as_deref(), cli.format)
        }
        Command::Route { input, from, to } => {
            handle_route_command(&input, &RouteCommandArgs { from, to }, cli.format)
        }
        Command::Spanning { input } => handle_spanning_command(&input, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
