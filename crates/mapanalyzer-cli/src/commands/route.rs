//! Route command handler for the fastest route between two points.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use mapanalyzer_cli::output::{print_rendered, OutputFormat};
use mapanalyzer_lib::{find_fastest_route, load_roadmap, RouteReport};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting point; defaults to the start named in the road map header.
    pub from: Option<String>,
    /// Destination point; defaults to the end named in the road map header.
    pub to: Option<String>,
}

/// Handle the route subcommand.
///
/// An unreachable destination prints an empty route (`0 KM`, no roads) and
/// still succeeds.
pub fn handle_route_command(
    input: &Path,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let map = load_roadmap(input)
        .with_context(|| format!("failed to load road map from {}", input.display()))?;
    let from = args.from.as_deref().unwrap_or(map.start());
    let to = args.to.as_deref().unwrap_or(map.end());

    let route = find_fastest_route(map.points(), map.roads(), from, to)?;
    if route.is_empty() && from != to {
        warn!(from, to, "destination is unreachable; route is empty");
    }

    let report = RouteReport::new(from, to, &route);
    let rendered = match format {
        OutputFormat::Text => report.render_text(""),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
    };
    print_rendered(&rendered)?;
    Ok(())
}
